//! CSV export of labeled-line reports.
//!
//! The payload is a block of `Label: value` lines; the adapter writes
//! two comma-joined rows, all labels then all values. Values are
//! written verbatim: embedded commas or quotes are not escaped, a known
//! limitation of this two-row format.

use super::{open_export_target, WriteMode};
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Split `Label: value` lines into pairs. Lines without the separator
/// are skipped.
pub fn labeled_pairs(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            line.split_once(": ")
                .map(|(label, value)| (label.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Write a labeled-line report as a two-row CSV file.
pub fn export_labeled_csv(path: impl AsRef<Path>, mode: WriteMode, content: &str) -> Result<()> {
    let path = path.as_ref();
    let pairs = labeled_pairs(content);
    let headers: Vec<&str> = pairs.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<&str> = pairs.iter().map(|(_, value)| value.as_str()).collect();

    let mut file = open_export_target(path, mode)?;
    writeln!(file, "{}", headers.join(","))?;
    writeln!(file, "{}", values.join(","))?;
    Ok(())
}

/// Read a two-row CSV back into `(header, value)` pairs. Only
/// meaningful for values without embedded commas.
pub fn parse_labeled_csv(text: &str) -> Vec<(String, String)> {
    let mut lines = text.lines();
    let (Some(headers), Some(values)) = (lines.next(), lines.next()) else {
        return Vec::new();
    };
    headers
        .split(',')
        .map(str::to_string)
        .zip(values.split(',').map(str::to_string))
        .collect()
}

/// Parse a seasons report (`Name: N seasons` per line) into
/// `(name, seasons)` rows, keeping report order. Lines that do not
/// carry a leading integer value are skipped.
pub fn seasons_pairs(report: &str) -> Vec<(String, u32)> {
    report
        .lines()
        .filter_map(|line| {
            let (name, rest) = line.split_once(": ")?;
            let seasons = rest.split_whitespace().next()?.parse().ok()?;
            Some((name.trim().to_string(), seasons))
        })
        .collect()
}
