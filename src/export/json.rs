//! JSON export with 4-space indentation.
//!
//! Writes a single name → seasons object, keeping the ranked insertion
//! order (`serde_json` with `preserve_order`) and leaving non-ASCII
//! characters unescaped.

use super::{open_export_target, WriteMode};
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Serialize `(name, seasons)` rows as a pretty-printed JSON object.
pub fn export_seasons_json(
    path: impl AsRef<Path>,
    mode: WriteMode,
    rows: &[(String, u32)],
) -> Result<()> {
    let mut object = serde_json::Map::new();
    for (name, seasons) in rows {
        object.insert(name.clone(), serde_json::Value::from(*seasons));
    }

    let file = open_export_target(path.as_ref(), mode)?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(file, formatter);
    object.serialize(&mut serializer)?;
    Ok(())
}
