//! Export adapters for CSV, JSON, and report parsing.
//!
//! Adapters format an in-memory view and write it to a caller-named
//! target; they never decide what to export. Write failures come back
//! as typed errors so the menu can report them and keep running.

pub mod csv;
pub mod json;

use crate::error::{DreamTeamError, Result};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

/// File write disposition for export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

/// Open an export target, mapping the interesting I/O failures to the
/// crate's error taxonomy.
pub(crate) fn open_export_target(path: &Path, mode: WriteMode) -> Result<File> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.create(true).append(true),
    };
    options.open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DreamTeamError::ExportTargetNotFound {
            path: path.display().to_string(),
        },
        ErrorKind::PermissionDenied => DreamTeamError::PermissionDenied {
            path: path.display().to_string(),
        },
        _ => DreamTeamError::Io(e),
    })
}
