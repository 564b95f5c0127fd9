//! Error types for the Dream Team roster CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DreamTeamError>;

#[derive(Error, Debug)]
pub enum DreamTeamError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster file not found: {path}")]
    RosterNotFound { path: String },

    #[error("Roster document has no `jugadores` array: {path}")]
    MalformedRoster { path: String },

    #[error("Unknown statistic: {name}")]
    UnknownStat { name: String },

    #[error("Export target not found: {path}")]
    ExportTargetNotFound { path: String },

    #[error("Permission denied for export target: {path}")]
    PermissionDenied { path: String },
}
