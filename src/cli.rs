//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Menu-driven browser over a fixed basketball roster: queries,
/// rankings, and CSV/JSON/SQLite exports.
#[derive(Debug, Parser)]
#[clap(name = "dream-team", about = "Basketball roster query and export CLI")]
pub struct DreamTeam {
    /// Path to the roster JSON document.
    #[clap(long, short, default_value = "dream_team.json")]
    pub roster: PathBuf,

    /// Directory where CSV/JSON/database exports are written.
    #[clap(long, short, default_value = ".")]
    pub export_dir: PathBuf,
}
