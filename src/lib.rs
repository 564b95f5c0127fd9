//! Dream Team roster CLI Library
//!
//! Loads a fixed basketball roster with career statistics from a JSON
//! document and exposes the query, ranking, and export operations
//! behind the interactive menu.
//!
//! ## Features
//!
//! - **Roster Queries**: name substring search, Hall of Fame checks,
//!   tie-preserving extremum search over any statistic
//! - **Ranking**: quicksort by one statistic or by the sum of two,
//!   percentage-of-maximum reports
//! - **Exports**: two-row CSV, 4-space-indented JSON, and SQLite
//!   tables for the seasons and positions listings
//! - **Interactive Menu**: regex-validated prompts that re-ask on bad
//!   input instead of failing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dream_team::{ranking, Roster, StatKey};
//!
//! # fn example() -> dream_team::Result<()> {
//! let roster = Roster::load("dream_team.json")?;
//! let by_points = ranking::sort_by_stat(roster.players(), false, StatKey::TotalPoints);
//! for player in &by_points {
//!     println!("{}", player.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod menu;
pub mod ranking;
pub mod roster;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use error::{DreamTeamError, Result};
pub use roster::{Player, Roster, HALL_OF_FAME_MARKER};
pub use stats::{StatKey, StatLine};
