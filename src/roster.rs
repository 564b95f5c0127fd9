//! Roster loading and query operations.
//!
//! The roster is parsed once at startup from the `jugadores` array of
//! the source JSON document and never mutated afterwards. Queries and
//! rankings always produce new views over the same players; the 1-based
//! display index therefore stays stable for the process lifetime.

use crate::error::{DreamTeamError, Result};
use crate::stats::{display_value, StatKey, StatLine};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Achievement string marking Hall of Fame membership in the source
/// document. Membership is an exact string match, not a substring test.
pub const HALL_OF_FAME_MARKER: &str = "Miembro del Salon de la Fama del Baloncesto";

/// One player as loaded from the roster document.
#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion")]
    pub position: String,
    #[serde(rename = "logros", default)]
    pub achievements: Vec<String>,
    #[serde(rename = "estadisticas", default)]
    pub stats: StatLine,
}

impl Player {
    /// Whether the fixed Hall of Fame marker appears among this
    /// player's achievements.
    pub fn is_hall_of_fame(&self) -> bool {
        self.achievements.iter().any(|a| a == HALL_OF_FAME_MARKER)
    }

    /// Full stat sheet as `Label: value` lines, one per statistic.
    ///
    /// This block is both the display form and the payload handed to
    /// the CSV export adapter.
    pub fn stat_sheet(&self) -> String {
        let mut lines = Vec::with_capacity(1 + StatKey::ALL.len());
        lines.push(format!("Name: {}", self.name));
        for key in StatKey::ALL {
            lines.push(format!("{}: {}", key.label(), display_value(self.stats.get(key))));
        }
        lines.join("\n")
    }

    /// One-line summary showing the player's name and two chosen
    /// statistics.
    pub fn summary_line(&self, a: StatKey, b: StatKey) -> String {
        format!(
            "{} {}: {} {}: {}",
            self.name,
            a.label(),
            display_value(self.stats.get(a)),
            b.label(),
            display_value(self.stats.get(b)),
        )
    }
}

#[derive(Debug, Deserialize)]
struct RosterDocument {
    jugadores: Option<Vec<Player>>,
}

/// The full ordered collection of players for the season snapshot.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Load the roster from a JSON document with a top-level
    /// `jugadores` array.
    ///
    /// A missing file is `RosterNotFound` and a document without the
    /// `jugadores` key is `MalformedRoster`; both are fatal at startup
    /// since no operation can run without a roster.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DreamTeamError::RosterNotFound {
                path: path.display().to_string(),
            },
            _ => DreamTeamError::Io(e),
        })?;
        let doc: RosterDocument = serde_json::from_str(&raw)?;
        let players = doc.jugadores.ok_or_else(|| DreamTeamError::MalformedRoster {
            path: path.display().to_string(),
        })?;
        Ok(Self { players })
    }

    /// Build a roster directly from players, preserving their order.
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// All players in source-document order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// 1-based lookup matching the displayed roster index.
    pub fn by_index(&self, index: usize) -> Option<&Player> {
        index.checked_sub(1).and_then(|i| self.players.get(i))
    }

    /// Substring search against player names after title-casing the
    /// pattern, so `"jordan"` finds `"Michael Jordan"`. Returns an
    /// empty vec when nothing matches; the blocking re-prompt variant
    /// lives in the menu layer.
    pub fn find_by_name(&self, pattern: &str) -> Vec<&Player> {
        let pattern = title_case(pattern);
        self.players
            .iter()
            .filter(|p| p.name.contains(&pattern))
            .collect()
    }

    /// All players tied at the maximum (`want_max`) or minimum of
    /// `key`. Players without a value never participate; if no player
    /// carries the statistic the result is empty. Ties are preserved,
    /// never broken.
    pub fn extremum_by(&self, key: StatKey, want_max: bool) -> Vec<&Player> {
        let mut best: Option<f64> = None;
        let mut winners: Vec<&Player> = Vec::new();

        for player in &self.players {
            let Some(value) = player.stats.get(key) else {
                continue;
            };
            match best {
                None => {
                    best = Some(value);
                    winners.push(player);
                }
                Some(b) if (want_max && value > b) || (!want_max && value < b) => {
                    best = Some(value);
                    winners.clear();
                    winners.push(player);
                }
                Some(b) if value == b => winners.push(player),
                Some(_) => {}
            }
        }

        winners
    }

    /// Unique position strings, sorted for stable display.
    pub fn distinct_positions(&self) -> Vec<String> {
        let positions: BTreeSet<&str> =
            self.players.iter().map(|p| p.position.as_str()).collect();
        positions.into_iter().map(str::to_owned).collect()
    }
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest, mirroring proper-noun formatting of the names.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
