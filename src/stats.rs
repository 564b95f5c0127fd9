//! Career statistics: the closed set of tracked statistics and the
//! per-player stat line loaded from the roster document.

use crate::error::DreamTeamError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The twelve career statistics tracked for every player.
///
/// Statistic selection is always expressed through this enum; there is
/// no lookup by arbitrary field-name strings. `FromStr` is the single
/// boundary where an external name becomes a validated key.
///
/// # Examples
///
/// ```rust
/// use dream_team::StatKey;
///
/// let key: StatKey = "total-rebounds".parse().unwrap();
/// assert_eq!(key, StatKey::TotalRebounds);
/// assert_eq!(key.label(), "Total rebounds");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Seasons,
    TotalPoints,
    PointsPerGame,
    TotalRebounds,
    ReboundsPerGame,
    TotalAssists,
    AssistsPerGame,
    TotalSteals,
    TotalBlocks,
    FieldGoalPct,
    FreeThrowPct,
    ThreePointPct,
}

impl StatKey {
    /// Every key, in the order stat sheets list them.
    pub const ALL: [StatKey; 12] = [
        StatKey::Seasons,
        StatKey::TotalPoints,
        StatKey::PointsPerGame,
        StatKey::TotalRebounds,
        StatKey::ReboundsPerGame,
        StatKey::TotalAssists,
        StatKey::AssistsPerGame,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
        StatKey::FieldGoalPct,
        StatKey::FreeThrowPct,
        StatKey::ThreePointPct,
    ];

    /// Human-readable label used in report lines and CSV headers.
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Seasons => "Seasons",
            StatKey::TotalPoints => "Total points",
            StatKey::PointsPerGame => "Points per game",
            StatKey::TotalRebounds => "Total rebounds",
            StatKey::ReboundsPerGame => "Rebounds per game",
            StatKey::TotalAssists => "Total assists",
            StatKey::AssistsPerGame => "Assists per game",
            StatKey::TotalSteals => "Total steals",
            StatKey::TotalBlocks => "Total blocks",
            StatKey::FieldGoalPct => "Field goal percentage",
            StatKey::FreeThrowPct => "Free throw percentage",
            StatKey::ThreePointPct => "Three point percentage",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StatKey {
    type Err = DreamTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seasons" => Ok(StatKey::Seasons),
            "total-points" => Ok(StatKey::TotalPoints),
            "points-per-game" => Ok(StatKey::PointsPerGame),
            "total-rebounds" => Ok(StatKey::TotalRebounds),
            "rebounds-per-game" => Ok(StatKey::ReboundsPerGame),
            "total-assists" => Ok(StatKey::TotalAssists),
            "assists-per-game" => Ok(StatKey::AssistsPerGame),
            "total-steals" => Ok(StatKey::TotalSteals),
            "total-blocks" => Ok(StatKey::TotalBlocks),
            "field-goal-pct" => Ok(StatKey::FieldGoalPct),
            "free-throw-pct" => Ok(StatKey::FreeThrowPct),
            "three-point-pct" => Ok(StatKey::ThreePointPct),
            _ => Err(DreamTeamError::UnknownStat {
                name: s.to_string(),
            }),
        }
    }
}

/// One player's career statistics as loaded from the roster document.
///
/// Every field is optional: a statistic absent from the source JSON
/// stays absent. It is never coerced to zero, and absent values never
/// participate in comparisons or extremum searches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatLine {
    #[serde(rename = "temporadas")]
    pub seasons: Option<u32>,
    #[serde(rename = "puntos_totales")]
    pub total_points: Option<f64>,
    #[serde(rename = "promedio_puntos_por_partido")]
    pub points_per_game: Option<f64>,
    #[serde(rename = "rebotes_totales")]
    pub total_rebounds: Option<f64>,
    #[serde(rename = "promedio_rebotes_por_partido")]
    pub rebounds_per_game: Option<f64>,
    #[serde(rename = "asistencias_totales")]
    pub total_assists: Option<f64>,
    #[serde(rename = "promedio_asistencias_por_partido")]
    pub assists_per_game: Option<f64>,
    #[serde(rename = "robos_totales")]
    pub total_steals: Option<f64>,
    #[serde(rename = "bloqueos_totales")]
    pub total_blocks: Option<f64>,
    #[serde(rename = "porcentaje_tiros_de_campo")]
    pub field_goal_pct: Option<f64>,
    #[serde(rename = "porcentaje_tiros_libres")]
    pub free_throw_pct: Option<f64>,
    #[serde(rename = "porcentaje_tiros_triples")]
    pub three_point_pct: Option<f64>,
}

impl StatLine {
    /// Look up a statistic by key. `None` means the roster document did
    /// not carry the value for this player.
    pub fn get(&self, key: StatKey) -> Option<f64> {
        match key {
            StatKey::Seasons => self.seasons.map(f64::from),
            StatKey::TotalPoints => self.total_points,
            StatKey::PointsPerGame => self.points_per_game,
            StatKey::TotalRebounds => self.total_rebounds,
            StatKey::ReboundsPerGame => self.rebounds_per_game,
            StatKey::TotalAssists => self.total_assists,
            StatKey::AssistsPerGame => self.assists_per_game,
            StatKey::TotalSteals => self.total_steals,
            StatKey::TotalBlocks => self.total_blocks,
            StatKey::FieldGoalPct => self.field_goal_pct,
            StatKey::FreeThrowPct => self.free_throw_pct,
            StatKey::ThreePointPct => self.three_point_pct,
        }
    }
}

/// Render an optional statistic for reports and stat sheets.
pub fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}
