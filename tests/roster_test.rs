//! Unit tests for roster loading and query operations

use dream_team::{DreamTeamError, Player, Roster, StatKey, StatLine, HALL_OF_FAME_MARKER};
use std::io::Write;

fn player(name: &str, position: &str, stats: StatLine) -> Player {
    Player {
        name: name.to_string(),
        position: position.to_string(),
        achievements: vec![],
        stats,
    }
}

fn seasons(n: u32) -> StatLine {
    StatLine {
        seasons: Some(n),
        ..Default::default()
    }
}

fn rebounds(n: f64) -> StatLine {
    StatLine {
        total_rebounds: Some(n),
        ..Default::default()
    }
}

#[test]
fn test_load_roster_from_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "jugadores": [
                {{
                    "nombre": "Michael Jordan",
                    "posicion": "Escolta",
                    "logros": ["{HALL_OF_FAME_MARKER}"],
                    "estadisticas": {{
                        "temporadas": 15,
                        "puntos_totales": 32292,
                        "promedio_puntos_por_partido": 30.1
                    }}
                }},
                {{
                    "nombre": "Dennis Rodman",
                    "posicion": "Ala-Pivot",
                    "logros": [],
                    "estadisticas": {{ "temporadas": 14 }}
                }}
            ]
        }}"#
    )
    .unwrap();

    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.len(), 2);

    let jordan = roster.by_index(1).unwrap();
    assert_eq!(jordan.name, "Michael Jordan");
    assert_eq!(jordan.position, "Escolta");
    assert!(jordan.is_hall_of_fame());
    assert_eq!(jordan.stats.get(StatKey::Seasons), Some(15.0));
    assert_eq!(jordan.stats.get(StatKey::PointsPerGame), Some(30.1));
    // Absent in the document stays absent, never zero.
    assert_eq!(jordan.stats.get(StatKey::TotalBlocks), None);

    let rodman = roster.by_index(2).unwrap();
    assert!(!rodman.is_hall_of_fame());
}

#[test]
fn test_load_missing_file_is_not_found() {
    let err = Roster::load("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, DreamTeamError::RosterNotFound { .. }));
}

#[test]
fn test_load_without_jugadores_key_is_malformed() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "equipos": [] }}"#).unwrap();

    let err = Roster::load(file.path()).unwrap_err();
    assert!(matches!(err, DreamTeamError::MalformedRoster { .. }));
}

#[test]
fn test_load_invalid_json_is_json_error() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "not json at all").unwrap();

    let err = Roster::load(file.path()).unwrap_err();
    assert!(matches!(err, DreamTeamError::Json(_)));
}

#[test]
fn test_find_by_name_title_cases_the_pattern() {
    let roster = Roster::from_players(vec![
        player("Michael Jordan", "SG", StatLine::default()),
        player("Magic Johnson", "PG", StatLine::default()),
    ]);

    let matches = roster.find_by_name("jordan");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Michael Jordan");

    assert!(roster.find_by_name("bird").is_empty());
}

#[test]
fn test_by_index_is_one_based() {
    let roster = Roster::from_players(vec![
        player("A", "PG", StatLine::default()),
        player("B", "SF", StatLine::default()),
    ]);

    assert_eq!(roster.by_index(1).unwrap().name, "A");
    assert_eq!(roster.by_index(2).unwrap().name, "B");
    assert!(roster.by_index(0).is_none());
    assert!(roster.by_index(3).is_none());
}

#[test]
fn test_extremum_keeps_all_ties_and_skips_absent() {
    let roster = Roster::from_players(vec![
        player("A", "PG", rebounds(100.0)),
        player("B", "SG", rebounds(250.0)),
        player("C", "SF", StatLine::default()),
        player("D", "PF", rebounds(250.0)),
    ]);

    let max = roster.extremum_by(StatKey::TotalRebounds, true);
    let names: Vec<&str> = max.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B", "D"]);

    let min = roster.extremum_by(StatKey::TotalRebounds, false);
    let names: Vec<&str> = min.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn test_extremum_all_equal_returns_full_roster_both_ways() {
    let roster = Roster::from_players(vec![
        player("A", "PG", seasons(7)),
        player("B", "SG", seasons(7)),
        player("C", "SF", seasons(7)),
    ]);

    assert_eq!(roster.extremum_by(StatKey::Seasons, true).len(), 3);
    assert_eq!(roster.extremum_by(StatKey::Seasons, false).len(), 3);
}

#[test]
fn test_extremum_with_no_values_is_empty() {
    let roster = Roster::from_players(vec![
        player("A", "PG", StatLine::default()),
        player("B", "SG", StatLine::default()),
    ]);

    assert!(roster.extremum_by(StatKey::TotalSteals, true).is_empty());
    assert!(Roster::default().extremum_by(StatKey::TotalSteals, true).is_empty());
}

#[test]
fn test_distinct_positions_deduplicates() {
    let roster = Roster::from_players(vec![
        player("A", "PG", StatLine::default()),
        player("B", "SF", StatLine::default()),
        player("C", "PG", StatLine::default()),
    ]);

    assert_eq!(roster.distinct_positions(), vec!["PG", "SF"]);
}

#[test]
fn test_empty_roster_queries_do_not_crash() {
    let roster = Roster::default();
    assert!(roster.is_empty());
    assert!(roster.find_by_name("anyone").is_empty());
    assert!(roster.distinct_positions().is_empty());
    assert!(roster.by_index(1).is_none());
}
