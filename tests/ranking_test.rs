//! Unit tests for the ranking engine

use dream_team::{ranking, Player, StatKey, StatLine};

fn player(name: &str, stats: StatLine) -> Player {
    Player {
        name: name.to_string(),
        position: "PG".to_string(),
        achievements: vec![],
        stats,
    }
}

fn with_seasons(name: &str, n: u32) -> Player {
    player(
        name,
        StatLine {
            seasons: Some(n),
            ..Default::default()
        },
    )
}

fn with_steals_blocks(name: &str, steals: f64, blocks: f64) -> Player {
    player(
        name,
        StatLine {
            total_steals: Some(steals),
            total_blocks: Some(blocks),
            ..Default::default()
        },
    )
}

fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_sort_descending_puts_highest_first() {
    // A and C are tied; their relative order is implementation-defined.
    let players = vec![
        with_seasons("A", 5),
        with_seasons("B", 10),
        with_seasons("C", 5),
    ];

    let sorted = ranking::sort_by_stat(&players, false, StatKey::Seasons);
    assert_eq!(sorted.len(), 3);
    assert_eq!(sorted[0].name, "B");
    assert_eq!(sorted[1].stats.seasons, Some(5));
    assert_eq!(sorted[2].stats.seasons, Some(5));
}

#[test]
fn test_sort_ascending_is_nondecreasing() {
    let players = vec![
        with_seasons("A", 9),
        with_seasons("B", 3),
        with_seasons("C", 14),
        with_seasons("D", 3),
        with_seasons("E", 11),
    ];

    let sorted = ranking::sort_by_stat(&players, true, StatKey::Seasons);
    let values: Vec<u32> = sorted.iter().filter_map(|p| p.stats.seasons).collect();
    assert_eq!(values, vec![3, 3, 9, 11, 14]);
}

#[test]
fn test_sort_is_a_permutation_of_the_input() {
    let players = vec![
        with_seasons("A", 4),
        with_seasons("B", 20),
        with_seasons("C", 1),
        with_seasons("D", 4),
    ];

    for ascending in [true, false] {
        let sorted = ranking::sort_by_stat(&players, ascending, StatKey::Seasons);
        assert_eq!(sorted.len(), players.len());

        let mut expected = names(&players);
        let mut actual = names(&sorted);
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_sort_handles_empty_and_single() {
    assert!(ranking::sort_by_stat(&[], true, StatKey::Seasons).is_empty());

    let one = vec![with_seasons("A", 3)];
    let sorted = ranking::sort_by_stat(&one, false, StatKey::Seasons);
    assert_eq!(names(&sorted), vec!["A"]);
}

#[test]
fn test_absent_values_sort_last_in_both_directions() {
    let players = vec![
        player("NoStats", StatLine::default()),
        with_seasons("Low", 2),
        with_seasons("High", 18),
    ];

    let descending = ranking::sort_by_stat(&players, false, StatKey::Seasons);
    assert_eq!(names(&descending), vec!["High", "Low", "NoStats"]);

    let ascending = ranking::sort_by_stat(&players, true, StatKey::Seasons);
    assert_eq!(names(&ascending), vec!["Low", "High", "NoStats"]);
}

#[test]
fn test_sort_by_stat_sum_orders_by_combined_value() {
    let players = vec![
        with_steals_blocks("A", 100.0, 50.0),  // 150
        with_steals_blocks("B", 300.0, 100.0), // 400
        with_steals_blocks("C", 10.0, 340.0),  // 350
    ];

    let sorted = ranking::sort_by_stat_sum(
        &players,
        false,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
    );
    assert_eq!(names(&sorted), vec!["B", "C", "A"]);
}

#[test]
fn test_percentage_of_max_top_player_is_always_100() {
    let players = vec![
        with_steals_blocks("B", 300.0, 100.0),
        with_steals_blocks("C", 10.0, 340.0),
        with_steals_blocks("A", 100.0, 50.0),
    ];

    let shares = ranking::percentage_of_max(
        &players,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
        players.len(),
    );
    assert_eq!(shares.len(), 3);
    assert_eq!(shares[0].rank, 1);
    assert_eq!(shares[0].name, "B");
    assert_eq!(shares[0].percentage, 100.0);
    assert_eq!(shares[1].percentage, 87.5); // 350 / 400
    assert_eq!(shares[2].percentage, 37.5); // 150 / 400
}

#[test]
fn test_percentage_of_max_respects_limit() {
    let players = vec![
        with_steals_blocks("B", 300.0, 100.0),
        with_steals_blocks("C", 10.0, 340.0),
        with_steals_blocks("A", 100.0, 50.0),
    ];

    let shares = ranking::percentage_of_max(
        &players,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
        2,
    );
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[1].rank, 2);
    assert_eq!(shares[1].name, "C");
}

#[test]
fn test_percentage_of_max_rounds_to_two_decimals() {
    let players = vec![
        with_steals_blocks("Top", 200.0, 100.0), // 300
        with_steals_blocks("Third", 50.0, 50.0), // 100 -> 33.33%
    ];

    let shares =
        ranking::percentage_of_max(&players, StatKey::TotalSteals, StatKey::TotalBlocks, 2);
    assert_eq!(shares[1].percentage, 33.33);
}

#[test]
fn test_percentage_of_max_all_zero_values_are_full_shares() {
    // Zero steals and zero blocks are valid statistics; everyone is
    // tied with the top combined value, so every share is 100.00,
    // never NaN from a zero base.
    let players = vec![
        with_steals_blocks("A", 0.0, 0.0),
        with_steals_blocks("B", 0.0, 0.0),
    ];

    let shares = ranking::percentage_of_max(
        &players,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
        players.len(),
    );
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].percentage, 100.0);
    assert_eq!(shares[1].percentage, 100.0);
}

#[test]
fn test_percentage_of_max_skips_players_without_values() {
    // A player with no steals/blocks data sorts to the tail but must
    // not show up as a 0.00% share.
    let players = vec![
        with_steals_blocks("Top", 100.0, 100.0),
        player("NoStats", StatLine::default()),
    ];

    let shares =
        ranking::percentage_of_max(&players, StatKey::TotalSteals, StatKey::TotalBlocks, 2);
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].name, "Top");
    assert_eq!(shares[0].percentage, 100.0);
}

#[test]
fn test_percentage_of_max_absent_base_is_empty() {
    let players = vec![
        player("NoStats", StatLine::default()),
        with_steals_blocks("A", 10.0, 10.0),
    ];

    let shares = ranking::percentage_of_max(
        &players,
        StatKey::TotalSteals,
        StatKey::TotalBlocks,
        players.len(),
    );
    assert!(shares.is_empty());
}

#[test]
fn test_percentage_of_max_empty_input_is_empty() {
    let shares =
        ranking::percentage_of_max(&[], StatKey::TotalSteals, StatKey::TotalBlocks, 5);
    assert!(shares.is_empty());
}
