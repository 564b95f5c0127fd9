//! Stateless ranking algorithms over player slices.
//!
//! Sorting is a plain recursive quicksort: the pivot is the first
//! element of the current slice and tied players land in the right
//! partition, so relative order among ties is not guaranteed. Already
//! sorted input degrades to O(n²), an accepted property of this pivot
//! choice.
//!
//! Absent-value policy: a player without a value for the chosen
//! statistic sorts after every player with one, regardless of sort
//! direction. The policy lives in [`compare`] and nowhere else. The
//! percentage-of-maximum report follows the same rule from the other
//! side: a player without a combined value is skipped entirely, never
//! reported as a 0% share.

use crate::roster::Player;
use crate::stats::StatKey;
use std::cmp::Ordering;

/// Combined value of two statistics; absent when either side is absent.
fn stat_sum(player: &Player, a: StatKey, b: StatKey) -> Option<f64> {
    Some(player.stats.get(a)? + player.stats.get(b)?)
}

/// Ordering for optional stat values: present values compare
/// numerically in the requested direction, absent values sort last in
/// both directions.
fn compare(a: Option<f64>, b: Option<f64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort players by a single statistic. Returns a new ordering; the
/// input is never mutated.
pub fn sort_by_stat(players: &[Player], ascending: bool, key: StatKey) -> Vec<Player> {
    quicksort(players, &|p| p.stats.get(key), ascending)
}

/// Sort players by the sum of two statistics.
pub fn sort_by_stat_sum(
    players: &[Player],
    ascending: bool,
    a: StatKey,
    b: StatKey,
) -> Vec<Player> {
    quicksort(players, &|p| stat_sum(p, a, b), ascending)
}

fn quicksort<K>(players: &[Player], value: &K, ascending: bool) -> Vec<Player>
where
    K: Fn(&Player) -> Option<f64>,
{
    if players.len() <= 1 {
        return players.to_vec();
    }

    let pivot = &players[0];
    let pivot_value = value(pivot);
    let mut left = Vec::new();
    let mut right = Vec::new();

    for player in &players[1..] {
        if compare(value(player), pivot_value, ascending) == Ordering::Less {
            left.push(player.clone());
        } else {
            right.push(player.clone());
        }
    }

    let mut sorted = quicksort(&left, value, ascending);
    sorted.push(pivot.clone());
    sorted.extend(quicksort(&right, value, ascending));
    sorted
}

/// One row of the percentage-of-maximum report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedShare {
    pub rank: usize,
    pub name: String,
    pub value_a: Option<f64>,
    pub value_b: Option<f64>,
    /// Share of the top combined value, rounded to two decimals.
    pub percentage: f64,
}

/// Express each player's combined `a + b` value as a percentage of the
/// top-ranked player's combined value.
///
/// Precondition: `players` is already sorted descending by the combined
/// value. The 100% base is the combined value of the first element and
/// is deliberately not re-derived by scanning; calling this with an
/// ascending ordering silently yields a wrong base. Callers must also
/// keep `limit` within `1..=players.len()`.
///
/// Players within the first `limit` whose combined value is absent are
/// skipped, not reported as zero. A combined value equal to the base is
/// always exactly 100.00, which also covers a base of 0.0 (every tied
/// row is a full share, never NaN).
pub fn percentage_of_max(
    players: &[Player],
    a: StatKey,
    b: StatKey,
    limit: usize,
) -> Vec<RankedShare> {
    let Some(first) = players.first() else {
        return Vec::new();
    };
    let Some(max_combined) = stat_sum(first, a, b) else {
        return Vec::new();
    };

    players
        .iter()
        .take(limit)
        .filter_map(|player| {
            let combined = stat_sum(player, a, b)?;
            let percentage = if combined == max_combined {
                100.0
            } else {
                round2(combined * 100.0 / max_combined)
            };
            Some((player, percentage))
        })
        .enumerate()
        .map(|(i, (player, percentage))| RankedShare {
            rank: i + 1,
            name: player.name.clone(),
            value_a: player.stats.get(a),
            value_b: player.stats.get(b),
            percentage,
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
