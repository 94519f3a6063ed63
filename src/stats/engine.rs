//! Aggregations over a snapshot of stored game results.
//!
//! Every function here is pure: it takes the records read from the store in a
//! single call and derives a view from them. Input order does not matter.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::models::{GlobalStats, Leaderboard, LeaderboardEntry, PlayerSummary};
use crate::scores::GameResult;

/// Mean of `count` integers summing to `sum`, rounded half-to-even at one decimal place.
///
/// Works on the exact rational `sum / count` so results never pick up binary
/// floating point drift before rounding.
pub fn average_one_decimal(sum: i64, count: i64) -> f64 {
    if count <= 0 {
        return 0.0;
    }

    let numerator = i128::from(sum) * 10;
    let denominator = i128::from(count);
    let mut tenths = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);

    match (remainder * 2).cmp(&denominator) {
        Ordering::Greater => tenths += 1,
        Ordering::Equal if tenths % 2 != 0 => tenths += 1,
        _ => {}
    }

    tenths as f64 / 10.0
}

/// Earlier games first; `id` settles identical timestamps.
fn chronological(a: &GameResult, b: &GameResult) -> Ordering {
    a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))
}

/// Whether `candidate` should replace `current` as a player's best game.
/// Ties on score keep the game that reached it first.
fn beats(candidate: &GameResult, current: &GameResult) -> bool {
    match candidate.score.cmp(&current.score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => chronological(candidate, current) == Ordering::Less,
    }
}

fn take_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

/// One entry per player holding that player's best game, highest score first.
///
/// Players tied on score are ordered by who reached it first, then by name.
/// A `limit` of zero or less yields no entries; `total_games` is always the
/// full record count.
pub fn leaderboard(records: &[GameResult], limit: i64) -> Leaderboard {
    let total_games = records.len() as i64;
    let limit = take_limit(limit);
    if limit == 0 {
        return Leaderboard {
            entries: Vec::new(),
            total_games,
        };
    }

    let mut best_by_player: HashMap<&str, &GameResult> = HashMap::new();
    for record in records {
        best_by_player
            .entry(record.player_name.as_str())
            .and_modify(|best| {
                if beats(record, best) {
                    *best = record;
                }
            })
            .or_insert(record);
    }

    let mut bests: Vec<&GameResult> = best_by_player.into_values().collect();
    bests.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| chronological(a, b))
            .then_with(|| a.player_name.cmp(&b.player_name))
    });

    let entries = bests
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, best)| LeaderboardEntry {
            rank: index as u32 + 1,
            player_name: best.player_name.clone(),
            score: best.score,
            snake_length: best.snake_length,
            created_at: best.created_at,
        })
        .collect();

    Leaderboard {
        entries,
        total_games,
    }
}

/// Best score, game count and average for one player.
///
/// Records belonging to other players are ignored. A player without games gets
/// the zero-valued summary rather than an error.
pub fn player_summary(player_name: &str, records: &[GameResult]) -> PlayerSummary {
    let scores: Vec<i64> = records
        .iter()
        .filter(|r| r.player_name == player_name)
        .map(|r| i64::from(r.score))
        .collect();

    let Some(best_score) = scores.iter().copied().max() else {
        return PlayerSummary::empty(player_name);
    };

    let total_games = scores.len() as i64;
    PlayerSummary {
        player_name: player_name.to_string(),
        best_score: best_score as i32,
        total_games,
        average_score: average_one_decimal(scores.iter().sum(), total_games),
    }
}

pub fn global_stats(records: &[GameResult]) -> GlobalStats {
    if records.is_empty() {
        return GlobalStats::default();
    }

    let total_games = records.len() as i64;
    let players: HashSet<&str> = records.iter().map(|r| r.player_name.as_str()).collect();
    let highest_score = records.iter().map(|r| r.score).max().unwrap_or(0);
    let longest_snake = records.iter().map(|r| r.snake_length).max().unwrap_or(1);
    let score_sum: i64 = records.iter().map(|r| i64::from(r.score)).sum();

    GlobalStats {
        total_games,
        total_players: players.len() as i64,
        highest_score,
        average_score: average_one_decimal(score_sum, total_games),
        longest_snake,
    }
}

/// A player's most recent games, newest first.
///
/// Games sharing a timestamp come back newest insert first.
pub fn player_history(player_name: &str, records: &[GameResult], limit: i64) -> Vec<GameResult> {
    let limit = take_limit(limit);

    let mut history: Vec<&GameResult> = records
        .iter()
        .filter(|r| r.player_name == player_name)
        .collect();
    history.sort_by(|a, b| chronological(b, a));

    history.into_iter().take(limit).cloned().collect()
}
