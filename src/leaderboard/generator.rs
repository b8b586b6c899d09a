use std::cmp::Ordering;

use super::models::{Leaderboard, LeaderboardEntry, PlayerLog};
use crate::ids::{PlayerId, PlayerLogId, RaceId};
use crate::race::timing::CHARS_PER_WORD;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

struct Standing {
    player_id: PlayerId,
    typed: usize,
    last_timestamp: Option<i64>,
    elapsed_time: i64,
}

impl Standing {
    fn from_log(player_id: PlayerId, log: &PlayerLog, race_text_length: usize) -> Self {
        let typed = log
            .last()
            .map(|entry| entry.text_length.min(race_text_length))
            .unwrap_or_default();
        let elapsed_time = match (log.first(), log.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0,
        };

        Self {
            player_id,
            typed,
            last_timestamp: log.last().map(|entry| entry.timestamp),
            elapsed_time,
        }
    }

    /// Further along first, then whoever got there earlier, then by player id
    fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .typed
            .cmp(&self.typed)
            .then_with(|| {
                let mine = self.last_timestamp.unwrap_or(i64::MAX);
                let theirs = other.last_timestamp.unwrap_or(i64::MAX);
                mine.cmp(&theirs)
            })
            .then_with(|| self.player_id.cmp(&other.player_id))
    }

    fn into_entry(self, rank: usize, race_text_length: usize) -> LeaderboardEntry {
        let completion = if race_text_length == 0 {
            100.0
        } else {
            self.typed as f64 / race_text_length as f64 * 100.0
        };
        let wpm = if self.elapsed_time > 0 {
            let words = self.typed as f64 / CHARS_PER_WORD;
            words / (self.elapsed_time as f64 / MILLIS_PER_MINUTE)
        } else {
            0.0
        };

        LeaderboardEntry {
            rank,
            player_id: self.player_id,
            finished: self.typed >= race_text_length,
            completion: round2(completion),
            wpm: round2(wpm),
            elapsed_time: self.elapsed_time,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks every player that logged progress in `race_id`.
///
/// Logs of other races are ignored. The order is total: completion descending,
/// then the timestamp of the player's last sample ascending, then player id.
pub fn generate_leaderboard<'a>(
    player_logs: impl IntoIterator<Item = (&'a PlayerLogId, &'a PlayerLog)>,
    race_id: &RaceId,
    race_text_length: usize,
) -> Leaderboard {
    let mut standings: Vec<Standing> = player_logs
        .into_iter()
        .filter(|(log_id, _)| &log_id.race_id() == race_id)
        .map(|(log_id, log)| Standing::from_log(log_id.player_id(), log, race_text_length))
        .collect();

    standings.sort_by(Standing::cmp_rank);

    let entries = standings
        .into_iter()
        .enumerate()
        .map(|(index, standing)| standing.into_entry(index + 1, race_text_length))
        .collect();

    Leaderboard { entries }
}
