use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;

/// One progress sample sent while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLogEntry {
    /// Characters of the race text typed correctly so far
    pub text_length: usize,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// A player's typing progress in one race, oldest sample first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerLog {
    pub entries: Vec<TypeLogEntry>,
}

impl PlayerLog {
    pub fn new(entries: Vec<TypeLogEntry>) -> Self {
        Self { entries }
    }

    pub fn first(&self) -> Option<&TypeLogEntry> {
        self.entries.iter().min_by_key(|entry| entry.timestamp)
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&TypeLogEntry> {
        self.entries.iter().max_by_key(|entry| entry.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub player_id: PlayerId,
    pub finished: bool,
    /// Share of the race text typed, 0 to 100
    pub completion: f64,
    pub wpm: f64,
    /// Milliseconds between the first and the last sample
    pub elapsed_time: i64,
}

/// Ranked results of one race, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn winner(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    pub fn entry_for(&self, player_id: &PlayerId) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|entry| &entry.player_id == player_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
