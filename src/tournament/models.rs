use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumString};

use crate::ids::{PlayerId, RaceId, TournamentId};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum TournamentState {
    #[default]
    Empty,
    Lobby,
    Ready,
    Countdown,
    Race,
    Leaderboard,
}

impl TournamentState {
    /// Countdown and Race belong to a race in progress; membership changes
    /// must not move the tournament out of them
    pub fn is_racing(&self) -> bool {
        matches!(self, TournamentState::Countdown | TournamentState::Race)
    }

    /// Idle state for a tournament with `members` players
    pub fn for_members(members: usize, ready_quorum: usize) -> Self {
        match members {
            0 => TournamentState::Empty,
            n if n >= ready_quorum.max(1) => TournamentState::Ready,
            _ => TournamentState::Lobby,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum PlayerState {
    #[default]
    Idle,
    Racing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub state: TournamentState,
    /// Races in the order they were started
    pub race_ids: Vec<RaceId>,
    pub player_ids: BTreeSet<PlayerId>,
}

impl Tournament {
    /// A freshly created tournament, before its first player is registered
    pub fn new_lobby() -> Self {
        Self {
            state: TournamentState::Lobby,
            ..Self::default()
        }
    }

    /// Sequence number the next race will get
    pub fn next_race_sequence(&self) -> usize {
        self.race_ids.len()
    }

    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.player_ids.contains(player_id)
    }

    pub fn latest_race(&self) -> Option<&RaceId> {
        self.race_ids.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub avatar_link: String,
    pub state: PlayerState,
    /// The tournament this player is a member of
    pub tournament_id: TournamentId,
}

impl Player {
    pub fn new(name: String, avatar_link: String, tournament_id: TournamentId) -> Self {
        Self {
            name,
            avatar_link,
            state: PlayerState::Idle,
            tournament_id,
        }
    }

    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            name: self.name.clone(),
            avatar_link: self.avatar_link.clone(),
        }
    }

    pub fn with_state(&self, state: PlayerState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

/// What a race remembers about a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: String,
    pub avatar_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub text: String,
    /// Seconds
    pub timeout_duration: u32,
    /// Milliseconds since the Unix epoch
    pub started_timestamp: i64,
    /// Snapshot of the members taken when the countdown started
    pub players: BTreeMap<PlayerId, PlayerProfile>,
    pub is_on_going: bool,
    pub race_started_by: PlayerId,
}

impl Race {
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}
