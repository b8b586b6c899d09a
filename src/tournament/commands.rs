use serde::{Deserialize, Serialize};

use super::errors::{ErrorLog, TournamentError};
use super::models::{Player, Race, Tournament};
use crate::ids::{PlayerId, PlayerLogId, RaceId, TournamentId};
use crate::leaderboard::{Leaderboard, PlayerLog};

/// State transitions produced by the tournament effects and applied by the store.
///
/// Every command carries the full next value of the entity it touches, so
/// applying the same command twice yields the same state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StateCommand {
    AddTournament {
        tournament_id: TournamentId,
        tournament: Tournament,
    },
    UpdateTournament {
        tournament_id: TournamentId,
        tournament: Tournament,
    },
    /// Adds the player and registers them as a member of the tournament
    AddPlayer {
        tournament_id: TournamentId,
        player_id: PlayerId,
        player: Player,
    },
    UpdatePlayer {
        player_id: PlayerId,
        player: Player,
    },
    /// Removes the player and their membership
    RemovePlayer {
        tournament_id: TournamentId,
        player_id: PlayerId,
    },
    /// Adds the race and appends it to the tournament's race ids
    AddRace {
        tournament_id: TournamentId,
        race_id: RaceId,
        race: Race,
    },
    UpdateRace {
        race_id: RaceId,
        race: Race,
    },
    UpdatePlayerLog {
        player_log_id: PlayerLogId,
        player_log: PlayerLog,
    },
    AddLeaderboard {
        race_id: RaceId,
        leaderboard: Leaderboard,
    },
    LogError {
        error_log: ErrorLog,
        timestamp: i64,
    },
}

impl StateCommand {
    pub fn log_error(error: &TournamentError, timestamp: i64) -> Self {
        StateCommand::LogError {
            error_log: error.to_error_log(),
            timestamp,
        }
    }

    /// The tournament whose state this command changes
    pub fn tournament_id(&self) -> Option<TournamentId> {
        match self {
            StateCommand::AddTournament { tournament_id, .. }
            | StateCommand::UpdateTournament { tournament_id, .. }
            | StateCommand::AddPlayer { tournament_id, .. }
            | StateCommand::RemovePlayer { tournament_id, .. }
            | StateCommand::AddRace { tournament_id, .. } => Some(tournament_id.clone()),
            StateCommand::UpdatePlayer { player, .. } => Some(player.tournament_id.clone()),
            StateCommand::UpdateRace { race_id, .. }
            | StateCommand::AddLeaderboard { race_id, .. } => Some(race_id.tournament_id()),
            StateCommand::UpdatePlayerLog { player_log_id, .. } => {
                Some(player_log_id.tournament_id())
            }
            StateCommand::LogError { .. } => None,
        }
    }

    pub fn error_log(&self) -> Option<&ErrorLog> {
        match self {
            StateCommand::LogError { error_log, .. } => Some(error_log),
            _ => None,
        }
    }

    /// Get a human-readable name of the command
    pub fn command_type(&self) -> &'static str {
        match self {
            StateCommand::AddTournament { .. } => "add_tournament",
            StateCommand::UpdateTournament { .. } => "update_tournament",
            StateCommand::AddPlayer { .. } => "add_player",
            StateCommand::UpdatePlayer { .. } => "update_player",
            StateCommand::RemovePlayer { .. } => "remove_player",
            StateCommand::AddRace { .. } => "add_race",
            StateCommand::UpdateRace { .. } => "update_race",
            StateCommand::UpdatePlayerLog { .. } => "update_player_log",
            StateCommand::AddLeaderboard { .. } => "add_leaderboard",
            StateCommand::LogError { .. } => "log_error",
        }
    }
}
