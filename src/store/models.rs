use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ids::{PlayerId, PlayerLogId, RaceId, TournamentId};
use crate::leaderboard::{Leaderboard, PlayerLog};
use crate::tournament::{ErrorLogEntry, Player, Race, StateCommand, Tournament};

/// Normalized entity collections, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub tournaments: HashMap<TournamentId, Tournament>,
    pub players: HashMap<PlayerId, Player>,
    pub races: HashMap<RaceId, Race>,
    pub player_logs: HashMap<PlayerLogId, PlayerLog>,
    pub leaderboards: HashMap<RaceId, Leaderboard>,
    pub error_logs: Vec<ErrorLogEntry>,
}

impl GameState {
    pub fn tournament(&self, tournament_id: &TournamentId) -> Option<&Tournament> {
        self.tournaments.get(tournament_id)
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn race(&self, race_id: &RaceId) -> Option<&Race> {
        self.races.get(race_id)
    }

    pub fn player_log(&self, player_log_id: &PlayerLogId) -> Option<&PlayerLog> {
        self.player_logs.get(player_log_id)
    }

    pub fn leaderboard(&self, race_id: &RaceId) -> Option<&Leaderboard> {
        self.leaderboards.get(race_id)
    }

    /// Applies one command. Updates overwrite, and membership or race id
    /// registration is skipped when already present, so commands are idempotent.
    pub fn apply(&mut self, command: &StateCommand) {
        match command {
            StateCommand::AddTournament {
                tournament_id,
                tournament,
            }
            | StateCommand::UpdateTournament {
                tournament_id,
                tournament,
            } => {
                self.tournaments
                    .insert(tournament_id.clone(), tournament.clone());
            }
            StateCommand::AddPlayer {
                tournament_id,
                player_id,
                player,
            } => {
                self.players.insert(player_id.clone(), player.clone());
                if let Some(tournament) = self.tournaments.get_mut(tournament_id) {
                    tournament.player_ids.insert(player_id.clone());
                }
            }
            StateCommand::UpdatePlayer { player_id, player } => {
                self.players.insert(player_id.clone(), player.clone());
            }
            StateCommand::RemovePlayer {
                tournament_id,
                player_id,
            } => {
                self.players.remove(player_id);
                if let Some(tournament) = self.tournaments.get_mut(tournament_id) {
                    tournament.player_ids.remove(player_id);
                }
            }
            StateCommand::AddRace {
                tournament_id,
                race_id,
                race,
            } => {
                self.races.insert(race_id.clone(), race.clone());
                if let Some(tournament) = self.tournaments.get_mut(tournament_id) {
                    if !tournament.race_ids.contains(race_id) {
                        tournament.race_ids.push(race_id.clone());
                    }
                }
            }
            StateCommand::UpdateRace { race_id, race } => {
                self.races.insert(race_id.clone(), race.clone());
            }
            StateCommand::UpdatePlayerLog {
                player_log_id,
                player_log,
            } => {
                self.player_logs
                    .insert(player_log_id.clone(), player_log.clone());
            }
            StateCommand::AddLeaderboard {
                race_id,
                leaderboard,
            } => {
                self.leaderboards.insert(race_id.clone(), leaderboard.clone());
            }
            StateCommand::LogError {
                error_log,
                timestamp,
            } => {
                self.error_logs.push(ErrorLogEntry {
                    error_log: error_log.clone(),
                    timestamp: *timestamp,
                });
            }
        }
    }

    /// Same state with the error log left out, for comparing entity collections
    pub fn without_error_logs(&self) -> Self {
        Self {
            error_logs: Vec::new(),
            ..self.clone()
        }
    }
}
