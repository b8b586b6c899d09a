use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::ids::IdKind;

/// Codes attached to every logged error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ErrorCode {
    PayloadMissing,
    InvalidName,
    InvalidNameLength,
    TournamentNotFound,
    PlayerNotFound,
    RaceNotFound,
    RaceAlreadyFinished,
    RaceLimitReached,
    IdGenerationFailed,
}

/// Error record appended to the error log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLog {
    pub message: String,
    pub code: ErrorCode,
    /// Id of the entity the error is about, empty when there is none
    pub related_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    pub error_log: ErrorLog,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("{field} was not provided to {operation}")]
    PayloadMissing {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Player name can only contain letters and digits: {name}")]
    InvalidName { name: String },

    #[error("Player name must be between {min} and {max} characters: {name}")]
    InvalidNameLength {
        name: String,
        min: usize,
        max: usize,
    },

    #[error("Tournament with id {tournament_id} does not exist ({context})")]
    TournamentNotFound {
        tournament_id: String,
        context: String,
    },

    #[error("Player with id {player_id} does not exist ({context})")]
    PlayerNotFound { player_id: String, context: String },

    #[error("Race with id {race_id} does not exist ({context})")]
    RaceNotFound { race_id: String, context: String },

    #[error("Race {race_id} has already finished")]
    RaceAlreadyFinished { race_id: String },

    #[error("Tournament {tournament_id} cannot hold more races")]
    RaceLimitReached { tournament_id: String },

    #[error("Could not generate an unused {kind} id")]
    IdGenerationFailed { kind: IdKind },
}

impl TournamentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TournamentError::PayloadMissing { .. } => ErrorCode::PayloadMissing,
            TournamentError::InvalidName { .. } => ErrorCode::InvalidName,
            TournamentError::InvalidNameLength { .. } => ErrorCode::InvalidNameLength,
            TournamentError::TournamentNotFound { .. } => ErrorCode::TournamentNotFound,
            TournamentError::PlayerNotFound { .. } => ErrorCode::PlayerNotFound,
            TournamentError::RaceNotFound { .. } => ErrorCode::RaceNotFound,
            TournamentError::RaceAlreadyFinished { .. } => ErrorCode::RaceAlreadyFinished,
            TournamentError::RaceLimitReached { .. } => ErrorCode::RaceLimitReached,
            TournamentError::IdGenerationFailed { .. } => ErrorCode::IdGenerationFailed,
        }
    }

    pub fn related_id(&self) -> &str {
        match self {
            TournamentError::TournamentNotFound { tournament_id, .. }
            | TournamentError::RaceLimitReached { tournament_id } => tournament_id,
            TournamentError::PlayerNotFound { player_id, .. } => player_id,
            TournamentError::RaceNotFound { race_id, .. }
            | TournamentError::RaceAlreadyFinished { race_id } => race_id,
            TournamentError::PayloadMissing { .. }
            | TournamentError::InvalidName { .. }
            | TournamentError::InvalidNameLength { .. }
            | TournamentError::IdGenerationFailed { .. } => "",
        }
    }

    pub fn to_error_log(&self) -> ErrorLog {
        ErrorLog {
            message: self.to_string(),
            code: self.code(),
            related_id: self.related_id().to_string(),
        }
    }
}
