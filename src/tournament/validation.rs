//! Precondition checks shared by the tournament effects.
//!
//! Each check either hands back the validated value or the error the effect
//! must log. Malformed ids are reported as not found: nothing can exist under them.

use super::errors::TournamentError;
use super::models::{Player, Race, Tournament};
use crate::ids::{PlayerId, RaceId, TournamentId};
use crate::store::GameState;

pub const MIN_PLAYER_NAME_LENGTH: usize = 2;
pub const MAX_PLAYER_NAME_LENGTH: usize = 16;

/// A missing or empty field
pub fn require<'a>(
    value: Option<&'a str>,
    operation: &'static str,
    field: &'static str,
) -> Result<&'a str, TournamentError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(TournamentError::PayloadMissing { operation, field }),
    }
}

/// 2 to 16 ASCII letters or digits. Length is checked first.
pub fn validate_player_name(name: &str) -> Result<(), TournamentError> {
    let length = name.chars().count();
    if !(MIN_PLAYER_NAME_LENGTH..=MAX_PLAYER_NAME_LENGTH).contains(&length) {
        return Err(TournamentError::InvalidNameLength {
            name: name.to_string(),
            min: MIN_PLAYER_NAME_LENGTH,
            max: MAX_PLAYER_NAME_LENGTH,
        });
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TournamentError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn find_tournament<'s>(
    state: &'s GameState,
    raw_id: &str,
    context: &str,
) -> Result<(TournamentId, &'s Tournament), TournamentError> {
    raw_id
        .parse::<TournamentId>()
        .ok()
        .and_then(|id| state.tournament(&id).map(|tournament| (id, tournament)))
        .ok_or_else(|| TournamentError::TournamentNotFound {
            tournament_id: raw_id.to_string(),
            context: context.to_string(),
        })
}

pub fn find_player<'s>(
    state: &'s GameState,
    raw_id: &str,
    context: &str,
) -> Result<(PlayerId, &'s Player), TournamentError> {
    raw_id
        .parse::<PlayerId>()
        .ok()
        .and_then(|id| state.player(&id).map(|player| (id, player)))
        .ok_or_else(|| TournamentError::PlayerNotFound {
            player_id: raw_id.to_string(),
            context: context.to_string(),
        })
}

pub fn find_race<'s>(
    state: &'s GameState,
    raw_id: &str,
    context: &str,
) -> Result<(RaceId, &'s Race), TournamentError> {
    raw_id
        .parse::<RaceId>()
        .ok()
        .and_then(|id| state.race(&id).map(|race| (id, race)))
        .ok_or_else(|| TournamentError::RaceNotFound {
            race_id: raw_id.to_string(),
            context: context.to_string(),
        })
}
