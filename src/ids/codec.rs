use super::errors::IdError;
use super::types::{matches_kind, CompoundId, IdKind};

/// Extracts an embedded id from a compound id.
///
/// Supported extractions are race -> tournament and playerLog -> tournament,
/// race or player. Asking for the input's own kind returns the input unchanged.
/// The input is always validated against the grammar of `from` first.
pub fn extract_id(input: &str, from: IdKind, to: IdKind) -> Result<CompoundId, IdError> {
    let parsed = CompoundId::parse(from, input)?;
    if from == to {
        return Ok(parsed);
    }

    match (parsed, to) {
        (CompoundId::Race(race_id), IdKind::Tournament) => {
            Ok(CompoundId::Tournament(race_id.tournament_id()))
        }
        (CompoundId::PlayerLog(log_id), IdKind::Tournament) => {
            Ok(CompoundId::Tournament(log_id.tournament_id()))
        }
        (CompoundId::PlayerLog(log_id), IdKind::Race) => Ok(CompoundId::Race(log_id.race_id())),
        (CompoundId::PlayerLog(log_id), IdKind::Player) => {
            Ok(CompoundId::Player(log_id.player_id()))
        }
        _ => Err(IdError::InvalidType { from, to }),
    }
}

/// Checks whether `id` matches the exact pattern of `kind`
pub fn check_validity(kind: IdKind, id: &str) -> bool {
    matches_kind(kind, id)
}
