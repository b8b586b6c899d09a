use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use super::errors::IdError;

/// Length of the random segment of tournament and player ids
pub const SEGMENT_LEN: usize = 8;
/// Length of the race sequence segment (`000` to `999`)
pub const RACE_SEQUENCE_LEN: usize = 3;

const TOURNAMENT_PREFIX: &str = "T:";
const PLAYER_PREFIX: &str = "P:";
const RACE_SEPARATOR: &str = "-R:";
const PLAYER_LOG_SEPARATOR: char = '-';

// Byte offsets inside validated (ASCII only) compound ids
const TOURNAMENT_ID_LEN: usize = TOURNAMENT_PREFIX.len() + SEGMENT_LEN;
const RACE_ID_LEN: usize = TOURNAMENT_ID_LEN + RACE_SEPARATOR.len() + RACE_SEQUENCE_LEN;

/// The four shapes a compound id can take
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum IdKind {
    Tournament,
    Race,
    Player,
    PlayerLog,
}

fn is_segment(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn matches_tournament(s: &str) -> bool {
    s.strip_prefix(TOURNAMENT_PREFIX)
        .is_some_and(|segment| is_segment(segment, SEGMENT_LEN))
}

fn matches_player(s: &str) -> bool {
    s.strip_prefix(PLAYER_PREFIX)
        .is_some_and(|segment| is_segment(segment, SEGMENT_LEN))
}

fn matches_race(s: &str) -> bool {
    match s.split_once(RACE_SEPARATOR) {
        Some((tournament, sequence)) => {
            matches_tournament(tournament) && is_segment(sequence, RACE_SEQUENCE_LEN)
        }
        None => false,
    }
}

fn matches_player_log(s: &str) -> bool {
    match s.rsplit_once(PLAYER_LOG_SEPARATOR) {
        Some((race, player)) => matches_race(race) && matches_player(player),
        None => false,
    }
}

/// Implements parsing, display and string conversions for a validated id newtype.
macro_rules! compound_id {
    ($name:ident, $kind:expr, $matches:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if $matches(s) {
                    Ok(Self(s.to_string()))
                } else {
                    Err(IdError::InvalidInput {
                        kind: $kind,
                        input: s.to_string(),
                    })
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// `T:` followed by 8 alphanumeric characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TournamentId(String);

/// `{TournamentId}-R:` followed by a 3 character sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceId(String);

/// `P:` followed by 8 alphanumeric characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

/// `{RaceId}-{PlayerId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerLogId(String);

compound_id!(TournamentId, IdKind::Tournament, matches_tournament);
compound_id!(RaceId, IdKind::Race, matches_race);
compound_id!(PlayerId, IdKind::Player, matches_player);
compound_id!(PlayerLogId, IdKind::PlayerLog, matches_player_log);

impl TournamentId {
    /// Builds a tournament id from a freshly generated random segment
    pub fn from_segment(segment: &str) -> Result<Self, IdError> {
        format!("{TOURNAMENT_PREFIX}{segment}").parse()
    }
}

impl PlayerId {
    /// Builds a player id from a freshly generated random segment
    pub fn from_segment(segment: &str) -> Result<Self, IdError> {
        format!("{PLAYER_PREFIX}{segment}").parse()
    }
}

impl RaceId {
    /// Builds the id of the `sequence`-th race of a tournament, zero padded to 3 digits
    pub fn new(tournament_id: &TournamentId, sequence: usize) -> Result<Self, IdError> {
        if sequence >= 10usize.pow(RACE_SEQUENCE_LEN as u32) {
            return Err(IdError::SequenceExhausted {
                tournament_id: tournament_id.to_string(),
                sequence,
            });
        }
        Ok(Self(format!(
            "{tournament_id}{RACE_SEPARATOR}{sequence:0width$}",
            width = RACE_SEQUENCE_LEN
        )))
    }

    pub fn tournament_id(&self) -> TournamentId {
        TournamentId(self.0[..TOURNAMENT_ID_LEN].to_string())
    }

    pub fn sequence(&self) -> &str {
        &self.0[TOURNAMENT_ID_LEN + RACE_SEPARATOR.len()..]
    }
}

impl PlayerLogId {
    pub fn new(race_id: &RaceId, player_id: &PlayerId) -> Self {
        Self(format!("{race_id}{PLAYER_LOG_SEPARATOR}{player_id}"))
    }

    pub fn tournament_id(&self) -> TournamentId {
        TournamentId(self.0[..TOURNAMENT_ID_LEN].to_string())
    }

    pub fn race_id(&self) -> RaceId {
        RaceId(self.0[..RACE_ID_LEN].to_string())
    }

    pub fn player_id(&self) -> PlayerId {
        PlayerId(self.0[RACE_ID_LEN + 1..].to_string())
    }
}

/// A parsed id of any kind, tagged with the shape it was validated against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum CompoundId {
    Tournament(TournamentId),
    Race(RaceId),
    Player(PlayerId),
    PlayerLog(PlayerLogId),
}

impl CompoundId {
    /// Parses `input` against the grammar of `kind`
    pub fn parse(kind: IdKind, input: &str) -> Result<Self, IdError> {
        Ok(match kind {
            IdKind::Tournament => CompoundId::Tournament(input.parse()?),
            IdKind::Race => CompoundId::Race(input.parse()?),
            IdKind::Player => CompoundId::Player(input.parse()?),
            IdKind::PlayerLog => CompoundId::PlayerLog(input.parse()?),
        })
    }

    pub fn kind(&self) -> IdKind {
        match self {
            CompoundId::Tournament(_) => IdKind::Tournament,
            CompoundId::Race(_) => IdKind::Race,
            CompoundId::Player(_) => IdKind::Player,
            CompoundId::PlayerLog(_) => IdKind::PlayerLog,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CompoundId::Tournament(id) => id.as_str(),
            CompoundId::Race(id) => id.as_str(),
            CompoundId::Player(id) => id.as_str(),
            CompoundId::PlayerLog(id) => id.as_str(),
        }
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern check against the grammar of `kind`
pub fn matches_kind(kind: IdKind, id: &str) -> bool {
    match kind {
        IdKind::Tournament => matches_tournament(id),
        IdKind::Race => matches_race(id),
        IdKind::Player => matches_player(id),
        IdKind::PlayerLog => matches_player_log(id),
    }
}
