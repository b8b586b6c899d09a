pub mod codec;
mod errors;
pub mod generator;
pub mod types;

pub use codec::{check_validity, extract_id};
pub use errors::IdError;
pub use generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use types::{CompoundId, IdKind, PlayerId, PlayerLogId, RaceId, TournamentId};
