use thiserror::Error;

use super::types::IdKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Invalid {kind} id: {input}")]
    InvalidInput { kind: IdKind, input: String },

    #[error("Cannot extract a {to} id from a {from} id")]
    InvalidType { from: IdKind, to: IdKind },

    #[error("Tournament {tournament_id} has no race sequence left for race {sequence}")]
    SequenceExhausted {
        tournament_id: String,
        sequence: usize,
    },
}
