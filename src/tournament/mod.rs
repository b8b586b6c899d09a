pub mod commands;
pub mod effects;
pub mod errors;
pub mod models;
pub mod payloads;
pub mod service;
pub mod validation;

pub use commands::StateCommand;
pub use effects::EffectContext;
pub use errors::{ErrorCode, ErrorLog, ErrorLogEntry, TournamentError};
pub use models::{Player, PlayerProfile, PlayerState, Race, Tournament, TournamentState};
pub use payloads::{
    ClearPlayerPayload, EndCountdownPayload, EndRacePayload, JoinPlayerPayload,
    SendTypeLogPayload, StartCountdownPayload,
};
pub use service::TournamentService;
