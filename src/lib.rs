// Library crate for the typing race engine
// This file exposes the public API for integration tests

pub mod config;
pub mod event;
pub mod ids;
pub mod leaderboard;
pub mod race;
pub mod shared;
pub mod store;
pub mod tournament;

// Re-export commonly used types for easier access in tests
pub use config::EngineConfig;
pub use event::EventBus;
pub use ids::{IdKind, PlayerId, PlayerLogId, RaceId, TournamentId};
pub use leaderboard::{Leaderboard, LeaderboardEntry, PlayerLog, TypeLogEntry};
pub use shared::AppError;
pub use store::{GameState, InMemoryStateStore, StateStore};
pub use tournament::{StateCommand, TournamentService, TournamentState};
