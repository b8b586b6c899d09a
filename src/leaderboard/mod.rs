pub mod generator;
pub mod models;

pub use generator::generate_leaderboard;
pub use models::{Leaderboard, LeaderboardEntry, PlayerLog, TypeLogEntry};
