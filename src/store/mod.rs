pub mod models;
pub mod repository;

pub use models::GameState;
pub use repository::{InMemoryStateStore, Reducer, StateStore};
