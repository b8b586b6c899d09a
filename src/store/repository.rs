use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument};

use super::models::GameState;
use crate::event::EventBus;
use crate::shared::AppError;
use crate::tournament::{StateCommand, TournamentState};

/// Computes the commands for one intent from the current state
pub type Reducer = Box<dyn FnOnce(&GameState) -> Vec<StateCommand> + Send>;

/// Trait for the state store holding every tournament entity
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Clone of the current state
    async fn snapshot(&self) -> GameState;

    /// Applies commands in order
    async fn apply(&self, commands: Vec<StateCommand>) -> Result<(), AppError>;

    /// Runs `reducer` against the current state and applies what it returns,
    /// without letting another intent in between. Returns the applied commands.
    ///
    /// This is what makes per-tournament sequence numbers (race ids) atomic.
    async fn transact(&self, reducer: Reducer) -> Result<Vec<StateCommand>, AppError>;
}

/// In-memory implementation of StateStore that broadcasts applied commands
pub struct InMemoryStateStore {
    state: RwLock<GameState>,
    event_bus: EventBus,
    /// Taken before the state lock is released, so commands are broadcast in apply order
    publishing: Mutex<()>,
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new(EventBus::new())
    }
}

impl InMemoryStateStore {
    pub fn new(event_bus: EventBus) -> Self {
        Self::with_state(GameState::default(), event_bus)
    }

    /// Starts from an existing state, e.g. a fixture or a replayed log
    pub fn with_state(state: GameState, event_bus: EventBus) -> Self {
        Self {
            state: RwLock::new(state),
            event_bus,
            publishing: Mutex::new(()),
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Broadcasts applied commands and drops the channels of emptied tournaments
    async fn publish(&self, commands: &[StateCommand]) {
        for command in commands {
            self.event_bus.emit(command).await;

            if let StateCommand::UpdateTournament {
                tournament_id,
                tournament,
            } = command
            {
                if tournament.state == TournamentState::Empty {
                    self.event_bus.remove_tournament(tournament_id).await;
                }
            }
        }
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn snapshot(&self) -> GameState {
        self.state.read().await.clone()
    }

    #[instrument(skip(self, commands))]
    async fn apply(&self, commands: Vec<StateCommand>) -> Result<(), AppError> {
        let _publishing = {
            let mut state = self.state.write().await;
            for command in &commands {
                debug!(command = command.command_type(), "Applying command");
                state.apply(command);
            }
            self.publishing.lock().await
        };

        self.publish(&commands).await;
        Ok(())
    }

    #[instrument(skip(self, reducer))]
    async fn transact(&self, reducer: Reducer) -> Result<Vec<StateCommand>, AppError> {
        let (commands, _publishing) = {
            let mut state = self.state.write().await;
            let commands = reducer(&*state);
            for command in &commands {
                debug!(command = command.command_type(), "Applying command");
                state.apply(command);
            }
            (commands, self.publishing.lock().await)
        };

        self.publish(&commands).await;
        Ok(commands)
    }
}
