use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::ids::TournamentId;
use crate::tournament::StateCommand;

const CHANNEL_CAPACITY: usize = 100;

/// Event bus distributing applied state commands to view-layer subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    /// Tournament-specific channels: tournament_id -> sender
    tournament_channels: Arc<RwLock<HashMap<TournamentId, broadcast::Sender<StateCommand>>>>,
    /// Receives every command, including those without a tournament
    global: broadcast::Sender<StateCommand>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (global, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            tournament_channels: Arc::new(RwLock::new(HashMap::new())),
            global,
        }
    }

    /// Emits a command to the global channel and to its tournament's subscribers
    pub async fn emit(&self, command: &StateCommand) {
        if self.global.send(command.clone()).is_err() {
            debug!(
                command = command.command_type(),
                "Command emitted with no global receivers"
            );
        }

        let Some(tournament_id) = command.tournament_id() else {
            return;
        };

        let tournament_channels = self.tournament_channels.read().await;
        match tournament_channels.get(&tournament_id) {
            Some(sender) => match sender.send(command.clone()) {
                Ok(receiver_count) => {
                    debug!(
                        tournament_id = %tournament_id,
                        receivers = receiver_count,
                        command = command.command_type(),
                        "Tournament command emitted"
                    );
                }
                Err(_) => {
                    debug!(tournament_id = %tournament_id, "Tournament command emitted with no receivers");
                }
            },
            None => {
                debug!(tournament_id = %tournament_id, "No subscribers for tournament");
            }
        }
    }

    /// Subscribe to commands for a specific tournament
    pub async fn subscribe_to_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> broadcast::Receiver<StateCommand> {
        let tournament_channels = self.tournament_channels.read().await;

        if let Some(sender) = tournament_channels.get(tournament_id) {
            sender.subscribe()
        } else {
            debug!(tournament_id = %tournament_id, "Creating new tournament channel for subscription");
            drop(tournament_channels);

            // Another subscriber may have created it while we waited for the write lock
            let mut tournament_channels = self.tournament_channels.write().await;
            tournament_channels
                .entry(tournament_id.clone())
                .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
                .subscribe()
        }
    }

    /// Subscribe to every applied command
    pub fn subscribe_all(&self) -> broadcast::Receiver<StateCommand> {
        self.global.subscribe()
    }

    /// Drops the channel of a tournament nobody listens to anymore
    pub async fn remove_tournament(&self, tournament_id: &TournamentId) {
        let mut tournament_channels = self.tournament_channels.write().await;
        if tournament_channels
            .get(tournament_id)
            .is_some_and(|sender| sender.receiver_count() == 0)
        {
            tournament_channels.remove(tournament_id);
        }
    }
}
