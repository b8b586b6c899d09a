use typerace::{
    tournament::{
        ClearPlayerPayload, EndCountdownPayload, EndRacePayload, JoinPlayerPayload,
        SendTypeLogPayload, StartCountdownPayload,
    },
    PlayerId, PlayerLog, RaceId, StateCommand, TypeLogEntry,
};

use super::setup::{added_player, TestSetup};

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    pub fn player_id(&self, name: &str) -> PlayerId {
        self.players
            .iter()
            .find(|(player, _)| player == name)
            .map(|(_, id)| id.clone())
            .unwrap_or_else(|| panic!("{name} is not part of the setup"))
    }

    pub async fn latest_race_id(&self) -> RaceId {
        self.service
            .snapshot()
            .await
            .tournament(&self.tournament_id)
            .and_then(|tournament| tournament.latest_race().cloned())
            .expect("a race should have been started")
    }

    /// Joins the setup's tournament and remembers the new player
    pub async fn join(&mut self, name: &str) -> Vec<StateCommand> {
        let commands = self
            .service
            .join_player(JoinPlayerPayload::existing(
                self.tournament_id.to_string(),
                name,
            ))
            .await
            .unwrap();
        if let Some((_, player_id)) = added_player(&commands) {
            self.players.push((name.to_string(), player_id));
        }
        commands
    }

    pub async fn leave(&self, name: &str) -> Vec<StateCommand> {
        self.service
            .clear_player(ClearPlayerPayload::new(self.player_id(name).to_string()))
            .await
            .unwrap()
    }

    /// Starts a race with fetched text
    pub async fn start_race(&self, started_by: &str) -> Vec<StateCommand> {
        self.service
            .start_countdown(StartCountdownPayload::new(
                self.tournament_id.to_string(),
                self.player_id(started_by).to_string(),
            ))
            .await
            .unwrap()
    }

    pub async fn end_countdown(&self) -> Vec<StateCommand> {
        self.service
            .end_countdown(EndCountdownPayload::new(self.tournament_id.to_string()))
            .await
            .unwrap()
    }

    pub async fn end_race(&self) -> Vec<StateCommand> {
        let race_id = self.latest_race_id().await;
        self.service
            .end_race(EndRacePayload::new(race_id.to_string()))
            .await
            .unwrap()
    }

    /// Sends `(typed characters, timestamp)` samples for the latest race
    pub async fn send_progress(&self, name: &str, samples: &[(usize, i64)]) -> Vec<StateCommand> {
        let race_id = self.latest_race_id().await;
        let log = PlayerLog::new(
            samples
                .iter()
                .map(|&(text_length, timestamp)| TypeLogEntry {
                    text_length,
                    timestamp,
                })
                .collect(),
        );
        self.service
            .send_type_log(SendTypeLogPayload::new(
                race_id.to_string(),
                self.player_id(name).to_string(),
                log,
            ))
            .await
            .unwrap()
    }
}
