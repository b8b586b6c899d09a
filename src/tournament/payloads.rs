use serde::{Deserialize, Serialize};

use crate::leaderboard::PlayerLog;

/// Joins a tournament, creating one when no tournament id is given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPlayerPayload {
    pub tournament_id: Option<String>,
    pub player_name: Option<String>,
}

impl JoinPlayerPayload {
    pub fn new_tournament(player_name: impl Into<String>) -> Self {
        Self {
            tournament_id: None,
            player_name: Some(player_name.into()),
        }
    }

    pub fn existing(tournament_id: impl Into<String>, player_name: impl Into<String>) -> Self {
        Self {
            tournament_id: Some(tournament_id.into()),
            player_name: Some(player_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearPlayerPayload {
    pub player_id: Option<String>,
}

impl ClearPlayerPayload {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: Some(player_id.into()),
        }
    }
}

/// Starts the countdown of a new race. Without `race_text` the service fetches
/// filler text before touching any state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCountdownPayload {
    pub tournament_id: String,
    pub player_id: String,
    pub race_text: Option<String>,
}

impl StartCountdownPayload {
    pub fn new(tournament_id: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            player_id: player_id.into(),
            race_text: None,
        }
    }

    pub fn with_text(mut self, race_text: impl Into<String>) -> Self {
        self.race_text = Some(race_text.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndCountdownPayload {
    pub tournament_id: String,
}

impl EndCountdownPayload {
    pub fn new(tournament_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndRacePayload {
    pub race_id: String,
}

impl EndRacePayload {
    pub fn new(race_id: impl Into<String>) -> Self {
        Self {
            race_id: race_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTypeLogPayload {
    pub race_id: Option<String>,
    pub player_id: Option<String>,
    pub player_log: PlayerLog,
}

impl SendTypeLogPayload {
    pub fn new(
        race_id: impl Into<String>,
        player_id: impl Into<String>,
        player_log: PlayerLog,
    ) -> Self {
        Self {
            race_id: Some(race_id.into()),
            player_id: Some(player_id.into()),
            player_log,
        }
    }
}
