use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::commands::StateCommand;
use super::effects::{self, EffectContext};
use super::payloads::{
    ClearPlayerPayload, EndCountdownPayload, EndRacePayload, JoinPlayerPayload,
    SendTypeLogPayload, StartCountdownPayload,
};
use crate::config::EngineConfig;
use crate::ids::RandomIdGenerator;
use crate::race::{DiceBearAvatarLinks, PetnameTextSource, RaceTextSource};
use crate::shared::AppError;
use crate::store::{GameState, Reducer, StateStore};

/// Entry point for tournament intents.
///
/// Each intent is reduced against the store's current state and its commands
/// applied in one transaction. A rejected intent still succeeds at this level:
/// the returned commands hold the single `LogError` that was recorded.
pub struct TournamentService {
    store: Arc<dyn StateStore>,
    text_source: Arc<dyn RaceTextSource>,
    context: Arc<EffectContext>,
}

impl TournamentService {
    pub fn new(
        store: Arc<dyn StateStore>,
        text_source: Arc<dyn RaceTextSource>,
        context: EffectContext,
    ) -> Self {
        Self {
            store,
            text_source,
            context: Arc::new(context),
        }
    }

    /// Random ids, DiceBear avatars and pet name filler text
    pub fn from_config(store: Arc<dyn StateStore>, config: EngineConfig) -> Self {
        let text_source = Arc::new(PetnameTextSource::new(
            config.race_text_sentences,
            config.race_text_words,
        ));
        let context = EffectContext::new(
            Arc::new(RandomIdGenerator::new()),
            Arc::new(DiceBearAvatarLinks::new(config.avatar_base_url.clone())),
            config,
        );
        Self::new(store, text_source, context)
    }

    #[instrument(skip(self))]
    pub async fn join_player(
        &self,
        payload: JoinPlayerPayload,
    ) -> Result<Vec<StateCommand>, AppError> {
        let context = self.context.clone();
        self.dispatch(
            "joinPlayer",
            Box::new(move |state: &GameState| effects::join_player(state, &payload, &context)),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear_player(
        &self,
        payload: ClearPlayerPayload,
    ) -> Result<Vec<StateCommand>, AppError> {
        self.dispatch(
            "clearPlayer",
            Box::new(move |state: &GameState| effects::clear_player(state, &payload)),
        )
        .await
    }

    /// Starts the countdown of the tournament's next race. Without text in the
    /// payload, filler text is fetched first; if that fails nothing is applied.
    #[instrument(skip(self))]
    pub async fn start_countdown(
        &self,
        mut payload: StartCountdownPayload,
    ) -> Result<Vec<StateCommand>, AppError> {
        if payload.race_text.is_none() {
            let text = self.text_source.fetch_text().await?;
            debug!(length = text.len(), "Fetched race text");
            payload.race_text = Some(text);
        }

        let context = self.context.clone();
        self.dispatch(
            "startCountdown",
            Box::new(move |state: &GameState| {
                effects::start_countdown(state, &payload, &context)
            }),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn end_countdown(
        &self,
        payload: EndCountdownPayload,
    ) -> Result<Vec<StateCommand>, AppError> {
        self.dispatch(
            "endCountdown",
            Box::new(move |state: &GameState| effects::end_countdown(state, &payload)),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn end_race(&self, payload: EndRacePayload) -> Result<Vec<StateCommand>, AppError> {
        self.dispatch(
            "endRace",
            Box::new(move |state: &GameState| effects::end_race(state, &payload)),
        )
        .await
    }

    #[instrument(
        skip(self, payload),
        fields(race_id = ?payload.race_id, player_id = ?payload.player_id)
    )]
    pub async fn send_type_log(
        &self,
        payload: SendTypeLogPayload,
    ) -> Result<Vec<StateCommand>, AppError> {
        self.dispatch(
            "sendTypeLog",
            Box::new(move |state: &GameState| effects::send_type_log(state, &payload)),
        )
        .await
    }

    pub async fn snapshot(&self) -> GameState {
        self.store.snapshot().await
    }

    async fn dispatch(
        &self,
        intent: &'static str,
        reducer: Reducer,
    ) -> Result<Vec<StateCommand>, AppError> {
        let commands = self.store.transact(reducer).await?;

        match commands.iter().find_map(StateCommand::error_log) {
            Some(error_log) => {
                warn!(
                    intent,
                    code = %error_log.code,
                    related_id = %error_log.related_id,
                    "Intent rejected: {}",
                    error_log.message
                );
            }
            None => {
                info!(intent, commands = commands.len(), "Intent applied");
            }
        }

        Ok(commands)
    }
}
