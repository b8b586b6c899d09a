use std::sync::Arc;

use typerace::{
    ids::SequentialIdGenerator,
    race::{DiceBearAvatarLinks, RaceTextSource},
    tournament::{EffectContext, JoinPlayerPayload},
    EngineConfig, EventBus, InMemoryStateStore, PlayerId, StateCommand, TournamentId,
    TournamentService,
};

use super::mocks::CountingTextSource;

pub const RACE_TEXT: &str = "Sphinx of black quartz judge my vow";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub service: Arc<TournamentService>,
    pub event_bus: EventBus,
    pub text_source: Arc<CountingTextSource>,
    pub tournament_id: TournamentId,
    /// Joined players in join order
    pub players: Vec<(String, PlayerId)>,
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    config: EngineConfig,
    text_source: Option<Arc<dyn RaceTextSource>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec!["alice".to_string()],
            config: EngineConfig::default(),
            text_source: None,
        }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        assert!(!players.is_empty(), "a tournament needs a first player");
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["alice", "bob", "carol"])
    }

    pub fn with_quorum(mut self, ready_quorum: usize) -> Self {
        self.config.ready_quorum = ready_quorum;
        self
    }

    /// Replaces the counting text source used by default
    pub fn with_text_source(mut self, text_source: Arc<dyn RaceTextSource>) -> Self {
        self.text_source = Some(text_source);
        self
    }

    pub async fn build(self) -> TestSetup {
        let event_bus = EventBus::new();
        let store = Arc::new(InMemoryStateStore::new(event_bus.clone()));
        let counting = Arc::new(CountingTextSource::new(RACE_TEXT));
        let text_source = self
            .text_source
            .unwrap_or_else(|| counting.clone() as Arc<dyn RaceTextSource>);
        let context = EffectContext::new(
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DiceBearAvatarLinks::new(self.config.avatar_base_url.clone())),
            self.config,
        );
        let service = Arc::new(TournamentService::new(store, text_source, context));

        let mut tournament_id: Option<TournamentId> = None;
        let mut players = Vec::new();
        for name in &self.players {
            let payload = match &tournament_id {
                Some(id) => JoinPlayerPayload::existing(id.to_string(), name.as_str()),
                None => JoinPlayerPayload::new_tournament(name.as_str()),
            };
            let commands = service.join_player(payload).await.unwrap();
            let (joined, player_id) = added_player(&commands)
                .unwrap_or_else(|| panic!("{name} should have joined: {commands:?}"));
            tournament_id.get_or_insert(joined);
            players.push((name.clone(), player_id));
        }

        TestSetup {
            service,
            event_bus,
            text_source: counting,
            tournament_id: tournament_id.unwrap(),
            players,
        }
    }
}

pub fn added_player(commands: &[StateCommand]) -> Option<(TournamentId, PlayerId)> {
    commands.iter().find_map(|command| match command {
        StateCommand::AddPlayer {
            tournament_id,
            player_id,
            ..
        } => Some((tournament_id.clone(), player_id.clone())),
        _ => None,
    })
}
