use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typerace::{
    leaderboard::{PlayerLog, TypeLogEntry},
    store::InMemoryStateStore,
    tournament::{
        EndCountdownPayload, EndRacePayload, JoinPlayerPayload, SendTypeLogPayload,
        StartCountdownPayload, TournamentService,
    },
    AppError, EngineConfig, EventBus, PlayerId, StateCommand, TournamentId,
};

/// Plays one race between three local players and prints its leaderboard
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typerace=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;
    info!(?config, "Starting typing race engine");

    let event_bus = EventBus::new();
    let store = Arc::new(InMemoryStateStore::new(event_bus.clone()));
    let service = TournamentService::from_config(store, config);

    let mut updates = event_bus.subscribe_all();
    tokio::spawn(async move {
        while let Ok(command) = updates.recv().await {
            info!(
                command = command.command_type(),
                tournament_id = ?command.tournament_id(),
                "State updated"
            );
        }
    });

    let mut tournament_id: Option<TournamentId> = None;
    let mut players: Vec<PlayerId> = Vec::new();
    for name in ["alice", "bob", "carol"] {
        let payload = match &tournament_id {
            Some(id) => JoinPlayerPayload::existing(id.to_string(), name),
            None => JoinPlayerPayload::new_tournament(name),
        };
        for command in service.join_player(payload).await? {
            if let StateCommand::AddPlayer {
                tournament_id: joined,
                player_id,
                ..
            } = command
            {
                tournament_id.get_or_insert(joined);
                players.push(player_id);
            }
        }
    }

    let (Some(tournament_id), Some(host)) = (tournament_id, players.first().cloned()) else {
        return Err(AppError::Store("No player could join".to_string()));
    };

    service
        .start_countdown(StartCountdownPayload::new(
            tournament_id.to_string(),
            host.to_string(),
        ))
        .await?;
    service
        .end_countdown(EndCountdownPayload::new(tournament_id.to_string()))
        .await?;

    let state = service.snapshot().await;
    let Some(race_id) = state
        .tournament(&tournament_id)
        .and_then(|tournament| tournament.latest_race().cloned())
    else {
        return Err(AppError::Store("Race was not started".to_string()));
    };
    let text_length = state
        .race(&race_id)
        .map(|race| race.text_length())
        .unwrap_or_default();

    // Simulated typists: each one a bit slower than the last
    for (n, player_id) in players.iter().enumerate() {
        let duration = 30_000 + 10_000 * n as i64;
        let typed = text_length.saturating_sub(n * 5);
        let log = PlayerLog::new(vec![
            TypeLogEntry {
                text_length: 0,
                timestamp: 0,
            },
            TypeLogEntry {
                text_length: typed / 2,
                timestamp: duration / 2,
            },
            TypeLogEntry {
                text_length: typed,
                timestamp: duration,
            },
        ]);
        service
            .send_type_log(SendTypeLogPayload::new(
                race_id.to_string(),
                player_id.to_string(),
                log,
            ))
            .await?;
    }

    service
        .end_race(EndRacePayload::new(race_id.to_string()))
        .await?;

    let state = service.snapshot().await;
    if let Some(leaderboard) = state.leaderboard(&race_id) {
        println!("{}", serde_json::to_string_pretty(leaderboard)?);
    }

    Ok(())
}
