//! Tournament and race effects.
//!
//! Each effect reads a state snapshot and an intent payload and returns the
//! commands that move the state forward. Effects never mutate state. All
//! preconditions are checked before the first command is produced: a rejected
//! intent yields exactly one `LogError` command and nothing else.

use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::commands::StateCommand;
use super::errors::TournamentError;
use super::models::{Player, PlayerState, Race, Tournament, TournamentState};
use super::payloads::{
    ClearPlayerPayload, EndCountdownPayload, EndRacePayload, JoinPlayerPayload,
    SendTypeLogPayload, StartCountdownPayload,
};
use super::validation::{find_player, find_race, find_tournament, require, validate_player_name};
use crate::config::EngineConfig;
use crate::ids::{IdError, IdGenerator, IdKind, PlayerId, PlayerLogId, RaceId, TournamentId};
use crate::leaderboard::generate_leaderboard;
use crate::race::{compute_race_duration, AvatarLinkGenerator};
use crate::store::GameState;

/// Collaborators the effects depend on
#[derive(Clone)]
pub struct EffectContext {
    pub ids: Arc<dyn IdGenerator>,
    pub avatars: Arc<dyn AvatarLinkGenerator>,
    pub config: EngineConfig,
}

impl EffectContext {
    pub fn new(
        ids: Arc<dyn IdGenerator>,
        avatars: Arc<dyn AvatarLinkGenerator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            ids,
            avatars,
            config,
        }
    }

    /// Draws ids until one is well formed and not `taken`
    fn fresh_id<T>(
        &self,
        kind: IdKind,
        build: impl Fn(&str) -> Result<T, IdError>,
        taken: impl Fn(&T) -> bool,
    ) -> Result<T, TournamentError> {
        for _ in 0..self.config.id_attempts.max(1) {
            if let Ok(id) = build(self.ids.generate(kind).as_str()) {
                if !taken(&id) {
                    return Ok(id);
                }
            }
        }
        Err(TournamentError::IdGenerationFailed { kind })
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn settle(result: Result<Vec<StateCommand>, TournamentError>) -> Vec<StateCommand> {
    match result {
        Ok(commands) => commands,
        Err(error) => vec![StateCommand::log_error(&error, now_millis())],
    }
}

/// Joins a player to an existing tournament, or to a new one when no id is given.
///
/// The tournament's idle state is re-derived from its new member count unless
/// a race is in progress.
pub fn join_player(
    state: &GameState,
    payload: &JoinPlayerPayload,
    context: &EffectContext,
) -> Vec<StateCommand> {
    settle(try_join_player(state, payload, context))
}

fn try_join_player(
    state: &GameState,
    payload: &JoinPlayerPayload,
    context: &EffectContext,
) -> Result<Vec<StateCommand>, TournamentError> {
    let name = require(payload.player_name.as_deref(), "joinPlayer", "playerName")?;
    validate_player_name(name)?;

    let mut commands = Vec::new();

    let requested = payload.tournament_id.as_deref().filter(|id| !id.is_empty());
    let (tournament_id, mut tournament) = match requested {
        Some(raw_id) => {
            let (tournament_id, tournament) =
                find_tournament(state, raw_id, "While joining player")?;
            (tournament_id, tournament.clone())
        }
        None => {
            let tournament_id = context.fresh_id(
                IdKind::Tournament,
                TournamentId::from_segment,
                |id| state.tournaments.contains_key(id),
            )?;
            let tournament = Tournament::new_lobby();
            commands.push(StateCommand::AddTournament {
                tournament_id: tournament_id.clone(),
                tournament: tournament.clone(),
            });
            (tournament_id, tournament)
        }
    };

    let player_id = context.fresh_id(IdKind::Player, PlayerId::from_segment, |id| {
        state.players.contains_key(id)
    })?;
    let player = Player::new(
        name.to_string(),
        context.avatars.avatar_link(name),
        tournament_id.clone(),
    );
    commands.push(StateCommand::AddPlayer {
        tournament_id: tournament_id.clone(),
        player_id: player_id.clone(),
        player,
    });

    tournament.player_ids.insert(player_id);
    if !tournament.state.is_racing() {
        let next_state =
            TournamentState::for_members(tournament.player_ids.len(), context.config.ready_quorum);
        if next_state != tournament.state {
            tournament.state = next_state;
            commands.push(StateCommand::UpdateTournament {
                tournament_id,
                tournament,
            });
        }
    }

    Ok(commands)
}

/// Removes a player from their tournament. The tournament becomes `Empty` when
/// its sole member leaves; otherwise its state is left as is.
pub fn clear_player(state: &GameState, payload: &ClearPlayerPayload) -> Vec<StateCommand> {
    settle(try_clear_player(state, payload))
}

fn try_clear_player(
    state: &GameState,
    payload: &ClearPlayerPayload,
) -> Result<Vec<StateCommand>, TournamentError> {
    let raw_id = require(payload.player_id.as_deref(), "clearPlayer", "playerId")?;
    let (player_id, player) = find_player(state, raw_id, "While clearing player")?;
    let tournament_id = player.tournament_id.clone();

    let mut commands = vec![StateCommand::RemovePlayer {
        tournament_id: tournament_id.clone(),
        player_id: player_id.clone(),
    }];

    if let Some(tournament) = state.tournament(&tournament_id) {
        if tournament.player_ids.len() == 1 && tournament.has_player(&player_id) {
            let mut emptied = tournament.clone();
            emptied.player_ids.clear();
            emptied.state = TournamentState::Empty;
            commands.push(StateCommand::UpdateTournament {
                tournament_id,
                tournament: emptied,
            });
        }
    }

    Ok(commands)
}

/// Creates the next race of a tournament and starts its countdown.
///
/// Every member is snapshotted into the race and set to `Racing`.
pub fn start_countdown(
    state: &GameState,
    payload: &StartCountdownPayload,
    context: &EffectContext,
) -> Vec<StateCommand> {
    settle(try_start_countdown(state, payload, context, now_millis()))
}

fn try_start_countdown(
    state: &GameState,
    payload: &StartCountdownPayload,
    context: &EffectContext,
    started_timestamp: i64,
) -> Result<Vec<StateCommand>, TournamentError> {
    let (tournament_id, tournament) = find_tournament(
        state,
        &payload.tournament_id,
        &format!("Started by: {}", payload.player_id),
    )?;
    let (starter_id, _) = find_player(
        state,
        &payload.player_id,
        &format!("While tournament starting: {tournament_id}"),
    )?;
    let text = require(payload.race_text.as_deref(), "startCountdown", "raceText")?;

    let race_id = RaceId::new(&tournament_id, tournament.next_race_sequence()).map_err(|_| {
        TournamentError::RaceLimitReached {
            tournament_id: tournament_id.to_string(),
        }
    })?;

    let mut commands = Vec::new();
    let mut players = BTreeMap::new();
    for member_id in &tournament.player_ids {
        let member = state
            .player(member_id)
            .ok_or_else(|| TournamentError::PlayerNotFound {
                player_id: member_id.to_string(),
                context: format!("While players are being added to: {tournament_id}"),
            })?;
        players.insert(member_id.clone(), member.profile());
        commands.push(StateCommand::UpdatePlayer {
            player_id: member_id.clone(),
            player: member.with_state(PlayerState::Racing),
        });
    }

    let race = Race {
        text: text.to_string(),
        timeout_duration: compute_race_duration(
            text,
            context.config.average_wpm,
            context.config.duration_buffer,
        ),
        started_timestamp,
        players,
        is_on_going: true,
        race_started_by: starter_id,
    };

    let mut next = tournament.clone();
    next.state = TournamentState::Countdown;
    next.race_ids.push(race_id.clone());

    commands.push(StateCommand::AddRace {
        tournament_id: tournament_id.clone(),
        race_id,
        race,
    });
    commands.push(StateCommand::UpdateTournament {
        tournament_id,
        tournament: next,
    });

    Ok(commands)
}

/// Moves a tournament from its countdown into the race
pub fn end_countdown(state: &GameState, payload: &EndCountdownPayload) -> Vec<StateCommand> {
    settle(try_end_countdown(state, payload))
}

fn try_end_countdown(
    state: &GameState,
    payload: &EndCountdownPayload,
) -> Result<Vec<StateCommand>, TournamentError> {
    let (tournament_id, tournament) =
        find_tournament(state, &payload.tournament_id, "While countdown ending")?;

    let mut next = tournament.clone();
    next.state = TournamentState::Race;

    Ok(vec![StateCommand::UpdateTournament {
        tournament_id,
        tournament: next,
    }])
}

/// Finishes a race: builds its leaderboard, closes it and sets every racing
/// member back to `Idle`
pub fn end_race(state: &GameState, payload: &EndRacePayload) -> Vec<StateCommand> {
    settle(try_end_race(state, payload))
}

fn try_end_race(
    state: &GameState,
    payload: &EndRacePayload,
) -> Result<Vec<StateCommand>, TournamentError> {
    let (race_id, race) = find_race(state, &payload.race_id, "While race ending")?;
    let tournament_id = race_id.tournament_id();
    let tournament =
        state
            .tournament(&tournament_id)
            .ok_or_else(|| TournamentError::TournamentNotFound {
                tournament_id: tournament_id.to_string(),
                context: format!("While race ending: {race_id}"),
            })?;
    if !race.is_on_going {
        return Err(TournamentError::RaceAlreadyFinished {
            race_id: race_id.to_string(),
        });
    }

    let leaderboard = generate_leaderboard(&state.player_logs, &race_id, race.text_length());

    let mut next = tournament.clone();
    next.state = TournamentState::Leaderboard;

    let mut commands = vec![
        StateCommand::UpdateTournament {
            tournament_id,
            tournament: next,
        },
        StateCommand::AddLeaderboard {
            race_id: race_id.clone(),
            leaderboard,
        },
        StateCommand::UpdateRace {
            race_id,
            race: Race {
                is_on_going: false,
                ..race.clone()
            },
        },
    ];

    for member_id in &tournament.player_ids {
        if let Some(member) = state.player(member_id) {
            if member.state == PlayerState::Racing {
                commands.push(StateCommand::UpdatePlayer {
                    player_id: member_id.clone(),
                    player: member.with_state(PlayerState::Idle),
                });
            }
        }
    }

    Ok(commands)
}

/// Records a player's typing progress, replacing their previous log for the race
pub fn send_type_log(state: &GameState, payload: &SendTypeLogPayload) -> Vec<StateCommand> {
    settle(try_send_type_log(state, payload))
}

fn try_send_type_log(
    state: &GameState,
    payload: &SendTypeLogPayload,
) -> Result<Vec<StateCommand>, TournamentError> {
    let raw_race_id = require(payload.race_id.as_deref(), "sendTypeLog", "raceId")?;
    let raw_player_id = require(payload.player_id.as_deref(), "sendTypeLog", "playerId")?;

    let (player_id, _) = find_player(state, raw_player_id, "While sending type log")?;
    let (race_id, _) = find_race(state, raw_race_id, "While sending type log")?;

    Ok(vec![StateCommand::UpdatePlayerLog {
        player_log_id: PlayerLogId::new(&race_id, &player_id),
        player_log: payload.player_log.clone(),
    }])
}
