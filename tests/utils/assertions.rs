//! Test assertion helpers - fluent API for verifying tournament state
#![allow(dead_code)] // Test utilities may not all be used in every test

use typerace::{
    tournament::{ErrorCode, PlayerState},
    GameState, TournamentState,
};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct StateAssertion<'a> {
    setup: &'a TestSetup,
    state: GameState,
}

impl<'a> StateAssertion<'a> {
    /// Snapshot the setup's state for assertions
    pub async fn of(setup: &'a TestSetup) -> Self {
        let state = setup.service.snapshot().await;
        Self { setup, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tournament_in(self, expected: TournamentState) -> Self {
        let tournament = self
            .state
            .tournament(&self.setup.tournament_id)
            .expect("tournament should exist");
        assert_eq!(tournament.state, expected, "unexpected tournament state");
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        let tournament = self
            .state
            .tournament(&self.setup.tournament_id)
            .expect("tournament should exist");
        assert_eq!(tournament.player_ids.len(), expected);
        self
    }

    /// Every player still in the tournament is in `expected`
    pub fn members_in(self, expected: PlayerState) -> Self {
        let tournament = self
            .state
            .tournament(&self.setup.tournament_id)
            .expect("tournament should exist");
        for player_id in &tournament.player_ids {
            let player = self.state.player(player_id).expect("member should exist");
            assert_eq!(player.state, expected, "{} in wrong state", player.name);
        }
        self
    }

    pub fn race_count(self, expected: usize) -> Self {
        let tournament = self
            .state
            .tournament(&self.setup.tournament_id)
            .expect("tournament should exist");
        assert_eq!(tournament.race_ids.len(), expected);
        self
    }

    pub fn no_errors(self) -> Self {
        assert!(
            self.state.error_logs.is_empty(),
            "unexpected errors: {:?}",
            self.state.error_logs
        );
        self
    }

    pub fn last_error(self, expected: ErrorCode) -> Self {
        let entry = self
            .state
            .error_logs
            .last()
            .expect("an error should have been logged");
        assert_eq!(entry.error_log.code, expected);
        self
    }
}
