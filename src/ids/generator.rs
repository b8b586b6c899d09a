use rand::{distr::Alphanumeric, Rng};
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{IdKind, SEGMENT_LEN};

/// Trait for generating the random segment of tournament and player ids
pub trait IdGenerator: Send + Sync {
    /// Returns an 8 character alphanumeric segment for an id of `kind`
    fn generate(&self, kind: IdKind) -> String;
}

/// Random alphanumeric generator. 62^8 possible segments per kind, so collisions
/// are unlikely but not impossible; callers retry against existing ids.
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, _kind: IdKind) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SEGMENT_LEN)
            .map(char::from)
            .collect()
    }
}

/// Deterministic generator producing `trn00000`, `plr00001`, ... for replays and tests
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, kind: IdKind) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) % 100_000;
        let prefix = match kind {
            IdKind::Tournament => "trn",
            IdKind::Player => "plr",
            IdKind::Race => "rce",
            IdKind::PlayerLog => "log",
        };
        format!("{prefix}{n:05}")
    }
}
