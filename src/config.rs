use std::str::FromStr;

use crate::race::avatar::DEFAULT_AVATAR_BASE_URL;
use crate::race::timing::{AVERAGE_WPM, DURATION_BUFFER};
use crate::shared::AppError;

/// Tunables for the race engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Words per minute assumed when computing race timeouts
    pub average_wpm: u32,
    /// Multiplier applied over the average typist's time
    pub duration_buffer: f64,
    /// Members needed before a tournament is `Ready`
    pub ready_quorum: usize,
    pub avatar_base_url: String,
    /// Shape of generated filler race text
    pub race_text_sentences: usize,
    pub race_text_words: u8,
    /// Attempts at drawing an unused random id before giving up
    pub id_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            average_wpm: AVERAGE_WPM,
            duration_buffer: DURATION_BUFFER,
            ready_quorum: 2,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            race_text_sentences: 3,
            race_text_words: 8,
            id_attempts: 8,
        }
    }
}

impl EngineConfig {
    /// Reads overrides from `TYPERACE_*` environment variables, keeping defaults
    /// for anything unset
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            average_wpm: parse_var(&lookup, "TYPERACE_AVERAGE_WPM", defaults.average_wpm)?,
            ready_quorum: parse_var(&lookup, "TYPERACE_READY_QUORUM", defaults.ready_quorum)?,
            avatar_base_url: lookup("TYPERACE_AVATAR_BASE_URL")
                .unwrap_or(defaults.avatar_base_url),
            race_text_sentences: parse_var(
                &lookup,
                "TYPERACE_TEXT_SENTENCES",
                defaults.race_text_sentences,
            )?,
            race_text_words: parse_var(&lookup, "TYPERACE_TEXT_WORDS", defaults.race_text_words)?,
            ..defaults
        };

        if config.average_wpm == 0 {
            return Err(AppError::Config(
                "TYPERACE_AVERAGE_WPM must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}
