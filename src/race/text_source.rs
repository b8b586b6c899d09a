use async_trait::async_trait;
use tracing::debug;

use crate::shared::AppError;

/// Trait for fetching the text players type during a race
#[async_trait]
pub trait RaceTextSource: Send + Sync {
    async fn fetch_text(&self) -> Result<String, AppError>;
}

/// Always returns the same text
pub struct StaticTextSource {
    text: String,
}

impl StaticTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl RaceTextSource for StaticTextSource {
    async fn fetch_text(&self) -> Result<String, AppError> {
        Ok(self.text.clone())
    }
}

/// Filler text built from pet name sentences
pub struct PetnameTextSource {
    sentences: usize,
    words: u8,
}

impl PetnameTextSource {
    pub fn new(sentences: usize, words: u8) -> Self {
        Self { sentences, words }
    }
}

impl Default for PetnameTextSource {
    fn default() -> Self {
        Self::new(3, 8)
    }
}

#[async_trait]
impl RaceTextSource for PetnameTextSource {
    async fn fetch_text(&self) -> Result<String, AppError> {
        if self.sentences == 0 || self.words == 0 {
            return Err(AppError::RaceText(
                "Filler text needs at least one sentence of one word".to_string(),
            ));
        }

        let petnames = petname::Petnames::default();
        let sentences: Vec<String> = (0..self.sentences)
            .map(|_| capitalize(&petnames.generate_one(self.words, " ")) + ".")
            .collect();
        let text = sentences.join(" ");

        debug!(length = text.len(), "Generated filler race text");
        Ok(text)
    }
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
