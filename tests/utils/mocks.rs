use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use typerace::{race::RaceTextSource, AppError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Serves a fixed text and counts how often it was asked for
pub struct CountingTextSource {
    text: String,
    fetches: AtomicUsize,
}

impl CountingTextSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RaceTextSource for CountingTextSource {
    async fn fetch_text(&self) -> Result<String, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

pub struct UnavailableTextSource;

#[async_trait]
impl RaceTextSource for UnavailableTextSource {
    async fn fetch_text(&self) -> Result<String, AppError> {
        Err(AppError::RaceText("quote service unreachable".to_string()))
    }
}
