/// Typing speed of an average typist, in words per minute
pub const AVERAGE_WPM: u32 = 40;

/// Characters per "word" when converting text length to words
pub const CHARS_PER_WORD: f64 = 5.0;

/// Head room given over the average typist (1.5 = 50% extra time)
pub const DURATION_BUFFER: f64 = 1.5;

/// Maximum allowed race duration in seconds for `text`.
///
/// The time an average typist needs is rounded up to whole seconds, then the
/// buffer is applied and rounded up again.
pub fn compute_race_duration(text: &str, average_wpm: u32, buffer: f64) -> u32 {
    let word_count = text.chars().count() as f64 / CHARS_PER_WORD;
    let average_seconds = (word_count / average_wpm.max(1) as f64 * 60.0).ceil();
    (average_seconds * buffer).ceil() as u32
}
