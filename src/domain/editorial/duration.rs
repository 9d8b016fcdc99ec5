/// Average narration pace assumed for playback estimates
const WORDS_PER_SECOND: f64 = 2.5;

/// Estimate playback duration of a script in whole seconds.
///
/// `floor(word_count / 2.5)` over whitespace-separated tokens. This is a
/// deterministic approximation of narration pace, not a measurement of the
/// synthesized audio.
pub fn estimate_duration_seconds(script: &str) -> i32 {
    let word_count = script.split_whitespace().count();
    (word_count as f64 / WORDS_PER_SECOND).floor() as i32
}
