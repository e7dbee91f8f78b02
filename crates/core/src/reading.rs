//! Pure arithmetic over word counts and elapsed reading time.
//!
//! The words-per-minute rate is always an explicit parameter; there is no
//! module-level mutable configuration. [`DEFAULT_WORDS_PER_MINUTE`] is the
//! rate the reading surface passes when the user has not chosen one.

/// Default reading speed, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 250;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// A rate of 0 would divide by zero; fall back to the default.
fn effective_wpm(wpm: u32) -> f64 {
    if wpm == 0 {
        f64::from(DEFAULT_WORDS_PER_MINUTE)
    } else {
        f64::from(wpm)
    }
}

/// Estimated time to read `word_count` words, in milliseconds.
///
/// Floors at one minute so a near-empty document still registers as
/// readable instead of instantly finished.
pub fn estimate_reading_time(word_count: usize, wpm: u32) -> u64 {
    let minutes = (word_count as f64 / effective_wpm(wpm)).max(1.0);
    (minutes * MILLIS_PER_MINUTE).round() as u64
}

/// Share of the estimated reading time covered by `time_spent_ms`, as a
/// percentage clamped to 0..=100.
///
/// Returns 0 when either input is 0.
pub fn estimate_reading_progress(word_count: usize, time_spent_ms: u64, wpm: u32) -> u8 {
    if word_count == 0 || time_spent_ms == 0 {
        return 0;
    }

    let total = estimate_reading_time(word_count, wpm) as f64;
    let percent = (time_spent_ms as f64 / total * 100.0).round();
    percent.min(100.0) as u8
}

/// Number of words covered after reading for `time_spent_ms`, floored.
pub fn estimate_words_read(time_spent_ms: u64, wpm: u32) -> usize {
    let words = time_spent_ms as f64 / MILLIS_PER_MINUTE * effective_wpm(wpm);
    words.floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_never_under_one_minute() {
        assert_eq!(estimate_reading_time(0, DEFAULT_WORDS_PER_MINUTE), 60_000);
        assert_eq!(estimate_reading_time(1, DEFAULT_WORDS_PER_MINUTE), 60_000);
        assert_eq!(estimate_reading_time(250, DEFAULT_WORDS_PER_MINUTE), 60_000);
    }

    #[test]
    fn reading_time_scales_past_the_floor() {
        assert_eq!(estimate_reading_time(500, 250), 120_000);
        assert_eq!(estimate_reading_time(375, 250), 90_000);
    }

    #[test]
    fn reading_time_respects_custom_rate() {
        assert_eq!(estimate_reading_time(400, 200), 120_000);
    }

    #[test]
    fn zero_rate_falls_back_to_default() {
        assert_eq!(estimate_reading_time(500, 0), estimate_reading_time(500, 250));
        assert_eq!(estimate_words_read(60_000, 0), 250);
    }

    #[test]
    fn progress_zero_when_either_input_is_zero() {
        assert_eq!(estimate_reading_progress(0, 60_000, 250), 0);
        assert_eq!(estimate_reading_progress(500, 0, 250), 0);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        assert_eq!(estimate_reading_progress(100, 10_000_000, 250), 100);
    }

    #[test]
    fn progress_halfway() {
        // 500 words at 250 wpm is two minutes; one minute spent is 50%.
        assert_eq!(estimate_reading_progress(500, 60_000, 250), 50);
    }

    #[test]
    fn words_read_floors() {
        assert_eq!(estimate_words_read(90_000, 250), 375);
        assert_eq!(estimate_words_read(30_000, 250), 125);
        assert_eq!(estimate_words_read(1_000, 250), 4);
        assert_eq!(estimate_words_read(0, 250), 0);
    }
}
