//! Speed module - words-per-minute calculation
//!
//! Uses the standard typing-test convention: [`CHARS_PER_WORD`] characters
//! (spaces included) make one word, regardless of how the text splits on
//! whitespace. Characters are counted as Unicode scalar values.

use std::time::Duration;

use crate::types::CHARS_PER_WORD;

/// Number of "words" in typed text (characters / 5).
pub fn word_count(typed: &str) -> f64 {
    typed.chars().count() as f64 / CHARS_PER_WORD
}

/// Typing speed in words per minute.
///
/// Returns 0.0 for a zero elapsed time instead of dividing by zero.
pub fn compute_speed(typed: &str, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    word_count(typed) * 60.0 / secs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_three_chars_in_six_seconds() {
        assert!(approx(compute_speed("cat", Duration::from_secs(6)), 6.0));
    }

    #[test]
    fn test_zero_elapsed_is_zero() {
        assert_eq!(compute_speed("cat", Duration::ZERO), 0.0);
        assert_eq!(compute_speed("", Duration::ZERO), 0.0);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(compute_speed("", Duration::from_secs(10)), 0.0);
    }

    #[test]
    fn test_spaces_count_as_characters() {
        // "the cat sat" = 11 chars = 2.2 words, over 30s = 4.4 WPM
        assert!(approx(
            compute_speed("the cat sat", Duration::from_secs(30)),
            4.4
        ));
        assert!(approx(word_count("     "), 1.0));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert!(approx(word_count("привіт"), 6.0 / 5.0));
    }

    #[test]
    fn test_sub_second_elapsed() {
        // 5 chars in 500ms = 1 word in 1/120 minute
        assert!(approx(
            compute_speed("abcde", Duration::from_millis(500)),
            120.0
        ));
    }

    #[test]
    fn test_deterministic_and_non_negative() {
        let text = "The quick brown fox jumps over the lazy dog";
        for ms in [1u64, 17, 999, 60_000, 3_600_000] {
            let d = Duration::from_millis(ms);
            let a = compute_speed(text, d);
            let b = compute_speed(text, d);
            assert_eq!(a, b);
            assert!(a >= 0.0);
        }
    }
}
