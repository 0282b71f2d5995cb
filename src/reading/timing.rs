// Pacing: WPM to per-word delay, with punctuation pauses

use crate::engine::config::TimingConfig;
use std::time::Duration;

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

fn is_clause_separator(c: char) -> bool {
    c == ',' || c == ';'
}

/// Time per word at `wpm` with no pause, kept at microsecond precision.
pub fn base_delay(wpm: u32) -> Duration {
    Duration::from_micros((60_000_000.0 / wpm.max(1) as f64).round() as u64)
}

/// Multiplier applied to the base delay, chosen by the word's last character.
pub fn pause_multiplier(word: &str, config: &TimingConfig) -> f64 {
    match word.chars().last() {
        Some(c) if is_sentence_terminator(c) => config.sentence_multiplier,
        Some(c) if is_clause_separator(c) => config.clause_multiplier,
        _ => 1.0,
    }
}

/// How long `word` stays on screen at `wpm` before the next one replaces it.
pub fn word_delay(word: &str, wpm: u32, config: &TimingConfig) -> Duration {
    let base_micros = base_delay(wpm).as_micros() as f64;
    let micros = base_micros * pause_multiplier(word, config);
    Duration::from_micros(micros.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_delay_300() {
        // 300 WPM = 200ms per word (60,000 / 300 = 200)
        assert_eq!(base_delay(300), Duration::from_millis(200));
    }

    #[test]
    fn test_base_delay_600() {
        assert_eq!(base_delay(600), Duration::from_millis(100));
    }

    #[test]
    fn test_base_delay_zero_guard() {
        assert_eq!(base_delay(0), Duration::from_secs(60));
    }

    #[test]
    fn test_pause_multiplier_sentence_end() {
        let config = TimingConfig::default();
        for word in ["end.", "what?", "wow!", "quote!?"] {
            assert_eq!(pause_multiplier(word, &config), 2.5, "{word}");
        }
    }

    #[test]
    fn test_pause_multiplier_clause() {
        let config = TimingConfig::default();
        assert_eq!(pause_multiplier("Hello,", &config), 1.5);
        assert_eq!(pause_multiplier("however;", &config), 1.5);
    }

    #[test]
    fn test_pause_multiplier_only_last_char_counts() {
        let config = TimingConfig::default();
        assert_eq!(pause_multiplier("e.g", &config), 1.0);
        assert_eq!(pause_multiplier("end.\"", &config), 1.0);
        assert_eq!(pause_multiplier("colon:", &config), 1.0);
        assert_eq!(pause_multiplier("", &config), 1.0);
    }

    #[test]
    fn test_word_delay_plain_word() {
        let config = TimingConfig::default();
        assert_eq!(word_delay("hello", 600, &config), Duration::from_millis(100));
    }

    #[test]
    fn test_word_delay_with_punctuation() {
        let config = TimingConfig::default();
        assert_eq!(word_delay("Hello,", 600, &config), Duration::from_millis(150));
        assert_eq!(word_delay("world.", 600, &config), Duration::from_millis(250));
    }

    #[test]
    fn test_word_delay_fractional_base() {
        // 700 WPM = 85.714ms base, kept at microsecond precision
        let config = TimingConfig::default();
        assert_eq!(word_delay("word", 700, &config), Duration::from_micros(85_714));
    }

    #[test]
    fn test_word_delay_custom_multipliers() {
        let config = TimingConfig {
            sentence_multiplier: 3.0,
            ..TimingConfig::default()
        };
        assert_eq!(word_delay("stop.", 300, &config), Duration::from_millis(600));
    }
}
