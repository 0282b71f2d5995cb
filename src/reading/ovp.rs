//! ORP (Optimal Recognition Point) anchor calculation
//!
//! Words are drawn so the anchor character always lands on the same screen
//! column. The anchor sits at roughly the 35% mark of the word:
//!
//! `position = ceil(len * 0.35) - 1`, never below 0
//!
//! `len` counts extended grapheme clusters, so accented letters and other
//! combining sequences count as one character.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the 0-based index of the character to highlight.
///
/// Always `< max(1, len)`. Empty input yields 0.
pub fn orp_index(word: &str) -> usize {
    let len = word.graphemes(true).count();
    // ceil(len * 0.35) in exact integer arithmetic
    let bucket = (len * 7).div_ceil(20);
    bucket.saturating_sub(1)
}

/// Splits `word` into the text before the anchor, the anchor itself and the
/// text after it. Concatenating the three parts yields `word`.
pub fn split_word(word: &str) -> (String, String, String) {
    let anchor = orp_index(word);
    let mut left = String::new();
    let mut orp = String::new();
    let mut right = String::new();

    for (i, g) in word.graphemes(true).enumerate() {
        match i.cmp(&anchor) {
            std::cmp::Ordering::Less => left.push_str(g),
            std::cmp::Ordering::Equal => orp.push_str(g),
            std::cmp::Ordering::Greater => right.push_str(g),
        }
    }

    (left, orp, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orp_index_single_char() {
        assert_eq!(orp_index("I"), 0, "Single char word should return position 0");
    }

    #[test]
    fn test_orp_index_empty_string() {
        assert_eq!(orp_index(""), 0, "Empty string should return position 0");
    }

    #[test]
    fn test_orp_index_boundary_lengths() {
        // (length, expected) across the points where the ceiling changes bucket
        let cases = [
            (1, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 1),
            (6, 2),
            (7, 2),
            (8, 2),
            (9, 3),
            (11, 3),
            (12, 4),
            (20, 6),
            (21, 7),
        ];
        for (len, expected) in cases {
            let word = "x".repeat(len);
            assert_eq!(orp_index(&word), expected, "length {len}");
        }
    }

    #[test]
    fn test_orp_index_always_in_bounds() {
        for len in 1..200 {
            let word = "a".repeat(len);
            assert!(orp_index(&word) < len);
        }
    }

    #[test]
    fn test_orp_index_counts_graphemes() {
        // "café" written with a combining acute accent is still four characters
        let word = "cafe\u{301}";
        assert_eq!(orp_index(word), 1);
    }

    #[test]
    fn test_split_word_reassembles() {
        for word in ["a", "of", "the", "which", "reading", "Presentation", "word-by-word."] {
            let (left, orp, right) = split_word(word);
            assert_eq!(format!("{left}{orp}{right}"), word);
            assert_eq!(orp.chars().count(), 1);
        }
    }

    #[test]
    fn test_split_word_positions() {
        assert_eq!(
            split_word("Hello,"),
            ("He".to_string(), "l".to_string(), "lo,".to_string())
        );
        assert_eq!(
            split_word("a"),
            (String::new(), "a".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_word_empty() {
        assert_eq!(split_word(""), (String::new(), String::new(), String::new()));
    }

    #[test]
    fn test_split_word_keeps_combining_marks_together() {
        let (left, orp, right) = split_word("e\u{301}te\u{301}");
        assert_eq!(left, "e\u{301}");
        assert_eq!(orp, "t");
        assert_eq!(right, "e\u{301}");
    }
}
