/// Ordered, immutable sequence of words produced by [`tokenize`].
///
/// Each word is non-empty and contains no whitespace. Punctuation stays
/// attached so the pacing engine can inspect trailing characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    /// Builds a list from pre-split words, dropping any that are empty or
    /// contain whitespace by re-splitting them.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .flat_map(|w| {
                let w: String = w.into();
                w.split_whitespace().map(str::to_string).collect::<Vec<_>>()
            })
            .collect();
        Self { words }
    }
}

/// Splits text on runs of whitespace, discarding empty pieces.
pub fn tokenize(text: &str) -> WordList {
    WordList {
        words: text.split_whitespace().map(str::to_string).collect(),
    }
}

/// Word count with the same rules as [`tokenize`], without allocating.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
