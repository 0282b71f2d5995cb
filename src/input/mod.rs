use crate::reading::{count_words, tokenize, WordList};
use std::path::PathBuf;
use thiserror::Error;

pub mod clipboard;
pub mod file;

/// Sample paragraph shown when there is no input text.
pub const DEFAULT_TEXT: &str = "Rapid Serial Visual Presentation (RSVP) is a method of displaying information (generally text) in which the text is displayed word-by-word in a fixed focal position. This method allows reading at very high speeds because it eliminates eye movements.";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word limit exceeded: {count} / {limit} words")]
    WordLimitExceeded { count: usize, limit: usize },
}

/// A document ready to hand to the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub words: WordList,
    pub source: String,
}

/// Turns raw input into a word list.
///
/// Blank input falls back to [`DEFAULT_TEXT`]. Text with more than
/// `max_words` words is refused.
pub fn prepare_text(text: &str, max_words: usize) -> Result<WordList, LoadError> {
    let text = if text.trim().is_empty() {
        DEFAULT_TEXT
    } else {
        text
    };

    let count = count_words(text);
    if count > max_words {
        return Err(LoadError::WordLimitExceeded {
            count,
            limit: max_words,
        });
    }

    Ok(tokenize(text))
}

pub fn load_text(text: &str, max_words: usize) -> Result<LoadedDocument, LoadError> {
    Ok(LoadedDocument {
        words: prepare_text(text, max_words)?,
        source: "text".to_string(),
    })
}
