use super::{prepare_text, LoadError, LoadedDocument};
use std::path::Path;

/// Load a UTF-8 text file.
pub fn load(path: &str, max_words: usize) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LoadedDocument {
        words: prepare_text(&content, max_words)?,
        source: format!("file:{}", path.display()),
    })
}
