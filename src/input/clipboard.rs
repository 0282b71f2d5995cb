use super::{prepare_text, LoadError, LoadedDocument};
use arboard::Clipboard;

/// Load the system clipboard's text contents.
pub fn load(max_words: usize) -> Result<LoadedDocument, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    Ok(LoadedDocument {
        words: prepare_text(&text, max_words)?,
        source: "clipboard".to_string(),
    })
}
