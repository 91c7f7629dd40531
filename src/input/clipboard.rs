use super::{LoadError, LoadedText};

/// Reads text from the system clipboard.
pub fn load() -> Result<LoadedText, LoadError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    Ok(LoadedText {
        text,
        source: "clipboard".to_string(),
    })
}
