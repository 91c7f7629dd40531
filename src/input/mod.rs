//! Text acquisition: plain-text files, PDF extraction and clipboard paste.
//!
//! Everything here reduces to a plain string handed to the engine; failures
//! surface as opaque messages in the status bar.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),
}

/// A loaded text plus a short description of where it came from.
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;
pub mod pdf;

/// Dispatches a path to the right loader by extension.
pub fn load_path(path: &str) -> Result<LoadedText, LoadError> {
    if path.to_ascii_lowercase().ends_with(".pdf") {
        pdf::load(path)
    } else {
        file::load(path)
    }
}
