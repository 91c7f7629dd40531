use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{LoadError, LoadedText};

/// Extracts the text content of a PDF file.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedText {
        text,
        source: format!("pdf:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_garbage_bytes_report_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "swiftread_{}_garbage.pdf",
            std::process::id()
        ));
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::PdfParse(_))));

        std::fs::remove_file(&path).unwrap();
    }
}
