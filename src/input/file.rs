use std::path::Path;

use super::{LoadError, LoadedText};

/// Loads a plain-text file. An empty or whitespace-only file is reported
/// rather than silently producing an empty reading session.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("swiftread_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_path("valid.txt");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"hello world").unwrap();

        let loaded = load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.text, "hello world");
        assert!(loaded.source.starts_with("file:"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_empty_file() {
        let path = temp_path("empty.txt");
        fs::File::create(&path).unwrap();

        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_whitespace_only_file() {
        let path = temp_path("blank.txt");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"  \n\t  ").unwrap();

        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/swiftread_missing.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
