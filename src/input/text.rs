use super::{LoadError, LoadedDocument};
use std::io::ErrorKind;
use std::path::Path;

/// Load a plain UTF-8 text file.
///
/// An empty file is not an error; it simply yields no tokens.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    Ok(LoadedDocument::from_text(
        &content,
        format!("text:{}", path.display()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_nonexistent_file_error() {
        let result = load("nonexistent_file_12345.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("valid.txt");
        fs::write(&path, "Hello world. Bye.").unwrap();

        let doc = load(path.to_str().unwrap()).unwrap();
        assert_eq!(doc.tokens, vec!["hello", "world", ".", "bye", "."]);
        assert_eq!(doc.source, format!("text:{}", path.display()));
    }

    #[test]
    fn test_empty_file_yields_no_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let doc = load(path.to_str().unwrap()).unwrap();
        assert!(doc.tokens.is_empty());
    }

    #[test]
    fn test_invalid_utf8_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::InvalidEncoding(_))));
    }
}
