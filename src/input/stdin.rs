use super::{LoadError, LoadedDocument};
use std::io::{self, Read};

/// Read all of stdin and tokenize it.
pub fn load() -> Result<LoadedDocument, LoadError> {
    load_from(io::stdin().lock())
}

/// Read a reader to its end before tokenizing; nothing is tokenized
/// incrementally.
pub fn load_from<R: Read>(mut reader: R) -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(LoadError::Stdin)?;
    Ok(LoadedDocument::from_text(&text, "stdin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_from_reader() {
        let doc = load_from(Cursor::new("Read ALL of it.\nThen stop.")).unwrap();
        assert_eq!(
            doc.tokens,
            vec!["read", "all", "of", "it", ".", "then", "stop", "."]
        );
        assert_eq!(doc.source, "stdin");
    }

    #[test]
    fn test_command_like_lines_are_plain_text() {
        let doc = load_from(Cursor::new("@home we rest.\n:) nice.\n")).unwrap();
        assert_eq!(doc.tokens, vec!["@home", "we", "rest", ".", ":)", "nice", "."]);
    }

    #[test]
    fn test_load_from_invalid_utf8() {
        let result = load_from(Cursor::new(vec![0xff, 0xfe, 0x00]));
        assert!(matches!(result, Err(LoadError::Stdin(_))));
    }
}
