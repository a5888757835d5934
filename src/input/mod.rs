use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::reading::tokenize;

/// Failure to acquire input text. Tokenization never runs when one of these
/// is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// A fully read source and the tokens produced from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub tokens: Vec<String>,
    /// `<kind>:<detail>` label of where the text came from.
    pub source: String,
}

impl LoadedDocument {
    /// Tokenizes already acquired text.
    pub fn from_text(text: &str, source: impl Into<String>) -> Self {
        let doc = Self {
            tokens: tokenize(text),
            source: source.into(),
        };
        debug!(source = %doc.source, tokens = doc.tokens.len(), "tokenized document");
        doc
    }
}

/// Load a file, picking the loader from its extension.
///
/// `.pdf` and `.epub` get their dedicated loaders; anything else is read as
/// UTF-8 text.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}

/// Tokenize a string that is already in memory.
pub fn inline(text: &str) -> LoadedDocument {
    LoadedDocument::from_text(text, "inline")
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod stdin;
pub mod text;
