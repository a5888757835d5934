/// The value of a sentence-ending period token.
pub const PERIOD: &str = ".";

/// Kind of a token, derived from its value.
///
/// Tokens are plain strings; this is only a view for consumers that want to
/// treat sentence ends differently from words.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Word,
    Period,
}

impl TokenKind {
    pub fn of(token: &str) -> Self {
        if token == PERIOD {
            TokenKind::Period
        } else {
            TokenKind::Word
        }
    }
}

/// Number of sentence-ending periods in a token sequence.
pub fn count_sentences<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .filter(|t| TokenKind::of(t.as_ref()) == TokenKind::Period)
        .count()
}
