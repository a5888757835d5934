use super::token::PERIOD;

/// Something that turns a complete text into a flat token sequence.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases text and splits it into words and sentence-ending periods.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseSentenceTokenizer;

impl LowercaseSentenceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for LowercaseSentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }
}

/// True when the char at `index` is a period followed by whitespace or by
/// the end of `text`.
///
/// Only the right-hand neighbour matters: "end.." ends in a boundary period
/// even though it follows another period.
pub fn is_boundary_period(text: &str, index: usize) -> bool {
    let mut rest = match text.get(index..) {
        Some(rest) => rest.chars(),
        None => return false,
    };

    match rest.next() {
        Some('.') => rest.next().map_or(true, char::is_whitespace),
        _ => false,
    }
}

/// Tokenizes text into lowercase words and standalone periods.
///
/// The whole input is lowercased before scanning so multi-char case mappings
/// stay intact. Words are runs of non-whitespace chars; a period becomes its
/// own token only when followed by whitespace or end of input, otherwise it
/// stays inside the word ("dr.smith's").
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut tokens = Vec::new();

    // Byte offset where the word being accumulated starts.
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_boundary_period(&text, i) {
            if let Some(s) = start.take() {
                tokens.push(text[s..i].to_string());
            }
            tokens.push(PERIOD.to_string());
        } else if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(text[s..i].to_string());
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        tokens.push(text[s..].to_string());
    }

    tokens
}
