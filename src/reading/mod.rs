pub mod token;
pub mod tokenizer;

pub use token::{count_sentences, TokenKind, PERIOD};
pub use tokenizer::{is_boundary_period, tokenize, LowercaseSentenceTokenizer, Tokenizer};
