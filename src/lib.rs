//! # sentok
//!
//! Lowercasing sentence tokenizer. Text is split into words and standalone
//! sentence-ending periods; a period stays inside its word unless it is
//! followed by whitespace or the end of the text.
//!
//! ```
//! let tokens = sentok::tokenize("Hello world. This is Dr.Smith's example.");
//! assert_eq!(
//!     tokens,
//!     vec!["hello", "world", ".", "this", "is", "dr.smith's", "example", "."]
//! );
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod reading;
pub mod repl;

pub use input::{LoadError, LoadedDocument};
pub use reading::{tokenize, LowercaseSentenceTokenizer, Tokenizer};
