//! Interactive prompt
//!
//! Reads one line at a time and either tokenizes it directly or loads a
//! source named by an `@` command.
//!
//! - **command.rs**: command definitions and help text
//! - **parser.rs**: string parsing for `@` and `:` prefixes
//! - **session.rs**: the read/dispatch/print loop

pub mod command;
pub mod parser;
pub mod session;

pub use command::ReplCommand;
pub use parser::parse_repl_input;
pub use session::Repl;
