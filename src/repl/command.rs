/// Commands that can be parsed from a prompt line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// End the session
    Quit,

    /// Show help information
    Help,

    /// Load and tokenize a file (text, PDF, EPUB)
    LoadFile(String),

    /// Load and tokenize the clipboard
    LoadClipboard,

    /// Tokenize the line itself
    Tokenize(String),

    /// Blank line, nothing to do
    Empty,

    /// Unrecognised `:` command
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  <text>     tokenize the text on this line
  @<path>    tokenize a file (.txt, .pdf, .epub)
  @@         tokenize the clipboard
  :h :help   show this help
  :q :quit   quit";
