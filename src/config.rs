// Configuration for sentok output and the interactive prompt

/// How a token sequence is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One token per line (default)
    #[default]
    Lines,
    /// Tokens joined by a single space
    Inline,
    /// Quoted, bracketed list: ["hello", "."]
    Debug,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Append a `# source: n tokens, m sentences` line after each document
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Lines,
            show_summary: false,
        }
    }
}

/// Interactive prompt configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Prompt written before each line is read (default "> ")
    pub prompt: String,

    /// Print the help banner when the session starts
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

/// Master configuration combining all sentok settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub output: OutputConfig,
    pub repl: ReplConfig,
}
