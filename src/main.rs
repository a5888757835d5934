use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};

use sentok::config::{Config, OutputFormat};
use sentok::input::{self, LoadError, LoadedDocument};
use sentok::logging;
use sentok::output::TokenPrinter;
use sentok::repl::Repl;

#[derive(Parser)]
#[command(name = "sentok")]
#[command(about = "Split text into lowercase words and sentence-ending periods")]
#[command(version)]
struct Cli {
    /// Files to tokenize (.txt, .pdf, .epub); `-` reads stdin
    paths: Vec<String>,

    /// Tokenize the clipboard contents
    #[arg(long)]
    clipboard: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Print a token/sentence count after each document
    #[arg(long)]
    summary: bool,

    /// Don't print the banner when starting the prompt
    #[arg(long)]
    no_banner: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Lines,
    Inline,
    Debug,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Lines => OutputFormat::Lines,
            Format::Inline => OutputFormat::Inline,
            Format::Debug => OutputFormat::Debug,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        config.output.format = self.format.into();
        config.output.show_summary = self.summary;
        config.repl.show_banner = !self.no_banner;
        config
    }
}

/// What the binary does with its inputs.
#[derive(Debug, PartialEq)]
enum Mode {
    /// Interactive prompt on a terminal
    Prompt,
    /// Whole of piped stdin as one document
    Stdin,
    /// Named paths and/or the clipboard
    Sources,
}

impl Mode {
    fn select(cli: &Cli, stdin_is_terminal: bool) -> Self {
        if !cli.paths.is_empty() || cli.clipboard {
            Mode::Sources
        } else if stdin_is_terminal {
            Mode::Prompt
        } else {
            Mode::Stdin
        }
    }
}

fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    if path == "-" {
        input::stdin::load()
    } else {
        input::load(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = cli.config();

    let mode = Mode::select(&cli, io::stdin().is_terminal());

    if mode == Mode::Prompt {
        info!("no inputs given, starting prompt");
        let repl = Repl::new(config.repl, config.output);
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        repl.run(stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let printer = TokenPrinter::new(config.output);
    let mut stdout = io::stdout().lock();

    if mode == Mode::Stdin {
        let doc = input::stdin::load().inspect_err(|err| warn!(error = %err, "stdin"))?;
        printer.print(&mut stdout, &doc)?;
        stdout.flush()?;
        return Ok(());
    }

    if cli.clipboard {
        let doc = input::clipboard::load().inspect_err(|err| warn!(error = %err, "clipboard"))?;
        printer.print(&mut stdout, &doc)?;
    }

    for path in &cli.paths {
        let doc = load(path).inspect_err(|err| warn!(error = %err, path = %path, "failed to load"))?;
        printer.print(&mut stdout, &doc)?;
    }

    stdout.flush()?;
    Ok(())
}
