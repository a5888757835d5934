use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use super::command::HELP;
use super::{parse_repl_input, ReplCommand};
use crate::config::{OutputConfig, ReplConfig};
use crate::input::{self, LoadError, LoadedDocument};
use crate::output::TokenPrinter;

/// Line-oriented tokenizer session over any reader/writer pair.
pub struct Repl {
    config: ReplConfig,
    printer: TokenPrinter,
}

impl Repl {
    pub fn new(config: ReplConfig, output: OutputConfig) -> Self {
        Self {
            config,
            printer: TokenPrinter::new(output),
        }
    }

    /// Run until `:q` or end of input. Load failures are reported and the
    /// session continues.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<()> {
        if self.config.show_banner {
            writeln!(out, "sentok: type text to tokenize it, :h for help")?;
        }

        let mut line = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input, leaving session");
                break;
            }

            let command = parse_repl_input(line.trim_end_matches(|c: char| c == '\n' || c == '\r'));
            if !self.dispatch(command, out)? {
                break;
            }
        }

        Ok(())
    }

    /// Handle one command; returns false when the session should end.
    fn dispatch<W: Write>(&self, command: ReplCommand, out: &mut W) -> io::Result<bool> {
        match command {
            ReplCommand::Quit => return Ok(false),
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Empty => {}
            ReplCommand::Unknown(cmd) => {
                writeln!(out, "unknown command: {} (try :h)", cmd)?;
            }
            ReplCommand::Tokenize(text) => {
                self.printer.print(out, &input::inline(&text))?;
            }
            ReplCommand::LoadFile(path) => self.report(input::load(&path), out)?,
            ReplCommand::LoadClipboard => self.report(input::clipboard::load(), out)?,
        }
        Ok(true)
    }

    fn report<W: Write>(
        &self,
        loaded: Result<LoadedDocument, LoadError>,
        out: &mut W,
    ) -> io::Result<()> {
        match loaded {
            Ok(doc) => self.printer.print(out, &doc),
            Err(err) => {
                warn!(error = %err, "failed to load input");
                writeln!(out, "error: {}", err)
            }
        }
    }
}
