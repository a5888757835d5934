use std::io::{self, Write};

use crate::config::{OutputConfig, OutputFormat};
use crate::input::LoadedDocument;
use crate::reading::count_sentences;

/// Writes token sequences to any writer in the configured format.
pub struct TokenPrinter {
    config: OutputConfig,
}

impl TokenPrinter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn print<W: Write>(&self, out: &mut W, doc: &LoadedDocument) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Lines => {
                for token in &doc.tokens {
                    writeln!(out, "{}", token)?;
                }
            }
            OutputFormat::Inline => {
                writeln!(out, "{}", doc.tokens.join(" "))?;
            }
            OutputFormat::Debug => {
                writeln!(out, "{:?}", doc.tokens)?;
            }
        }

        if self.config.show_summary {
            writeln!(
                out,
                "# {}: {} tokens, {} sentences",
                doc.source,
                doc.tokens.len(),
                count_sentences(&doc.tokens)
            )?;
        }

        Ok(())
    }
}
