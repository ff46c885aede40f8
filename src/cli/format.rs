//! CLI handler for formatting training files.
//!
//! Resolves the artifact tag, runs the pipeline per file, and reports where
//! each formatted corpus was written.

use anyhow::{bail, Result};
use tracing::info;

use crate::cli::args::FormatCliArgs;
use crate::config::Config;
use crate::corpus::Formatter;
use crate::normalizer::{SENTENCE_END, SENTENCE_START};

/// Handle the format CLI command.
pub fn handle_format_command(args: FormatCliArgs) -> Result<()> {
    if args.output.is_some() && args.files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }

    // Config is only consulted when the flag does not settle the tag, so a
    // --tag run never touches the config directory.
    let tag = match &args.tag {
        Some(tag) => tag.clone(),
        None => Config::load()?.format.tag,
    };

    for file in &args.files {
        let mut formatter = Formatter::new(file, &tag)?;
        if let Some(output) = &args.output {
            formatter = formatter.with_artifact(output);
        }

        let corpus = formatter.run()?;

        let words = corpus
            .text
            .split_whitespace()
            .filter(|t| *t != SENTENCE_START && *t != SENTENCE_END)
            .count();
        let sentences = corpus
            .text
            .split_whitespace()
            .filter(|t| *t == SENTENCE_END)
            .count();
        info!(
            "{}: {} words, {} closed sentences",
            file.display(),
            words,
            sentences
        );

        eprintln!("Formatted corpus saved to: {}", corpus.artifact.display());

        if args.print {
            println!("{}", corpus.text);
        }
    }

    Ok(())
}
