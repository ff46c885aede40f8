use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "corpusfmt")]
#[command(about = "Format text files into n-gram training corpora", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Format one or more text files into sentence-marked training data
    Format(FormatCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct FormatCliArgs {
    /// Text files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Tag for the artifact name (default from config, then "_formatted")
    #[arg(long)]
    pub tag: Option<String>,
    /// Write the artifact to this exact path instead of the derived one
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the normalized token stream to stdout after writing the artifact
    #[arg(short, long)]
    pub print: bool,
}
