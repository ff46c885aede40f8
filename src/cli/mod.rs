mod args;
mod format;

pub use args::{Cli, CliCommand, FormatCliArgs};
pub use format::handle_format_command;
