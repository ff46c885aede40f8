use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the formatting pipeline.
///
/// The two variants let callers tell "nothing was read" apart from "the
/// normalized text exists but was never persisted".
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input document is missing or cannot be opened for reading. No
    /// artifact is produced.
    #[error("no readable file at {}: {}", path.display(), source)]
    InputNotFound { path: PathBuf, source: io::Error },

    /// The artifact destination cannot be opened for writing.
    #[error("could not write formatted file {}: {}", path.display(), source)]
    OutputWriteFailed { path: PathBuf, source: io::Error },
}
