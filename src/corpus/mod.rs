//! Document ingestion and artifact persistence for the formatting pipeline.
//!
//! A [`Formatter`] reads one document whole, runs it through the sentence
//! markup normalizer, and writes the result next to the input under a tagged
//! name (`foo.ext` becomes `foo_formatted.ext`). Reading and persisting are
//! separate steps so a caller can still hold the normalized text when only
//! the write failed.

mod error;

pub use error::FormatError;

use crate::normalizer::{CorpusNormalizer, SentenceMarkupNormalizer};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Tag inserted into an artifact name to mark it as formatted output.
pub const FORMAT_TAG: &str = "_formatted";

/// The outcome of one formatting run.
#[derive(Debug, Clone)]
pub struct FormattedCorpus {
    /// The normalized token stream, identical to the artifact content.
    /// Ready for direct hand-off to an n-gram trainer.
    pub text: String,
    /// Where the stream was persisted.
    pub artifact: PathBuf,
}

/// One-shot formatting pipeline for a single document.
pub struct Formatter {
    input: PathBuf,
    artifact: PathBuf,
    normalizer: SentenceMarkupNormalizer,
}

impl Formatter {
    /// Create a formatter for `input`; the artifact path is derived from the
    /// input name up front.
    pub fn new(input: impl Into<PathBuf>, tag: &str) -> Result<Self> {
        let input = input.into();
        let artifact = formatted_path(&input, tag);

        Ok(Self {
            input,
            artifact,
            normalizer: SentenceMarkupNormalizer::new()?,
        })
    }

    /// Replace the derived artifact destination with an explicit path.
    pub fn with_artifact(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact = path.into();
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    /// Read the whole document and normalize it, without persisting.
    ///
    /// The read is all-or-nothing; a document that cannot be opened yields
    /// [`FormatError::InputNotFound`] and no partial output.
    pub fn normalize(&self) -> Result<String, FormatError> {
        let raw = fs::read_to_string(&self.input).map_err(|source| FormatError::InputNotFound {
            path: self.input.clone(),
            source,
        })?;

        debug!("Running {}", self.normalizer.name());
        Ok(self.normalizer.normalize(&raw))
    }

    /// Write the normalized text to the artifact path.
    ///
    /// The destination is opened, written and closed here; no process-wide
    /// stream is redirected.
    pub fn persist(&self, text: &str) -> Result<(), FormatError> {
        fs::write(&self.artifact, text).map_err(|source| FormatError::OutputWriteFailed {
            path: self.artifact.clone(),
            source,
        })?;

        debug!("Wrote {} chars to {}", text.len(), self.artifact.display());
        Ok(())
    }

    /// Run the full pipeline: read, normalize, persist.
    pub fn run(&self) -> Result<FormattedCorpus, FormatError> {
        info!("Formatting file: {}", self.input.display());

        let text = self.normalize()?;
        self.persist(&text)?;

        Ok(FormattedCorpus {
            text,
            artifact: self.artifact.clone(),
        })
    }
}

/// Derive the artifact path from an input path: the tag goes immediately
/// before the final extension segment. A name without an extension gets the
/// tag appended to the whole name.
pub fn formatted_path(input: &Path, tag: &str) -> PathBuf {
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => {
            let mut name = stem.to_os_string();
            name.push(tag);
            name.push(".");
            name.push(ext);
            input.with_file_name(name)
        }
        _ => {
            let mut name = input
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_default();
            name.push(tag);
            input.with_file_name(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_path_simple() {
        let path = formatted_path(Path::new("alice.txt"), FORMAT_TAG);
        assert_eq!(path, Path::new("alice_formatted.txt"));
    }

    #[test]
    fn test_formatted_path_keeps_parent_dir() {
        let path = formatted_path(Path::new("corpora/en/alice.txt"), FORMAT_TAG);
        assert_eq!(path, Path::new("corpora/en/alice_formatted.txt"));
    }

    #[test]
    fn test_formatted_path_tags_before_final_extension() {
        let path = formatted_path(Path::new("archive.tar.gz"), FORMAT_TAG);
        assert_eq!(path, Path::new("archive.tar_formatted.gz"));
    }

    #[test]
    fn test_formatted_path_without_extension_appends_tag() {
        let path = formatted_path(Path::new("README"), FORMAT_TAG);
        assert_eq!(path, Path::new("README_formatted"));
    }

    #[test]
    fn test_formatted_path_hidden_file() {
        let path = formatted_path(Path::new(".corpusrc"), FORMAT_TAG);
        assert_eq!(path, Path::new(".corpusrc_formatted"));
    }

    #[test]
    fn test_formatted_path_custom_tag() {
        let path = formatted_path(Path::new("alice.txt"), "_clean");
        assert_eq!(path, Path::new("alice_clean.txt"));
    }
}
