/// Trait for turning raw document text into a normalized token stream.
pub trait CorpusNormalizer: Send + Sync {
    /// Normalize the raw document text.
    fn normalize(&self, raw: &str) -> String;

    /// Get the name of this normalizer for logging.
    fn name(&self) -> &'static str;
}
