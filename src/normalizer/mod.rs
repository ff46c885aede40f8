mod corpus_normalizer;
mod sentence_markup;

pub use corpus_normalizer::CorpusNormalizer;
pub use sentence_markup::{SentenceMarkupNormalizer, SENTENCE_END, SENTENCE_START};
