//! corpusfmt prepares raw text files for use as training data for n-gram
//! language models: every sentence is delimited with `<s>`/`</s>` markers
//! and miscellaneous punctuation is stripped, while apostrophes and
//! parentheses are kept since they can carry meaning ("we're" vs. "were").

pub mod cli;
pub mod config;
pub mod corpus;
pub mod global;
pub mod normalizer;
