use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::normalizer::CorpusNormalizer;

/// Sentence start marker. The downstream trainer matches this literal token
/// when building its frequency tables.
pub const SENTENCE_START: &str = "<s>";

/// Sentence end marker.
pub const SENTENCE_END: &str = "</s>";

/// A token ends a sentence when, and only when, its final character is one
/// of these marks.
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Normalizer that delimits sentences with `<s>`/`</s>` and strips
/// miscellaneous punctuation from every token. Apostrophes and parentheses
/// are left in place, since they can disambiguate meaning ("we're" vs.
/// "were").
pub struct SentenceMarkupNormalizer {
    misc_punctuation: Regex,
}

impl SentenceMarkupNormalizer {
    pub fn new() -> Result<Self> {
        // Single class pass per token; apostrophes and parentheses are
        // deliberately absent from the class.
        let misc_punctuation = Regex::new(r#"[,`~&^%$#@:;"-]"#)?;

        Ok(Self { misc_punctuation })
    }
}

impl CorpusNormalizer for SentenceMarkupNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let mut stream = String::with_capacity(raw.len() + raw.len() / 4);
        stream.push_str(SENTENCE_START);
        stream.push(' ');

        for word in raw.split_whitespace() {
            // Last-character check only; punctuation mid-token or doubled
            // at the end ("?!") gets no further treatment.
            let (body, ends_sentence) = match word.strip_suffix(TERMINALS) {
                Some(stripped) => (stripped, true),
                None => (word, false),
            };

            let cleaned = self.misc_punctuation.replace_all(body, "");
            stream.push_str(&cleaned);
            if ends_sentence {
                stream.push(' ');
                stream.push_str(SENTENCE_END);
                stream.push(' ');
                stream.push_str(SENTENCE_START);
            }
            stream.push(' ');
        }

        debug!("Normalized {} chars to {} chars", raw.len(), stream.len());
        stream
    }

    fn name(&self) -> &'static str {
        "SentenceMarkupNormalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> SentenceMarkupNormalizer {
        SentenceMarkupNormalizer::new().unwrap()
    }

    fn marker_counts(stream: &str) -> (usize, usize) {
        let starts = stream
            .split_whitespace()
            .filter(|t| *t == SENTENCE_START)
            .count();
        let ends = stream
            .split_whitespace()
            .filter(|t| *t == SENTENCE_END)
            .count();
        (starts, ends)
    }

    #[test]
    fn test_sentence_markers_inserted() {
        let output = normalizer().normalize("Hello world. Bye!");
        assert_eq!(output, "<s> Hello world </s> <s> Bye </s> <s> ");
    }

    #[test]
    fn test_preserves_apostrophes_and_parens() {
        let output = normalizer().normalize("can't (maybe) go");
        assert_eq!(output, "<s> can't (maybe) go ");
    }

    #[test]
    fn test_strips_misc_punctuation() {
        let output = normalizer().normalize("a, b; c: d");
        assert_eq!(output, "<s> a b c d ");
    }

    #[test]
    fn test_strips_every_filter_character() {
        let output = normalizer().normalize("x,`~-&^%$#@:;\"y");
        assert_eq!(output, "<s> xy ");
    }

    #[test]
    fn test_marker_balance() {
        let output = normalizer().normalize("One. Two! Three? And a tail");
        let (starts, ends) = marker_counts(&output);
        assert_eq!(starts, 4);
        assert_eq!(ends, 3);
        assert!(output.starts_with("<s> "));
    }

    #[test]
    fn test_double_terminal_strips_single_character() {
        let output = normalizer().normalize("Really?!");
        assert_eq!(output, "<s> Really? </s> <s> ");
    }

    #[test]
    fn test_mid_token_period_is_not_a_boundary() {
        let output = normalizer().normalize("version 2.0 shipped");
        assert_eq!(output, "<s> version 2.0 shipped ");
    }

    #[test]
    fn test_empty_input_is_a_lone_start_marker() {
        assert_eq!(normalizer().normalize(""), "<s> ");
    }

    #[test]
    fn test_filter_pass_is_idempotent() {
        let n = normalizer();
        let once = n.normalize("well, the $5 re-run: done.");
        let again = n.misc_punctuation.replace_all(&once, "");
        assert_eq!(again, once);
    }
}
