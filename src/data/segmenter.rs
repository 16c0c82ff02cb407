// ============================================================
// Layer 4 — Segmenter
// ============================================================
// Splits each document into Sentence spans and, inside each
// sentence, Token spans.
//
// Boundaries follow Unicode UAX #29:
//   sentences — split_sentence_bound_indices()
//   words     — split_word_bound_indices()
//
// Sentence spans are trimmed of surrounding whitespace and
// whitespace-only sentences are dropped, so every visible
// character sits in exactly one sentence. Word segments that
// contain no letter or digit (punctuation, spaces) are not
// tokens. Tokens are produced per sentence, so they can never
// cross a sentence boundary.
//
// Reference: unicode-segmentation crate documentation
//            https://unicode.org/reports/tr29/

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::annotation::{Sentence, Token};
use crate::domain::document::Document;
use crate::domain::error::{PipelineError, Result, Stage};
use crate::domain::traits::Annotator;

pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Sentence spans of `text`, trimmed, in order
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        text.split_sentence_bound_indices()
            .filter_map(|(offset, raw)| {
                let lead    = raw.len() - raw.trim_start().len();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let begin = offset + lead;
                Some(Sentence::new(begin, begin + trimmed.len()))
            })
            .collect()
    }

    /// Word tokens of one sentence, with offsets relative to the document
    pub fn tokens(&self, text: &str, sentence: &Sentence) -> Vec<Token> {
        let base = sentence.span.begin;
        text[sentence.span.begin..sentence.span.end]
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
            .map(|(offset, word)| Token::new(base + offset, base + offset + word.len()))
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for Segmenter {
    fn name(&self) -> &'static str {
        "segmenter"
    }

    fn process(&self, doc: &mut Document) -> Result<()> {
        if let Some(offset) = doc.undecodable_at {
            return Err(PipelineError::processing(
                Stage::Segmenter,
                &doc.id,
                format!("text is not valid UTF-8 (first undecodable byte at offset {offset})"),
            ));
        }

        let sentences = self.sentences(&doc.text);
        let tokens: Vec<Token> = sentences
            .iter()
            .flat_map(|s| self.tokens(&doc.text, s))
            .collect();

        tracing::debug!(
            "{}: {} sentences, {} tokens",
            doc.id,
            sentences.len(),
            tokens.len()
        );

        doc.sentences = sentences;
        doc.tokens    = tokens;
        Ok(())
    }
}
