// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single text file loaded from disk, tagged with the corpus
// language. The reader fills in id, text and language; the
// later stages only attach annotations.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::annotation::{Sentence, Span, Token};

/// A raw document plus the annotations attached by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The source file path, used to identify the document in
    /// log lines, error messages and the saved model
    pub id: String,

    /// The full text content
    pub text: String,

    /// ISO 639-1 language code, e.g. "en"
    pub language: String,

    /// Byte offset of the first invalid UTF-8 sequence, if the
    /// file had to be decoded lossily
    pub undecodable_at: Option<usize>,

    /// Sentence spans in text order (set by the segmenter)
    pub sentences: Vec<Sentence>,

    /// Token spans in text order (set by the segmenter)
    pub tokens: Vec<Token>,
}

impl Document {
    /// Create an unannotated document.
    ///
    /// Example:
    ///   let doc = Document::new("texts/a.txt", "The cat sat.", "en");
    pub fn new(
        id:       impl Into<String>,
        text:     impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id:             id.into(),
            text:           text.into(),
            language:       language.into(),
            undecodable_at: None,
            sentences:      Vec::new(),
            tokens:         Vec::new(),
        }
    }

    /// The text covered by `span`
    pub fn covered_text(&self, span: &Span) -> &str {
        &self.text[span.begin..span.end]
    }

    /// The span of the whole text
    pub fn full_span(&self) -> Span {
        Span::new(0, self.text.len())
    }

    /// Tokens lying entirely inside `span`, in text order.
    /// Tokens are sorted by offset, so this is two binary searches.
    pub fn tokens_within(&self, span: &Span) -> &[Token] {
        let start = self.tokens.partition_point(|t| t.span.begin < span.begin);
        let stop  = self.tokens.partition_point(|t| t.span.end <= span.end);
        if start >= stop {
            return &[];
        }
        &self.tokens[start..stop]
    }

    /// Surface forms of the tokens that survived stop-word removal
    pub fn kept_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .filter(|t| !t.removed)
            .map(move |t| self.covered_text(&t.span))
    }
}
