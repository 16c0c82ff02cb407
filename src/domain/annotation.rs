// ============================================================
// Layer 3 — Span Annotations
// ============================================================
// Sentence and Token annotations are byte ranges over the
// text of the document they belong to. The segmenter creates
// them, the stop-word filter flips Token::removed, nothing
// else touches them.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[begin, end)` over a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end:   usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begin {begin} after end {end}");
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// True if `other` lies entirely inside this span
    pub fn covers(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub span: Span,
}

impl Sentence {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { span: Span::new(begin, end) }
    }
}

/// A word token. `removed` is set by the stop-word filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span:    Span,
    pub removed: bool,
}

impl Token {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { span: Span::new(begin, end), removed: false }
    }
}

/// The annotation type whose span bounds one training instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveringUnit {
    /// One instance per sentence
    #[default]
    Sentence,
    /// One instance per document
    Document,
}
