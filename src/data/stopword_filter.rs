// ============================================================
// Layer 4 — Stop-word Filter
// ============================================================
// Marks every token whose lowercased surface form is a stop
// word as removed. Tokens are never deleted or reordered, so
// offsets stay valid and running the filter twice changes
// nothing the second time.

use rustc_hash::FxHashSet;

use crate::domain::document::Document;
use crate::domain::error::{PipelineError, Result, Stage};
use crate::domain::traits::Annotator;

/// An immutable set of lowercase stop words for one language.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    language: String,
    words:    FxHashSet<String>,
}

impl StopWordSet {
    /// Build a set from any list of words; entries are lowercased
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.into(),
            words:    words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// `word` must already be lowercase
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub struct StopWordFilter {
    stopwords: StopWordSet,
}

impl StopWordFilter {
    pub fn new(stopwords: StopWordSet) -> Self {
        Self { stopwords }
    }
}

impl Annotator for StopWordFilter {
    fn name(&self) -> &'static str {
        "stop-word filter"
    }

    fn process(&self, doc: &mut Document) -> Result<()> {
        if !doc.language.eq_ignore_ascii_case(self.stopwords.language()) {
            return Err(PipelineError::config(
                Stage::StopWordFilter,
                format!(
                    "document '{}' is '{}' but the stop-word list is for '{}'",
                    doc.id,
                    doc.language,
                    self.stopwords.language()
                ),
            ));
        }

        let mut removed = 0usize;
        for token in doc.tokens.iter_mut().filter(|t| !t.removed) {
            let surface = doc.text[token.span.begin..token.span.end].to_lowercase();
            if self.stopwords.contains(&surface) {
                token.removed = true;
                removed += 1;
            }
        }

        tracing::debug!("{}: removed {} stop words", doc.id, removed);
        Ok(())
    }
}
