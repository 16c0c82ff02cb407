// ============================================================
// Layer 5 — Training Instances
// ============================================================
// Turns annotated documents into bag-of-words instances:
//
//   for every covering unit (sentence, or whole document)
//     collect the kept tokens inside it, in text order
//     → one instance if at least one token survived
//
// Words are mapped to vocabulary indices in first-seen order,
// so the same corpus always yields the same vocabulary layout.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::domain::annotation::{CoveringUnit, Span};
use crate::domain::document::Document;

/// Where an instance came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceOrigin {
    /// Document id (source path)
    pub document: String,
    /// Byte offsets of the covering unit
    pub begin:    usize,
    pub end:      usize,
}

/// One training instance: word indices in document order
#[derive(Debug, Clone)]
pub struct Instance {
    pub origin: InstanceOrigin,
    pub words:  Vec<usize>,
}

/// The instances of a corpus plus their shared vocabulary
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub vocabulary: Vec<String>,
    pub instances:  Vec<Instance>,
}

impl Corpus {
    /// Collect instances from `docs` using `unit` as the instance boundary.
    /// With `lowercase` set, surface forms are lowercased before lookup.
    pub fn build(docs: &[Document], unit: CoveringUnit, lowercase: bool) -> Self {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut corpus = Corpus::default();

        for doc in docs {
            let spans: Vec<Span> = match unit {
                CoveringUnit::Sentence => doc.sentences.iter().map(|s| s.span).collect(),
                CoveringUnit::Document => vec![doc.full_span()],
            };

            for span in spans {
                let words: Vec<usize> = doc
                    .tokens_within(&span)
                    .iter()
                    .filter(|t| !t.removed)
                    .map(|t| {
                        let surface = doc.covered_text(&t.span);
                        let form = if lowercase {
                            surface.to_lowercase()
                        } else {
                            surface.to_string()
                        };
                        let next = corpus.vocabulary.len();
                        *index.entry(form).or_insert_with_key(|form| {
                            corpus.vocabulary.push(form.clone());
                            next
                        })
                    })
                    .collect();

                if words.is_empty() {
                    continue;
                }

                corpus.instances.push(Instance {
                    origin: InstanceOrigin {
                        document: doc.id.clone(),
                        begin:    span.begin,
                        end:      span.end,
                    },
                    words,
                });
            }
        }

        corpus
    }

    /// Total number of word occurrences across all instances
    pub fn num_tokens(&self) -> usize {
        self.instances.iter().map(|i| i.words.len()).sum()
    }

    /// The surface forms of instance `i`, in order
    pub fn instance_words(&self, i: usize) -> Vec<&str> {
        self.instances[i]
            .words
            .iter()
            .map(|&w| self.vocabulary[w].as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::segmenter::Segmenter;
    use crate::data::stopword_filter::{StopWordFilter, StopWordSet};
    use crate::domain::traits::Annotator;

    fn prepared(texts: &[&str], stopwords: &[&str]) -> Vec<Document> {
        let mut docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc{i}"), *t, "en"))
            .collect();
        Segmenter::new().process_all(&mut docs).unwrap();
        StopWordFilter::new(StopWordSet::new("en", stopwords))
            .process_all(&mut docs)
            .unwrap();
        docs
    }

    #[test]
    fn test_one_instance_per_sentence() {
        let docs   = prepared(&["the cat sat", "dogs run fast"], &["the"]);
        let corpus = Corpus::build(&docs, CoveringUnit::Sentence, false);

        assert_eq!(corpus.instances.len(), 2);
        assert_eq!(corpus.instance_words(0), vec!["cat", "sat"]);
        assert_eq!(corpus.instance_words(1), vec!["dogs", "run", "fast"]);
        assert_eq!(corpus.vocabulary, vec!["cat", "sat", "dogs", "run", "fast"]);
    }

    #[test]
    fn test_sentences_without_kept_tokens_are_skipped() {
        let docs = prepared(&["The end. Cats purr. It is."], &["the", "end", "it", "is"]);
        let kept_units = docs[0]
            .sentences
            .iter()
            .filter(|s| docs[0].tokens_within(&s.span).iter().any(|t| !t.removed))
            .count();

        let corpus = Corpus::build(&docs, CoveringUnit::Sentence, false);
        assert_eq!(docs[0].sentences.len(), 3);
        assert_eq!(corpus.instances.len(), kept_units);
        assert_eq!(corpus.instances.len(), 1);
        assert_eq!(corpus.instance_words(0), vec!["Cats", "purr"]);
    }

    #[test]
    fn test_document_covering_unit() {
        let docs   = prepared(&["One cat. Two cats.", "Dogs."], &[]);
        let corpus = Corpus::build(&docs, CoveringUnit::Document, false);
        assert_eq!(corpus.instances.len(), 2);
        assert_eq!(corpus.instance_words(0), vec!["One", "cat", "Two", "cats"]);
        assert_eq!(corpus.instances[1].origin.document, "doc1");
    }

    #[test]
    fn test_lowercase_merges_forms() {
        let docs   = prepared(&["Cat cat CAT"], &[]);
        let corpus = Corpus::build(&docs, CoveringUnit::Sentence, true);
        assert_eq!(corpus.vocabulary, vec!["cat"]);
        assert_eq!(corpus.num_tokens(), 3);
    }

    #[test]
    fn test_all_stop_words_gives_empty_corpus() {
        let docs   = prepared(&["the a the"], &["the", "a"]);
        let corpus = Corpus::build(&docs, CoveringUnit::Sentence, false);
        assert!(corpus.is_empty());
        assert!(corpus.vocabulary.is_empty());
    }
}
