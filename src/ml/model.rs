use serde::{Deserialize, Serialize};

use crate::domain::annotation::CoveringUnit;
use crate::ml::instances::InstanceOrigin;

/// Run settings stored alongside the distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub n_topics:      usize,
    pub n_iterations:  usize,
    /// Per-topic document prior (alpha_sum / n_topics)
    pub alpha:         f64,
    pub beta:          f64,
    pub random_seed:   u64,
    pub language:      String,
    pub covering_unit: CoveringUnit,
    /// Mean log p(w | instance) over all training tokens after the last sweep
    pub log_likelihood_per_token: f64,
}

/// A trained LDA model.
///
/// `topic_word[k][w]` is p(word w | topic k), indexed like `vocabulary`.
/// `doc_topic[d][k]` is p(topic k | instance d), indexed like `instances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicModel {
    pub metadata:   ModelMetadata,
    pub vocabulary: Vec<String>,
    pub topic_word: Vec<Vec<f64>>,
    pub doc_topic:  Vec<Vec<f64>>,
    pub instances:  Vec<InstanceOrigin>,
}

impl TopicModel {
    pub fn n_topics(&self) -> usize {
        self.metadata.n_topics
    }

    /// The `n` most probable words of every topic, highest first.
    /// Equal probabilities keep vocabulary order.
    pub fn top_words(&self, n: usize) -> Vec<Vec<(&str, f64)>> {
        self.topic_word
            .iter()
            .map(|row| {
                let mut order: Vec<usize> = (0..row.len()).collect();
                order.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
                order
                    .into_iter()
                    .take(n)
                    .map(|w| (self.vocabulary[w].as_str(), row[w]))
                    .collect()
            })
            .collect()
    }

    /// Index of the most probable topic of each instance
    pub fn dominant_topics(&self) -> Vec<usize> {
        self.doc_topic
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .fold((0, f64::NEG_INFINITY), |best, (k, &p)| {
                        if p > best.1 { (k, p) } else { best }
                    })
                    .0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> TopicModel {
        TopicModel {
            metadata: ModelMetadata {
                n_topics:      2,
                n_iterations:  1,
                alpha:         0.5,
                beta:          0.01,
                random_seed:   7,
                language:      "en".into(),
                covering_unit: CoveringUnit::Sentence,
                log_likelihood_per_token: -1.0,
            },
            vocabulary: vec!["cat".into(), "dog".into(), "fish".into()],
            topic_word: vec![vec![0.2, 0.2, 0.6], vec![0.7, 0.2, 0.1]],
            doc_topic:  vec![vec![0.9, 0.1], vec![0.3, 0.7]],
            instances:  Vec::new(),
        }
    }

    #[test]
    fn test_top_words_sorted_with_stable_ties() {
        let model = tiny();
        let top   = model.top_words(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0][0].0, "fish");
        // cat and dog tie at 0.2: vocabulary order wins
        assert_eq!(top[0][1].0, "cat");
        assert_eq!(top[1][0].0, "cat");
    }

    #[test]
    fn test_top_words_caps_at_vocabulary() {
        let model = tiny();
        assert_eq!(model.top_words(10)[0].len(), 3);
    }

    #[test]
    fn test_dominant_topics() {
        assert_eq!(tiny().dominant_topics(), vec![0, 1]);
    }
}
