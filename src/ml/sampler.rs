// ============================================================
// Layer 5 — Collapsed Gibbs Sampler
// ============================================================
// Keeps the three count tables of collapsed LDA:
//
//   n_dk  — occurrences in instance d assigned to topic k
//   n_kw  — occurrences of word w assigned to topic k
//   n_k   — occurrences assigned to topic k
//
// One sweep visits every occurrence in instance order, takes
// its current assignment out of the tables, draws a new topic
// from
//
//   p(k) ∝ (n_dk + α) · (n_kw + β) / (n_k + V·β)
//
// and puts it back. All randomness comes from the single seeded
// StdRng, and the visiting order is fixed, so a seed fully
// determines the result.
//
// Reference: Griffiths & Steyvers (2004) Finding scientific topics

use rand::rngs::StdRng;
use rand::Rng;

use crate::ml::instances::Corpus;

pub struct GibbsSampler<'a> {
    corpus:   &'a Corpus,
    n_topics: usize,
    n_words:  usize,
    alpha:    f64,
    beta:     f64,

    /// Current topic of every occurrence, per instance
    assignments: Vec<Vec<usize>>,
    doc_topic:   Vec<u32>,
    topic_word:  Vec<u32>,
    topic_total: Vec<u32>,

    /// Scratch buffer for the conditional distribution
    weights: Vec<f64>,
}

impl<'a> GibbsSampler<'a> {
    /// Assign every occurrence a uniformly random topic and fill the tables.
    pub fn new(
        corpus:   &'a Corpus,
        n_topics: usize,
        alpha:    f64,
        beta:     f64,
        rng:      &mut StdRng,
    ) -> Self {
        let n_docs  = corpus.instances.len();
        let n_words = corpus.vocabulary.len();

        let mut sampler = Self {
            corpus,
            n_topics,
            n_words,
            alpha,
            beta,
            assignments: Vec::with_capacity(n_docs),
            doc_topic:   vec![0; n_docs * n_topics],
            topic_word:  vec![0; n_topics * n_words],
            topic_total: vec![0; n_topics],
            weights:     vec![0.0; n_topics],
        };

        for (d, instance) in corpus.instances.iter().enumerate() {
            let mut topics = Vec::with_capacity(instance.words.len());
            for &w in &instance.words {
                let k = rng.gen_range(0..n_topics);
                sampler.add(d, w, k);
                topics.push(k);
            }
            sampler.assignments.push(topics);
        }

        sampler
    }

    fn add(&mut self, d: usize, w: usize, k: usize) {
        self.doc_topic[d * self.n_topics + k] += 1;
        self.topic_word[k * self.n_words + w] += 1;
        self.topic_total[k] += 1;
    }

    fn remove(&mut self, d: usize, w: usize, k: usize) {
        self.doc_topic[d * self.n_topics + k] -= 1;
        self.topic_word[k * self.n_words + w] -= 1;
        self.topic_total[k] -= 1;
    }

    /// One full pass over every occurrence of every instance
    pub fn sweep(&mut self, rng: &mut StdRng) {
        let beta_sum = self.beta * self.n_words as f64;

        for d in 0..self.corpus.instances.len() {
            for pos in 0..self.corpus.instances[d].words.len() {
                let w   = self.corpus.instances[d].words[pos];
                let old = self.assignments[d][pos];
                self.remove(d, w, old);

                let mut total = 0.0;
                for k in 0..self.n_topics {
                    let weight = (self.doc_topic[d * self.n_topics + k] as f64 + self.alpha)
                        * (self.topic_word[k * self.n_words + w] as f64 + self.beta)
                        / (self.topic_total[k] as f64 + beta_sum);
                    total += weight;
                    self.weights[k] = total;
                }

                let threshold = rng.gen::<f64>() * total;
                let new = self
                    .weights
                    .iter()
                    .position(|&cumulative| threshold < cumulative)
                    .unwrap_or(self.n_topics - 1);

                self.add(d, w, new);
                self.assignments[d][pos] = new;
            }
        }
    }

    /// φ: p(word | topic), one row per topic
    pub fn topic_word_distribution(&self) -> Vec<Vec<f64>> {
        let beta_sum = self.beta * self.n_words as f64;
        (0..self.n_topics)
            .map(|k| {
                let denom = self.topic_total[k] as f64 + beta_sum;
                (0..self.n_words)
                    .map(|w| (self.topic_word[k * self.n_words + w] as f64 + self.beta) / denom)
                    .collect()
            })
            .collect()
    }

    /// θ: p(topic | instance), one row per instance
    pub fn doc_topic_distribution(&self) -> Vec<Vec<f64>> {
        let alpha_sum = self.alpha * self.n_topics as f64;
        self.corpus
            .instances
            .iter()
            .enumerate()
            .map(|(d, instance)| {
                let denom = instance.words.len() as f64 + alpha_sum;
                (0..self.n_topics)
                    .map(|k| (self.doc_topic[d * self.n_topics + k] as f64 + self.alpha) / denom)
                    .collect()
            })
            .collect()
    }

    /// Mean of ln Σ_k θ_dk φ_kw over every training occurrence
    pub fn log_likelihood_per_token(&self) -> f64 {
        let theta = self.doc_topic_distribution();
        let phi   = self.topic_word_distribution();

        let mut sum   = 0.0;
        let mut count = 0usize;
        for (d, instance) in self.corpus.instances.iter().enumerate() {
            for &w in &instance.words {
                let p: f64 = (0..self.n_topics).map(|k| theta[d][k] * phi[k][w]).sum();
                sum   += p.ln();
                count += 1;
            }
        }

        if count == 0 { 0.0 } else { sum / count as f64 }
    }

    /// Current topic of every occurrence
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.assignments
    }

    /// Current n_k table
    pub fn topic_totals(&self) -> &[u32] {
        &self.topic_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::instances::{Instance, InstanceOrigin};
    use rand::SeedableRng;

    fn corpus() -> Corpus {
        let origin = |d: &str| InstanceOrigin { document: d.into(), begin: 0, end: 0 };
        Corpus {
            vocabulary: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            instances:  vec![
                Instance { origin: origin("x"), words: vec![0, 1, 0, 1] },
                Instance { origin: origin("y"), words: vec![2, 3, 3] },
                Instance { origin: origin("z"), words: vec![0, 2] },
            ],
        }
    }

    #[test]
    fn test_counts_stay_consistent_across_sweeps() {
        let corpus  = corpus();
        let mut rng = StdRng::seed_from_u64(1);
        let mut s   = GibbsSampler::new(&corpus, 3, 0.1, 0.01, &mut rng);
        for _ in 0..5 {
            s.sweep(&mut rng);
        }
        let total: u32 = s.topic_totals().iter().sum();
        assert_eq!(total as usize, corpus.num_tokens());
        for (d, topics) in s.assignments().iter().enumerate() {
            assert_eq!(topics.len(), corpus.instances[d].words.len());
            assert!(topics.iter().all(|&k| k < 3));
        }
    }

    #[test]
    fn test_distributions_are_normalised() {
        let corpus  = corpus();
        let mut rng = StdRng::seed_from_u64(2);
        let mut s   = GibbsSampler::new(&corpus, 2, 0.5, 0.01, &mut rng);
        s.sweep(&mut rng);

        for row in s.topic_word_distribution() {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
        for row in s.doc_topic_distribution() {
            assert_eq!(row.len(), 2);
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
        assert!(s.log_likelihood_per_token() < 0.0);
    }

    #[test]
    fn test_same_seed_same_assignments() {
        let corpus = corpus();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s   = GibbsSampler::new(&corpus, 2, 0.5, 0.01, &mut rng);
            for _ in 0..10 {
                s.sweep(&mut rng);
            }
            s.assignments().to_vec()
        };
        assert_eq!(run(9), run(9));
    }
}
