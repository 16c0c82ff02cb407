// ============================================================
// Layer 5 — LDA Trainer
// ============================================================
// Implements ModelTrainer:
//
//   1. Build instances + vocabulary from the covering units
//   2. Seed the RNG and randomly initialise topic assignments
//   3. Run n_iterations Gibbs sweeps
//   4. Derive φ (topic-word) and θ (instance-topic)
//   5. Package everything as a TopicModel
//
// Parameters are checked in LdaTrainer::new, before any
// document is read.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::annotation::CoveringUnit;
use crate::domain::document::Document;
use crate::domain::error::{PipelineError, Result, Stage};
use crate::domain::traits::ModelTrainer;
use crate::ml::instances::Corpus;
use crate::ml::model::{ModelMetadata, TopicModel};
use crate::ml::sampler::GibbsSampler;

/// Log-likelihood is logged every this many sweeps
const LOG_INTERVAL: usize = 10;

/// Hyperparameters of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdaParams {
    /// Annotation type that bounds one training instance
    pub covering_unit: CoveringUnit,

    /// Number of latent topics (K)
    pub n_topics: usize,

    /// Number of Gibbs sweeps (I)
    pub n_iterations: usize,

    /// Sum of the symmetric document-topic prior; each topic gets alpha_sum / K
    pub alpha_sum: f64,

    /// Symmetric topic-word prior
    pub beta: f64,

    /// Seed for the sampler's RNG
    pub random_seed: u64,

    /// Lowercase surface forms before building the vocabulary
    pub lowercase: bool,

    /// Words per topic shown in the log after training
    pub top_words: usize,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            covering_unit: CoveringUnit::Sentence,
            n_topics:      10,
            n_iterations:  100,
            alpha_sum:     1.0,
            beta:          0.01,
            random_seed:   42,
            lowercase:     false,
            top_words:     10,
        }
    }
}

impl LdaParams {
    pub fn validate(&self) -> Result<()> {
        if self.n_topics < 1 {
            return Err(PipelineError::config(Stage::Trainer, "number of topics must be at least 1"));
        }
        if self.n_iterations < 1 {
            return Err(PipelineError::config(Stage::Trainer, "number of iterations must be at least 1"));
        }
        if !(self.alpha_sum > 0.0) {
            return Err(PipelineError::config(
                Stage::Trainer,
                format!("alpha_sum must be positive, got {}", self.alpha_sum),
            ));
        }
        if !(self.beta > 0.0) {
            return Err(PipelineError::config(
                Stage::Trainer,
                format!("beta must be positive, got {}", self.beta),
            ));
        }
        Ok(())
    }

    /// Per-topic alpha
    pub fn alpha(&self) -> f64 {
        self.alpha_sum / self.n_topics as f64
    }
}

pub struct LdaTrainer {
    params: LdaParams,
}

impl LdaTrainer {
    pub fn new(params: LdaParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl ModelTrainer for LdaTrainer {
    type Model = TopicModel;

    fn train(&self, docs: &[Document]) -> Result<TopicModel> {
        let p = &self.params;

        // ── Step 1: Instances and vocabulary ─────────────────────────────────
        let corpus = Corpus::build(docs, p.covering_unit, p.lowercase);
        if corpus.is_empty() {
            return Err(PipelineError::config(
                Stage::Trainer,
                "no training instances: every covering unit is empty after stop-word removal",
            ));
        }
        tracing::info!(
            "Training on {} instances, {} tokens, vocabulary of {}",
            corpus.instances.len(),
            corpus.num_tokens(),
            corpus.vocabulary.len()
        );

        // ── Step 2: Random initial assignments ───────────────────────────────
        let mut rng     = StdRng::seed_from_u64(p.random_seed);
        let alpha       = p.alpha();
        let mut sampler = GibbsSampler::new(&corpus, p.n_topics, alpha, p.beta, &mut rng);

        // ── Step 3: Gibbs sweeps ─────────────────────────────────────────────
        for iter in 1..=p.n_iterations {
            sampler.sweep(&mut rng);
            if iter % LOG_INTERVAL == 0 {
                tracing::debug!(
                    "Iteration {:>4}/{} | LL/token={:.5}",
                    iter,
                    p.n_iterations,
                    sampler.log_likelihood_per_token()
                );
            }
        }

        // ── Step 4: Distributions ────────────────────────────────────────────
        let log_likelihood = sampler.log_likelihood_per_token();
        let topic_word     = sampler.topic_word_distribution();
        let doc_topic      = sampler.doc_topic_distribution();
        tracing::info!("Finished {} iterations, LL/token={:.5}", p.n_iterations, log_likelihood);

        // ── Step 5: Package ──────────────────────────────────────────────────
        let language = docs.first().map(|d| d.language.clone()).unwrap_or_default();
        let model = TopicModel {
            metadata: ModelMetadata {
                n_topics:      p.n_topics,
                n_iterations:  p.n_iterations,
                alpha,
                beta:          p.beta,
                random_seed:   p.random_seed,
                language,
                covering_unit: p.covering_unit,
                log_likelihood_per_token: log_likelihood,
            },
            instances:  corpus.instances.iter().map(|i| i.origin.clone()).collect(),
            vocabulary: corpus.vocabulary,
            topic_word,
            doc_topic,
        };

        for (k, words) in model.top_words(p.top_words).iter().enumerate() {
            let listed: Vec<&str> = words.iter().map(|(w, _)| *w).collect();
            tracing::info!("Topic {:>2}: {}", k, listed.join(" "));
        }

        Ok(model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::segmenter::Segmenter;
    use crate::data::stopword_filter::{StopWordFilter, StopWordSet};
    use crate::domain::traits::Annotator;

    fn docs(texts: &[&str]) -> Vec<Document> {
        let mut docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc{i}.txt"), *t, "en"))
            .collect();
        Segmenter::new().process_all(&mut docs).unwrap();
        StopWordFilter::new(StopWordSet::new("en", ["the"]))
            .process_all(&mut docs)
            .unwrap();
        docs
    }

    fn params(k: usize, i: usize) -> LdaParams {
        LdaParams { n_topics: k, n_iterations: i, ..LdaParams::default() }
    }

    #[test]
    fn test_zero_topics_rejected() {
        let err = LdaTrainer::new(params(0, 10)).err().unwrap();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = LdaTrainer::new(params(2, 0)).err().unwrap();
        assert!(err.is_config());
    }

    #[test]
    fn test_non_positive_priors_rejected() {
        let p = LdaParams { beta: 0.0, ..LdaParams::default() };
        assert!(LdaTrainer::new(p).is_err());
        let p = LdaParams { alpha_sum: f64::NAN, ..LdaParams::default() };
        assert!(LdaTrainer::new(p).is_err());
    }

    #[test]
    fn test_empty_corpus_is_config_error() {
        let trainer = LdaTrainer::new(params(2, 10)).unwrap();
        let err     = trainer.train(&docs(&["the the", "The."])).unwrap_err();
        assert!(err.is_config());
        assert_eq!(err.stage(), Stage::Trainer);
    }

    #[test]
    fn test_model_shape() {
        let trainer = LdaTrainer::new(params(2, 10)).unwrap();
        let model   = trainer.train(&docs(&["the cat sat", "dogs run fast"])).unwrap();

        assert_eq!(model.vocabulary, vec!["cat", "sat", "dogs", "run", "fast"]);
        assert_eq!(model.topic_word.len(), 2);
        assert!(model.topic_word.iter().all(|row| row.len() == 5));
        assert_eq!(model.doc_topic.len(), 2);
        assert_eq!(model.instances[1].document, "doc1.txt");
        assert_eq!(model.metadata.n_iterations, 10);
        assert_eq!(model.metadata.language, "en");
        assert!((model.metadata.alpha - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let corpus = docs(&["apples pears plums. Cars trucks buses.", "plums apples. buses cars."]);
        let a = LdaTrainer::new(params(3, 25)).unwrap().train(&corpus).unwrap();
        let b = LdaTrainer::new(params(3, 25)).unwrap().train(&corpus).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_separable_corpus_splits_topics() {
        let mut texts = Vec::new();
        for _ in 0..10 {
            texts.push("apple pear plum apple pear plum");
            texts.push("car truck bus car truck bus");
        }
        let p = LdaParams {
            covering_unit: CoveringUnit::Document,
            alpha_sum: 0.2,
            ..params(2, 200)
        };
        let model    = LdaTrainer::new(p).unwrap().train(&docs(&texts)).unwrap();
        let dominant = model.dominant_topics();

        assert!(dominant.iter().step_by(2).all(|&k| k == dominant[0]));
        assert!(dominant.iter().skip(1).step_by(2).all(|&k| k == dominant[1]));
        assert_ne!(dominant[0], dominant[1]);
    }
}
