// ============================================================
// Layer 2 — EstimateUseCase
// ============================================================
// Orchestrates the estimation pipeline in order:
//
//   Step 1: Validate LDA parameters      (Layer 5 - ml)
//   Step 2: Load stop-word list          (Layer 6 - infra)
//   Step 3: Read the corpus              (Layer 4 - data)
//   Step 4: Segment sentences / tokens   (Layer 4 - data)
//   Step 5: Remove stop words            (Layer 4 - data)
//   Step 6: Estimate the topic model     (Layer 5 - ml)
//   Step 7: Save the model atomically    (Layer 6 - infra)
//
// Each step runs over the whole corpus before the next starts.
// Nothing is written until step 7, so a failure anywhere
// earlier leaves the output path untouched.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::{
    loader::TextReader,
    segmenter::Segmenter,
    stopword_filter::StopWordFilter,
};
use crate::domain::error::Result;
use crate::domain::traits::{Annotator, DocumentSource, ModelTrainer, Persistable};
use crate::infra::stopword_store::StopWordStore;
use crate::ml::model::TopicModel;
use crate::ml::trainer::{LdaParams, LdaTrainer};

/// Bundled sample corpus
pub const DEFAULT_SOURCE: &str = "resources/texts/*";

// ─── Estimation Configuration ────────────────────────────────────────────────
// Everything one run needs. Passed in explicitly so that tests
// (or several runs in one process) can use their own values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Directory or glob pattern of the input texts
    pub source:       String,
    pub language:     String,
    /// Directory holding stopwords_<lang>.txt
    pub resource_dir: PathBuf,
    /// Where the trained model is written
    pub target:       PathBuf,
    pub lda:          LdaParams,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            source:       DEFAULT_SOURCE.to_string(),
            language:     "en".to_string(),
            resource_dir: PathBuf::from("resources"),
            target:       PathBuf::from("target/model.mallet"),
            lda:          LdaParams::default(),
        }
    }
}

// ─── EstimateUseCase ──────────────────────────────────────────────────────────
pub struct EstimateUseCase {
    config: EstimationConfig,
}

impl EstimateUseCase {
    pub fn new(config: EstimationConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline and return the model that was saved
    pub fn execute(&self) -> Result<TopicModel> {
        let cfg = &self.config;

        // ── Step 1: Reject bad K / I before touching any file ─────────────────
        let trainer = LdaTrainer::new(cfg.lda.clone())?;

        // ── Step 2: Stop-word list ────────────────────────────────────────────
        let stopwords = StopWordStore::new(&cfg.resource_dir).load(&cfg.language)?;

        // ── Step 3: Read ──────────────────────────────────────────────────────
        tracing::info!("Reading texts from '{}'", cfg.source);
        let reader   = TextReader::new(&cfg.source, &cfg.language);
        let mut docs = reader.load_all()?;

        // ── Step 4: Segment ───────────────────────────────────────────────────
        let segmenter = Segmenter::new();
        segmenter.process_all(&mut docs)?;
        let n_sentences: usize = docs.iter().map(|d| d.sentences.len()).sum();
        let n_tokens: usize    = docs.iter().map(|d| d.tokens.len()).sum();
        tracing::info!("Segmented into {} sentences, {} tokens", n_sentences, n_tokens);

        // ── Step 5: Stop words ────────────────────────────────────────────────
        let filter = StopWordFilter::new(stopwords);
        filter.process_all(&mut docs)?;
        let n_kept: usize = docs.iter().map(|d| d.kept_tokens().count()).sum();
        tracing::info!("{} of {} tokens kept after stop-word removal", n_kept, n_tokens);

        // ── Step 6: Estimate ──────────────────────────────────────────────────
        tracing::info!(
            "Estimating LDA: {} topics, {} iterations, seed {}",
            cfg.lda.n_topics,
            cfg.lda.n_iterations,
            cfg.lda.random_seed
        );
        let model = trainer.train(&docs)?;

        // ── Step 7: Save ──────────────────────────────────────────────────────
        model.save(&cfg.target)?;
        tracing::info!("Model written to '{}'", cfg.target.display());

        Ok(model)
    }
}
