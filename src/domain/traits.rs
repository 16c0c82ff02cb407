// ============================================================
// Layer 3 — Core Traits (Stage Capabilities)
// ============================================================
// One small trait per pipeline stage. The use case only talks
// to these traits, so any stage can be replaced by another
// implementation without touching the orchestration:
//
//   DocumentSource  — TextReader
//   Annotator       — Segmenter, StopWordFilter
//   ModelTrainer    — LdaTrainer
//   Persistable     — TopicModel
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::document::Document;
use crate::domain::error::Result;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load documents from a source.
pub trait DocumentSource {
    /// Load all documents, in a stable order.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── Annotator ────────────────────────────────────────────────────────────────
/// A stage that adds or updates annotations on one document in place.
pub trait Annotator {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    fn process(&self, doc: &mut Document) -> Result<()>;

    /// Run `process` over every document, in order, stopping at
    /// the first failure.
    fn process_all(&self, docs: &mut [Document]) -> Result<()> {
        for doc in docs.iter_mut() {
            self.process(doc)?;
        }
        tracing::debug!("{} annotated {} documents", self.name(), docs.len());
        Ok(())
    }
}

// ─── ModelTrainer ─────────────────────────────────────────────────────────────
/// Any component that turns an annotated corpus into a trained model.
pub trait ModelTrainer {
    type Model;

    fn train(&self, docs: &[Document]) -> Result<Self::Model>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path
    fn load(path: &Path) -> Result<Self>;
}
