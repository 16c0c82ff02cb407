// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits that describe what the
// pipeline works on: documents, their span annotations, the
// error taxonomy and the per-stage capability traits.
//
// No file I/O and no sampling code lives here.

// A loaded document and its annotations
pub mod document;

// Sentence / Token spans and the covering-unit selector
pub mod annotation;

// PipelineError and the Stage it was raised in
pub mod error;

// Capability traits implemented by the other layers
pub mod traits;
