// ============================================================
// Layer 4 — Data Layer
// ============================================================
// The three text-processing stages that run before training:
//
//   loader.rs          — TextReader: files → Documents
//   segmenter.rs       — Sentence and Token spans
//   stopword_filter.rs — marks stop-word tokens as removed

/// Reads a directory or glob of text files
pub mod loader;

/// UAX #29 sentence and word segmentation
pub mod segmenter;

/// Stop-word set and filter
pub mod stopword_filter;
