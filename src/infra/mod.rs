// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-backed concerns shared by the other layers:
//
//   stopword_store.rs — loads resources/stopwords_<lang>.txt
//                       into a StopWordSet
//
//   model_store.rs    — Persistable for TopicModel: JSON,
//                       written atomically via a temp file
//                       and rename
//
// Reference: Rust Book §9 (Error Handling)

/// Stop-word list loading
pub mod stopword_store;

/// Topic model save / load
pub mod model_store;
