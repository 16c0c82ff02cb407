// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the stages together. This layer decides the order
// things happen in and nothing else: no segmentation rules,
// no sampling maths, no file formats.

// The estimation pipeline: read → segment → filter → train → save
pub mod estimate_use_case;
