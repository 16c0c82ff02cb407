// ============================================================
// Layer 5 — Topic Model Layer
// ============================================================
// Everything that turns annotated documents into an LDA model.
//
//   instances.rs — covering units → bag-of-words instances
//                  plus the shared vocabulary
//
//   sampler.rs   — collapsed Gibbs sampler over the count
//                  tables, seeded for reproducible runs
//
//   trainer.rs   — LdaParams and LdaTrainer, the
//                  ModelTrainer implementation
//
//   model.rs     — TopicModel, the trained artifact
//
// Reference: Blei, Ng & Jordan (2003) Latent Dirichlet Allocation
//            Griffiths & Steyvers (2004) Finding scientific topics

/// Training instances and vocabulary
pub mod instances;

/// Collapsed Gibbs sampling
pub mod sampler;

/// LDA hyperparameters and the trainer
pub mod trainer;

/// The trained topic model
pub mod model;
