//! N-gram model, training and generation.
//!
//! - Fixed-order word n-gram model (`NGramModel`)
//! - Per-context continuation counts (`State`)
//! - Parallel training from text files (`trainer`)
//! - Sentence generation (`Generator`)

/// Sentence generation from a trained model.
///
/// Owns the model, the generation settings and a seedable random generator.
pub mod generator;

/// Fixed-order word n-gram model (`n >= 1`).
///
/// Handles sentence ingestion, frequency queries, next-token prediction,
/// model merging and binary persistence.
pub mod ngram_model;

/// Continuation counts of a single context.
///
/// Supports most-frequent and weighted random selection.
pub mod state;

/// Builds a model from `.txt` files on worker threads.
pub mod trainer;

pub use generator::Generator;
pub use ngram_model::{MAX_ORDER, NGramModel};
pub use state::State;
pub use trainer::train;
