//! N-gram language model learning and sentence generation.
//!
//! This crate learns a word-level n-gram model from plain-text corpora and
//! generates new sentences from it:
//! - Tokenization into lowercase words, numbers and `. , ? !`
//! - Sentence segmentation with `<s>` start padding
//! - Frequency counting, parallel over files
//! - Most-frequent or weighted next-token selection
//! - Sentence normalization (spacing and capitalization)
//! - Compact binary persistence of trained models

/// Generation settings (`GenerationConfig`, `SelectionStrategy`).
pub mod config;

/// Tokenizer and sentence segmentation.
pub mod corpus;

/// Error type shared by the whole crate.
pub mod error;

/// Core n-gram model, training and generation logic.
pub mod model;

/// Rendering of generated tokens as a sentence.
pub mod normalize;

/// File checks and reads.
///
/// Only the corpus path check is exposed.
pub(crate) mod io;

pub use config::{GenerationConfig, SelectionStrategy};
pub use error::{Error, Result};
pub use io::check_text_file;
pub use model::{Generator, MAX_ORDER, NGramModel, train};
pub use normalize::normalize;
