use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading a corpus, building a model or generating from it.
#[derive(Debug, Error)]
pub enum Error {
	#[error("Error: '{}' is not a valid .txt file.", .0.display())]
	NotTextFile(PathBuf),

	#[error("Error: '{}' not found.", .0.display())]
	FileNotFound(PathBuf),

	#[error("Failed to read '{}': {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Failed to write '{}': {source}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("IO error: {0}")]
	Io(#[from] io::Error),

	#[error("n-gram size must be between 1 and {max}, got {0}", max = crate::model::ngram_model::MAX_ORDER)]
	InvalidOrder(usize),

	#[error("N mismatch: {expected} != {found}")]
	OrderMismatch { expected: usize, found: usize },

	#[error("Context mismatch while merging states")]
	ContextMismatch,

	#[error("Corrupt model file: {0}")]
	CorruptModel(String),

	#[error("The corpus contains no complete sentence of at least one word")]
	EmptyModel,

	#[error("Invalid configuration: {0}")]
	Config(String),

	#[error("Model serialization error: {0}")]
	Serialization(#[from] postcard::Error),

	#[error("Worker thread failed: {0}")]
	Worker(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub fn config<S: Into<String>>(msg: S) -> Self {
		Error::Config(msg.into())
	}
}
