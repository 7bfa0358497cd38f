use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of generated words after which a sentence is closed with `"."`.
pub const DEFAULT_MAX_TOKENS: usize = 50;

/// How the next token is picked among the continuations of a context.
///
/// # Variants
/// - `MostFrequent`: uniform choice among the continuations tied at the highest count.
/// - `Weighted`: probability proportional to the observed count.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
	#[default]
	MostFrequent,
	Weighted,
}

impl SelectionStrategy {
	pub fn as_str(&self) -> &'static str {
		match self {
			SelectionStrategy::MostFrequent => "most-frequent",
			SelectionStrategy::Weighted => "weighted",
		}
	}
}

impl fmt::Display for SelectionStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SelectionStrategy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"most-frequent" | "most_frequent" | "max" => Ok(Self::MostFrequent),
			"weighted" => Ok(Self::Weighted),
			other => Err(Error::config(format!(
				"unknown strategy '{other}', expected 'most-frequent' or 'weighted'"
			))),
		}
	}
}

/// Parameters of sentence generation.
///
/// # Invariants
/// - `max_tokens >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationConfig {
	/// Continuation selection rule.
	pub strategy: SelectionStrategy,

	/// Maximum number of words in one sentence before it is forcibly closed.
	pub max_tokens: usize,

	/// Seed of the random generator. `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			strategy: SelectionStrategy::default(),
			max_tokens: DEFAULT_MAX_TOKENS,
			seed: None,
		}
	}
}

impl GenerationConfig {
	pub fn validate(&self) -> Result<()> {
		if self.max_tokens == 0 {
			return Err(Error::config("max_tokens must be >= 1"));
		}
		Ok(())
	}
}
