use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GenerationConfig;
use crate::corpus::{START_TOKEN, is_sentence_end};
use crate::error::{Error, Result};
use crate::model::ngram_model::NGramModel;
use crate::normalize::normalize;

/// Token appended when a sentence reaches `max_tokens` without closing itself.
const FORCED_END: &str = ".";

/// High-level sentence generator over a trained n-gram model.
///
/// # Responsibilities
/// - Own the model, the generation settings and the random generator
/// - Grow a sentence one token at a time from its last `n-1` tokens
/// - Fall back to a random continuation when a context was never observed
/// - Render the result as a normalized sentence
///
/// A seeded generator always yields the same sentences for the same model.
#[derive(Debug)]
pub struct Generator {
	model: NGramModel,
	config: GenerationConfig,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator.
	///
	/// # Errors
	/// - `Config` if the configuration is invalid
	/// - `EmptyModel` if the model has no n-gram to draw from
	pub fn new(model: NGramModel, config: GenerationConfig) -> Result<Self> {
		config.validate()?;
		if model.is_empty() {
			return Err(Error::EmptyModel);
		}

		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		};

		Ok(Self { model, config, rng })
	}

	pub fn model(&self) -> &NGramModel {
		&self.model
	}

	/// Generates the raw tokens of one sentence, start tokens included.
	///
	/// # Behavior
	/// - Starts from `n-1` start tokens.
	/// - Picks each next token from the continuations of the last `n-1` tokens.
	/// - Unknown context: uses the last token of a random n-gram.
	/// - Stops after a `.`, `?` or `!`, or appends `"."` after `max_tokens` words.
	pub fn generate_tokens(&mut self) -> Vec<String> {
		let n = self.model.order();
		let mut sentence: Vec<String> = vec![START_TOKEN.to_owned(); n - 1];
		let mut words = 0;

		loop {
			if words >= self.config.max_tokens {
				warn!("Sentence reached {} tokens without punctuation, closing it", words);
				sentence.push(FORCED_END.to_owned());
				break;
			}

			let context = self.model.context_of(&sentence);
			let next = match self.model.next_token(&context, self.config.strategy, &mut self.rng) {
				Some(token) => token,
				None => {
					debug!("Unknown context {:?}, using a random continuation", context);
					// `new` guarantees a non-empty model
					self.model.random_continuation(&mut self.rng).unwrap_or(FORCED_END)
				}
			};

			sentence.push(next.to_owned());
			words += 1;

			if is_sentence_end(next) {
				break;
			}
		}

		sentence
	}

	/// Generates one normalized sentence.
	pub fn generate_sentence(&mut self) -> String {
		let tokens = self.generate_tokens();
		normalize(&tokens)
	}

	/// Generates `count` normalized sentences.
	pub fn generate(&mut self, count: usize) -> Vec<String> {
		(0..count).map(|_| self.generate_sentence()).collect()
	}
}
