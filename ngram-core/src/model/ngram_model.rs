use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::State;
use crate::config::SelectionStrategy;
use crate::corpus::{self, START_TOKEN};
use crate::error::{Error, Result};
use crate::io::{read_bytes, write_bytes};

/// Largest accepted order. Every sentence is padded with `n-1` start tokens,
/// so the order bounds the memory taken by a single sentence.
pub const MAX_ORDER: usize = 100;

/// Represents an n-gram model over word tokens.
///
/// The `NGramModel` stores one `State` per observed context of `n-1` tokens
/// and the number of n-gram occurrences seen overall, from which relative
/// frequencies are derived.
///
/// # Responsibilities
/// - Build the model from tokenized, sentence-padded text
/// - Predict the next token given a context
/// - Merge with another model of the same order `n`
/// - Save to and load from a compact binary file
///
/// # Invariants
/// - `1 <= n <= MAX_ORDER` (for `n == 1` the only context is empty)
/// - Each state in `states` corresponds to a unique context of length `n-1`
/// - `total` equals the sum of every transition count
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NGramModel {
	/// The order of the model (number of tokens in the n-gram)
	n: usize,

	/// Mapping from a context (length n-1) to its corresponding state
	states: BTreeMap<Vec<String>, State>,

	/// Number of n-gram occurrences recorded
	total: usize,
}

impl NGramModel {
	/// Creates a new empty model of order `n`.
	///
	/// # Errors
	/// Returns `Error::InvalidOrder` if `n == 0` or `n > MAX_ORDER`.
	pub fn new(n: usize) -> Result<Self> {
		if !(1..=MAX_ORDER).contains(&n) {
			return Err(Error::InvalidOrder(n));
		}
		Ok(Self { n, states: BTreeMap::new(), total: 0 })
	}

	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of n-gram occurrences recorded.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-grams.
	pub fn distinct(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// The context a model of this order uses for prediction: the last `n-1` tokens.
	///
	/// Shorter sequences are left-padded with start tokens.
	pub fn context_of<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
		let width = self.n - 1;
		let skip = tokens.len().saturating_sub(width);
		let mut context: Vec<String> = vec![START_TOKEN.to_owned(); width.saturating_sub(tokens.len())];
		context.extend(tokens[skip..].iter().map(|t| t.as_ref().to_owned()));
		context
	}

	/// Tokenizes raw text and records all its n-grams.
	pub fn add_text(&mut self, text: &str) {
		let tokens = corpus::tokenize(text);
		self.add_tokens(&tokens);
	}

	/// Segments a token stream into sentences and records all their n-grams.
	pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
		for sentence in corpus::sentences(tokens, self.n) {
			for ngram in corpus::ngrams(&sentence, self.n) {
				self.add_ngram(ngram);
			}
		}
	}

	/// Records one n-gram. `ngram.len()` must equal `n`.
	fn add_ngram(&mut self, ngram: &[String]) {
		let (context, next) = ngram.split_at(self.n - 1);
		if let Some(state) = self.states.get_mut(context) {
			state.add_transition(&next[0]);
		} else {
			let mut state = State::new(context);
			state.add_transition(&next[0]);
			self.states.insert(context.to_vec(), state);
		}
		self.total += 1;
	}

	/// Number of occurrences of a full n-gram. Zero for unknown or mis-sized n-grams.
	pub fn count<S: AsRef<str>>(&self, ngram: &[S]) -> usize {
		if ngram.len() != self.n {
			return 0;
		}
		let context: Vec<String> = ngram[..self.n - 1].iter().map(|t| t.as_ref().to_owned()).collect();
		self.states
			.get(&context)
			.map(|state| state.count(ngram[self.n - 1].as_ref()))
			.unwrap_or(0)
	}

	/// Relative frequency of an n-gram: its count over the total number of n-grams.
	pub fn frequency<S: AsRef<str>>(&self, ngram: &[S]) -> f64 {
		if self.total == 0 {
			return 0.0;
		}
		self.count(ngram) as f64 / self.total as f64
	}

	/// Iterates over every distinct n-gram with its count.
	pub fn iter(&self) -> impl Iterator<Item = (Vec<String>, usize)> + '_ {
		self.states.values().flat_map(|state| {
			state.transitions().map(move |(next, count)| {
				let mut ngram = state.key().to_vec();
				ngram.push(next.to_owned());
				(ngram, count)
			})
		})
	}

	/// Picks the token that follows `context`.
	///
	/// Returns `None` if the context was never observed.
	pub fn next_token<R: Rng + ?Sized>(
		&self,
		context: &[String],
		strategy: SelectionStrategy,
		rng: &mut R,
	) -> Option<&str> {
		self.states.get(context)?.choose(strategy, rng)
	}

	/// Returns the last token of an n-gram chosen uniformly among distinct n-grams.
	///
	/// Returns `None` if the model is empty.
	pub fn random_continuation<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let distinct = self.distinct();
		if distinct == 0 {
			return None;
		}
		let index = rng.random_range(0..distinct);
		self.states
			.values()
			.flat_map(|state| state.transitions().map(|(next, _)| next))
			.nth(index)
	}

	/// Merges another model into this one.
	///
	/// # Errors
	/// Returns `Error::OrderMismatch` if the orders differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.n != other.n {
			return Err(Error::OrderMismatch { expected: self.n, found: other.n });
		}

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}
		self.total += other.total;

		Ok(())
	}

	/// Serializes the model with `postcard` and writes it to `path`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let bytes = postcard::to_stdvec(self)?;
		write_bytes(path, &bytes)
	}

	/// Loads a model written by [`NGramModel::save`].
	///
	/// # Errors
	/// - `Read` / `Serialization` on I/O errors or undecodable data
	/// - `InvalidOrder` if the stored order is out of range
	/// - `CorruptModel` if the stored counts break the model invariants
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let bytes = read_bytes(path)?;
		let model: Self = postcard::from_bytes(&bytes)?;
		model.check()?;
		Ok(model)
	}

	/// Verifies the invariants of a decoded model.
	fn check(&self) -> Result<()> {
		if !(1..=MAX_ORDER).contains(&self.n) {
			return Err(Error::InvalidOrder(self.n));
		}
		for (key, state) in &self.states {
			if key.len() != self.n - 1 || state.key() != key.as_slice() {
				return Err(Error::CorruptModel(format!("context {key:?} does not match order {}", self.n)));
			}
			if state.is_empty() || state.transitions().any(|(_, count)| count == 0) {
				return Err(Error::CorruptModel(format!("context {key:?} has no positive count")));
			}
		}
		let counted: usize = self.states.values().map(State::total).sum();
		if counted != self.total {
			return Err(Error::CorruptModel(format!("total {} but {} n-grams counted", self.total, counted)));
		}
		Ok(())
	}
}
