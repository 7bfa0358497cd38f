use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use serde::{Deserialize, Serialize};

use crate::config::SelectionStrategy;
use crate::error::{Error, Result};

/// Represents a context in an n-gram model.
///
/// A `State` corresponds to a fixed (n-1)-token context (`key`) and stores
/// every token observed right after it.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
///
/// Transitions are kept ordered so that a seeded generator is reproducible.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
	/// The (n-1) preceding tokens.
	key: Vec<String>,
	/// Outgoing transitions indexed by the next token.
	/// Example: { "." => 42, "and" => 3 }
	transitions: BTreeMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given context.
	pub fn new(key: &[String]) -> Self {
		Self {
			key: key.to_vec(),
			transitions: BTreeMap::new(),
		}
	}

	pub fn key(&self) -> &[String] {
		&self.key
	}

	/// Records an occurrence of a transition toward `next`.
	pub fn add_transition(&mut self, next: &str) {
		*self.transitions.entry(next.to_owned()).or_insert(0) += 1;
	}

	/// Number of times `next` followed this context.
	pub fn count(&self, next: &str) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Sum of all transition counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(token, count)| (token.as_str(), *count))
	}

	/// Returns every continuation tied at the highest count.
	pub fn most_frequent(&self) -> Vec<&str> {
		let max = match self.transitions.values().max() {
			Some(max) => *max,
			None => return Vec::new(),
		};
		self.transitions
			.iter()
			.filter(|(_, count)| **count == max)
			.map(|(token, _)| token.as_str())
			.collect()
	}

	/// Picks the next token according to `strategy`.
	///
	/// Returns `None` if the state has no transitions.
	pub fn choose<R: Rng + ?Sized>(&self, strategy: SelectionStrategy, rng: &mut R) -> Option<&str> {
		match strategy {
			SelectionStrategy::MostFrequent => {
				let best = self.most_frequent();
				best.choose(rng).copied()
			}
			SelectionStrategy::Weighted => self.choose_weighted(rng),
		}
	}

	/// Weighted random sampling, probability proportional to the count.
	///
	/// Performs an O(n) scan with a cumulative subtraction to select a bucket.
	fn choose_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (token, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(token.as_str());
			}
			r -= occurrence;
		}

		// Unreachable while counts sum to `total`
		self.transitions.keys().next_back().map(String::as_str)
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same context. Counts are summed.
	///
	/// # Errors
	/// Returns `Error::ContextMismatch` if the keys differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.key != other.key {
			return Err(Error::ContextMismatch);
		}

		for (token, occurrence) in &other.transitions {
			*self.transitions.entry(token.clone()).or_insert(0) += *occurrence;
		}

		Ok(())
	}
}
