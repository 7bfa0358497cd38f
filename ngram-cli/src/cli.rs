use std::path::PathBuf;

use clap::Parser;

use ngram_core::{GenerationConfig, MAX_ORDER, SelectionStrategy};
use ngram_core::config::DEFAULT_MAX_TOKENS;

pub const USAGE: &str = "ngram integer1 integer2 textfile1 [textfile2 ...]";

pub const BANNER: &str = "This program generates random sentences using an ngram model \
and an input of corpus texts. Below is the format for running this program:";

/// Learns an n-gram model from plain text files and generates sentences from it.
///
/// With no positional argument the program asks for them interactively.
#[derive(Parser, Debug)]
#[command(name = "ngram", version, about, override_usage = USAGE)]
pub struct Cli {
	/// Size of the n-grams
	#[arg(value_name = "N", value_parser = parse_order, requires = "sentences")]
	pub n: Option<usize>,

	/// Number of sentences to generate
	#[arg(value_name = "M", value_parser = parse_integer)]
	pub sentences: Option<usize>,

	/// Corpus of .txt files
	#[arg(value_name = "FILES")]
	pub files: Vec<PathBuf>,

	/// Skip the confirmation prompt
	#[arg(short, long)]
	pub yes: bool,

	/// Seed of the random generator, for reproducible output
	#[arg(long, env = "NGRAM_SEED")]
	pub seed: Option<u64>,

	/// Next-token selection: most-frequent or weighted
	#[arg(long, env = "NGRAM_STRATEGY", default_value_t = SelectionStrategy::MostFrequent)]
	pub strategy: SelectionStrategy,

	/// Words after which an unfinished sentence is closed
	#[arg(long, env = "NGRAM_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
	pub max_tokens: usize,

	/// Write the trained model to this file
	#[arg(long, value_name = "PATH")]
	pub save: Option<PathBuf>,

	/// Start from a model saved with --save; FILES become optional and are added to it
	#[arg(long, value_name = "PATH")]
	pub model: Option<PathBuf>,
}

impl Cli {
	/// True when the run must ask for N, M and the files on stdin.
	pub fn is_interactive(&self) -> bool {
		self.n.is_none()
	}

	pub fn generation_config(&self) -> GenerationConfig {
		GenerationConfig {
			strategy: self.strategy,
			max_tokens: self.max_tokens,
			seed: self.seed,
		}
	}
}

/// Parses N, which must also be a supported model order.
fn parse_order(value: &str) -> Result<usize, String> {
	let n = parse_integer(value)?;
	if !(1..=MAX_ORDER).contains(&n) {
		return Err(format!("The size of ngrams must be between 1 and {MAX_ORDER}."));
	}
	Ok(n)
}

/// Parses one of the two integer arguments.
fn parse_integer(value: &str) -> Result<usize, String> {
	value
		.trim()
		.parse::<usize>()
		.map_err(|_| "The first two arguments must be integers.".to_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn command_is_well_formed() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_positionals_and_flags() {
		let cli = Cli::try_parse_from([
			"ngram", "3", "2", "a.txt", "b.txt", "--yes", "--seed", "7", "--strategy", "weighted",
		])
		.unwrap();
		assert_eq!(cli.n, Some(3));
		assert_eq!(cli.sentences, Some(2));
		assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
		assert!(cli.yes);
		let config = cli.generation_config();
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.strategy, SelectionStrategy::Weighted);
		assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
	}

	#[test]
	fn non_integer_sizes_are_rejected() {
		let err = Cli::try_parse_from(["ngram", "three", "2", "a.txt"]).unwrap_err();
		assert!(err.to_string().contains("The first two arguments must be integers."));
	}

	#[test]
	fn out_of_range_sizes_are_rejected() {
		for n in ["0", "101", "99999999999999"] {
			let err = Cli::try_parse_from(["ngram", n, "1", "a.txt"]).unwrap_err();
			assert!(err.to_string().contains("between 1 and 100"), "{n}: {err}");
		}
		assert_eq!(Cli::try_parse_from(["ngram", "100", "1", "a.txt"]).unwrap().n, Some(MAX_ORDER));
	}

	#[test]
	fn n_requires_m() {
		assert!(Cli::try_parse_from(["ngram", "3"]).is_err());
	}

	#[test]
	fn no_arguments_means_interactive() {
		let cli = Cli::try_parse_from(["ngram"]).unwrap();
		assert!(cli.is_interactive());
	}
}
