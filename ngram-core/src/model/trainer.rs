use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::ngram_model::NGramModel;
use crate::corpus;
use crate::error::{Error, Result};
use crate::io::{check_text_file, read_text_file};

/// Builds a model of order `n` from a set of plain-text files.
///
/// # Behavior
/// - Every path is validated before any file is read.
/// - Files are split across worker threads (one group per CPU core).
/// - Each worker counts its files into a partial model, sent back over an MPSC channel.
/// - Partial models are merged; merging is order-independent so the result is deterministic.
///
/// # Notes
/// - Each file is segmented on its own: a sentence never spans two files.
///
/// # Errors
/// - `InvalidOrder` if `n` is outside `1..=MAX_ORDER`
/// - `NotTextFile` / `FileNotFound` for the first invalid path
/// - `EmptyModel` if no complete sentence was found in the corpus
pub fn train<P: AsRef<Path>>(paths: &[P], n: usize) -> Result<NGramModel> {
	let mut model = NGramModel::new(n)?;

	let paths: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
	for path in &paths {
		check_text_file(path)?;
	}
	if paths.is_empty() {
		return Err(Error::EmptyModel);
	}

	let workers = num_cpus::get().clamp(1, paths.len());
	let chunk_size = paths.len().div_ceil(workers);

	let (tx, rx) = mpsc::channel();
	let mut handles = Vec::with_capacity(workers);
	for chunk in paths.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<PathBuf> = chunk.to_vec();

		handles.push(thread::spawn(move || {
			// The receiver is only dropped after an error, nothing left to report then
			let _ = tx.send(count_files(&chunk, n));
		}));
	}
	drop(tx);

	for partial in rx.iter() {
		model.merge(&partial?)?;
	}
	for handle in handles {
		handle
			.join()
			.map_err(|_| Error::Worker("a counting thread panicked".to_owned()))?;
	}

	if model.is_empty() {
		return Err(Error::EmptyModel);
	}

	info!(
		"Trained a {}-gram model on {} file(s): {} n-grams, {} distinct",
		n,
		paths.len(),
		model.total(),
		model.distinct()
	);
	Ok(model)
}

/// Counts a group of files into a fresh model.
fn count_files(paths: &[PathBuf], n: usize) -> Result<NGramModel> {
	let mut model = NGramModel::new(n)?;
	for path in paths {
		let text = read_text_file(path)?;
		let tokens = corpus::tokenize(&text);
		debug!("{}: {} tokens", path.display(), tokens.len());
		model.add_tokens(&tokens);
	}
	Ok(model)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn sentences_do_not_span_files() {
		let dir = TempDir::new().unwrap();
		let first = dir.path().join("first.txt");
		let second = dir.path().join("second.txt");
		fs::write(&first, "Dangling words").unwrap();
		fs::write(&second, "Complete one.").unwrap();

		let model = train(&[&first, &second], 2).unwrap();
		assert_eq!(model.count(&["<s>", "complete"]), 1);
		assert_eq!(model.count(&["words", "complete"]), 0);
		assert_eq!(model.total(), 3);
	}

	#[test]
	fn validates_before_reading() {
		let dir = TempDir::new().unwrap();
		let good = dir.path().join("good.txt");
		fs::write(&good, "Fine.").unwrap();
		let bad = dir.path().join("bad.csv");

		assert!(matches!(train(&[&good, &bad], 2), Err(Error::NotTextFile(_))));
	}

	#[test]
	fn empty_corpus_is_an_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("empty.txt");
		fs::write(&path, "no punctuation here").unwrap();
		assert!(matches!(train(&[&path], 3), Err(Error::EmptyModel)));

		let none: [&Path; 0] = [];
		assert!(matches!(train(&none, 3), Err(Error::EmptyModel)));
	}

	#[test]
	fn out_of_range_orders_are_rejected_before_reading() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("c.txt");
		fs::write(&path, "A.").unwrap();

		assert!(matches!(train(&[&path], 0), Err(Error::InvalidOrder(0))));
		assert!(matches!(train(&[&path], 99_999_999_999_999), Err(Error::InvalidOrder(_))));
	}
}
