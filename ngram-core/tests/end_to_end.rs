//! Integration tests: corpus files in, sentences out.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ngram_core::corpus::is_sentence_end;
use ngram_core::{Error, GenerationConfig, Generator, NGramModel, SelectionStrategy, train};

const PRIDE: &str = "It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife. However little known the \
feelings or views of such a man may be on his first entering a neighbourhood, this \
truth is so well fixed in the minds of the surrounding families, that he is \
considered the rightful property of some one or other of their daughters.";

const FRANKENSTEIN: &str = "You will rejoice to hear that no disaster has accompanied \
the commencement of an enterprise which you have regarded with such evil forebodings. \
I arrived here yesterday, and my first task is to assure my dear sister of my welfare! \
Do you understand this feeling?";

/// Writes the two sample books into a temp dir.
fn corpus() -> (TempDir, Vec<PathBuf>) {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let pride = dir.path().join("pride_and_prejudice.txt");
	let frank = dir.path().join("frankenstein.txt");
	fs::write(&pride, PRIDE).expect("Failed to write corpus");
	fs::write(&frank, FRANKENSTEIN).expect("Failed to write corpus");
	(dir, vec![pride, frank])
}

fn seeded(strategy: SelectionStrategy, seed: u64) -> GenerationConfig {
	GenerationConfig { strategy, max_tokens: 10_000, seed: Some(seed) }
}

#[test]
fn generated_sentences_are_well_formed() {
	let (_dir, files) = corpus();
	let model = train(&files, 3).expect("Training failed");
	let mut generator = Generator::new(model, seeded(SelectionStrategy::MostFrequent, 2024)).unwrap();

	for sentence in generator.generate(25) {
		let first = sentence.chars().next().expect("Empty sentence");
		assert!(!first.is_lowercase(), "{sentence}");
		assert!(sentence.ends_with(['.', '?', '!']), "{sentence}");
		assert!(!sentence.contains("<s>"), "{sentence}");
		assert!(!sentence.contains(" ,") && !sentence.contains(" ."), "{sentence}");
	}
}

#[test]
fn generated_trigrams_come_from_the_corpus() {
	let (_dir, files) = corpus();
	let model = train(&files, 3).unwrap();
	let mut generator = Generator::new(model, seeded(SelectionStrategy::Weighted, 17)).unwrap();

	for _ in 0..25 {
		let tokens = generator.generate_tokens();
		assert!(is_sentence_end(tokens.last().unwrap()));
		// Every step had a known context, so every window was seen during training
		for window in tokens.windows(3) {
			assert!(generator.model().count(window) > 0, "{window:?}");
		}
	}
}

#[test]
fn corpus_order_does_not_change_the_model() {
	let (_dir, files) = corpus();
	let forward = train(&files, 2).unwrap();
	let reversed: Vec<PathBuf> = files.iter().rev().cloned().collect();
	let backward = train(&reversed, 2).unwrap();
	assert_eq!(forward, backward);
}

#[test]
fn saved_model_generates_like_the_trained_one() {
	let (dir, files) = corpus();
	let model = train(&files, 2).unwrap();
	let path = dir.path().join("model.bin");
	model.save(&path).unwrap();

	let loaded = NGramModel::load(&path).unwrap();
	assert_eq!(loaded, model);

	let mut a = Generator::new(model, seeded(SelectionStrategy::Weighted, 8)).unwrap();
	let mut b = Generator::new(loaded, seeded(SelectionStrategy::Weighted, 8)).unwrap();
	assert_eq!(a.generate(5), b.generate(5));
}

#[test]
fn corrupt_model_file_is_rejected() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.bin");
	fs::write(&path, [0xff, 0xff, 0xff]).unwrap();
	assert!(matches!(NGramModel::load(&path), Err(Error::Serialization(_))));
	assert!(matches!(NGramModel::load(dir.path().join("absent.bin")), Err(Error::Read { .. })));
}

#[test]
fn missing_file_reports_the_original_message() {
	let (dir, mut files) = corpus();
	files.push(dir.path().join("missing.txt"));
	let err = train(&files, 2).unwrap_err();
	assert!(matches!(err, Error::FileNotFound(_)));
	assert!(err.to_string().ends_with("missing.txt' not found."));
}
