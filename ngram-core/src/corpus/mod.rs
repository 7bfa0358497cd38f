//! Turning raw text into padded sentences.
//!
//! - `tokenizer`: lowercase words, numbers and `. , ? !`
//! - `sentence`: sentence segmentation and n-gram windows

pub mod sentence;
pub mod tokenizer;

pub use sentence::{ngrams, sentences};
pub use tokenizer::{
	END_PUNCTUATION, PUNCTUATION, START_TOKEN, is_punctuation, is_sentence_end, tokenize,
};
