use std::sync::LazyLock;

use regex::Regex;

/// Padding token placed before the first word of every sentence.
pub const START_TOKEN: &str = "<s>";

/// Tokens that close a sentence.
pub const END_PUNCTUATION: [&str; 3] = [".", "?", "!"];

/// Every punctuation token kept by the tokenizer.
pub const PUNCTUATION: [&str; 4] = [".", ",", "?", "!"];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
	// Should not panic, the pattern is a literal
	Regex::new(r"\w+|[.,?!]").unwrap()
});

/// Splits text into lowercase tokens.
///
/// Keeps maximal runs of word characters (Unicode letters, digits and `_`)
/// and the single marks `. , ? !`. Everything else is dropped, so
/// `"Don't"` becomes `["don", "t"]`.
pub fn tokenize(text: &str) -> Vec<String> {
	let lower = text.to_lowercase();
	TOKEN_RE
		.find_iter(&lower)
		.map(|m| m.as_str().to_owned())
		.collect()
}

/// Returns true for `.`, `?` and `!`.
pub fn is_sentence_end(token: &str) -> bool {
	END_PUNCTUATION.contains(&token)
}

/// Returns true for `.`, `,`, `?` and `!`.
pub fn is_punctuation(token: &str) -> bool {
	PUNCTUATION.contains(&token)
}
