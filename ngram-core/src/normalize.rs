use crate::corpus::{START_TOKEN, is_punctuation};

/// Renders generated tokens as a readable sentence.
///
/// - Start tokens are dropped
/// - Tokens are separated by one space, except before `. , ? !`
/// - The first character is uppercased
/// - The standalone word `i` becomes `I`
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> String {
	let mut sentence = String::new();

	for token in tokens.iter().map(|t| t.as_ref()).filter(|t| *t != START_TOKEN) {
		if !sentence.is_empty() && !is_punctuation(token) {
			sentence.push(' ');
		}
		if token == "i" {
			sentence.push('I');
		} else {
			sentence.push_str(token);
		}
	}

	capitalize_first(&sentence)
}

/// Uppercases the first character, UTF-8 aware.
fn capitalize_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
