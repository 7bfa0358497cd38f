use super::tokenizer::{START_TOKEN, is_sentence_end};

/// Groups a token stream into sentences padded with `n - 1` start tokens.
///
/// A sentence is closed by `.`, `?` or `!`, which stays as its last token.
/// Sentences without a single real token (`"..."`) are dropped, and so are
/// the tokens after the last closing mark.
pub fn sentences<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<Vec<String>> {
	let padding = n.saturating_sub(1);
	let fresh = || vec![START_TOKEN.to_owned(); padding];

	let mut result = Vec::new();
	let mut current = fresh();

	for token in tokens {
		let token = token.as_ref();
		if is_sentence_end(token) {
			if current.len() > padding {
				current.push(token.to_owned());
				result.push(std::mem::replace(&mut current, fresh()));
			} else {
				current = fresh();
			}
		} else {
			current.push(token.to_owned());
		}
	}

	result
}

/// Returns every window of exactly `n` tokens.
///
/// Empty when the sentence is shorter than `n` or `n` is zero.
pub fn ngrams(sentence: &[String], n: usize) -> impl Iterator<Item = &[String]> {
	let windows = if n == 0 || sentence.len() < n { None } else { Some(sentence.windows(n)) };
	windows.into_iter().flatten()
}
