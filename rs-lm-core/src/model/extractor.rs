/// Extracts every n-gram of `tokens` with a window of `window_size`.
///
/// The sentence is closed by one `end_symbol`, then:
/// - `window_size - 1` boundary grams are produced first, from the most
///   padded (`window_size - 1` start symbols) to the least padded (one start
///   symbol). Each takes as many leading tokens as fit, so a sentence shorter
///   than the window yields shorter grams instead of none.
/// - Every contiguous slice of `window_size` tokens follows, in order.
///
/// Example with `window_size = 3`:
/// `I am walking .` → `_START_ _START_ I`, `_START_ I am`, `I am walking`,
/// `am walking .`, `walking . _END_`
///
/// Grams are returned in their canonical form: tokens joined by one space.
pub fn extract_ngrams<S: AsRef<str>>(
	tokens: &[S],
	window_size: usize,
	start_symbol: &str,
	end_symbol: &str,
) -> Vec<String> {
	let mut line: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
	line.push(end_symbol);

	let mut ngrams = Vec::new();
	if window_size == 0 {
		return ngrams;
	}

	for padding in (1..window_size).rev() {
		let taken = (window_size - padding).min(line.len());
		let mut gram: Vec<&str> = vec![start_symbol; padding];
		gram.extend_from_slice(&line[..taken]);
		ngrams.push(gram.join(" "));
	}

	if line.len() >= window_size {
		for window in line.windows(window_size) {
			ngrams.push(window.join(" "));
		}
	}

	ngrams
}

/// Returns the context preceding the first token of a sentence: `window_size - 1`
/// start symbols.
///
/// Example with `window_size = 3`: `_START_ _START_`
pub fn start_context(window_size: usize, start_symbol: &str) -> String {
	vec![start_symbol; window_size.saturating_sub(1)].join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	const START: &str = "_START_";
	const END: &str = "_END_";

	fn extract(sentence: &str, n: usize) -> Vec<String> {
		let tokens: Vec<&str> = sentence.split_whitespace().collect();
		extract_ngrams(&tokens, n, START, END)
	}

	#[test]
	fn trigrams_of_a_full_sentence() {
		assert_eq!(
			extract("I am walking .", 3),
			vec!["_START_ _START_ I", "_START_ I am", "I am walking", "am walking .", "walking . _END_"]
		);
	}

	#[test]
	fn bigrams_of_a_full_sentence() {
		assert_eq!(
			extract("I am walking .", 2),
			vec!["_START_ I", "I am", "am walking", "walking .", ". _END_"]
		);
	}

	#[test]
	fn short_sentence_reuses_its_tokens_in_every_boundary_gram() {
		assert_eq!(extract("I", 3), vec!["_START_ _START_ I", "_START_ I _END_"]);
		assert_eq!(
			extract("I", 4),
			vec!["_START_ _START_ _START_ I", "_START_ _START_ I _END_", "_START_ I _END_"]
		);
	}

	#[test]
	fn empty_sentence_yields_only_boundary_grams() {
		assert_eq!(extract("", 2), vec!["_START_ _END_"]);
		assert_eq!(extract("", 3), vec!["_START_ _START_ _END_", "_START_ _END_"]);
	}

	#[test]
	fn gram_count_is_padded_length_or_boundary_count() {
		for sentence in ["", "I", "I do .", "I am walking .", "a b c d e f g"] {
			let padded_len = sentence.split_whitespace().count() + 1;
			for n in 2..=5 {
				assert_eq!(extract(sentence, n).len(), padded_len.max(n - 1), "{:?} with n={}", sentence, n);
			}
		}
	}

	#[test]
	fn unigram_window_has_no_boundary_prefix() {
		assert_eq!(extract("I do", 1), vec!["I", "do", "_END_"]);
	}

	#[test]
	fn start_context_repeats_the_start_symbol() {
		assert_eq!(start_context(2, START), "_START_");
		assert_eq!(start_context(3, START), "_START_ _START_");
		assert_eq!(start_context(1, START), "");
	}

	#[test]
	fn zero_window_is_empty() {
		assert!(extract("I do", 0).is_empty());
	}
}
