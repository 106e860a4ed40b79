use std::path::Path;

use crate::distribution::ProbabilityDistribution;
use crate::error::{LmError, Result};
use crate::io::read_lines;
use crate::model::{ModelConfig, extract_ngrams, tokenize};

/// Computes the log-perplexity of a held-out corpus.
///
/// Every line is split into n-grams exactly as during training (boundary
/// markers included) and `ln P(gram)` is summed over the whole corpus.
/// The normalizing token count of a line is its number of grams minus the
/// `n-1` boundary prefixes. The result is `-(sum of logs) / token count`.
///
/// # Errors
/// - the configuration's own errors (e.g. `InvalidWindowSize`)
/// - `ZeroProbability` if a gram has no probability mass (use a smoothed
///   distribution unless training covers every held-out gram)
/// - `EmptyCorpus` if the token count is zero
pub fn log_perplexity<D, I, S>(lines: I, distribution: &D, config: &ModelConfig) -> Result<f64>
where
	D: ProbabilityDistribution + ?Sized,
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	config.validate()?;
	let n = config.window_size();
	let mut log_sum = 0.0;
	let mut token_count = 0usize;

	for line in lines {
		let tokens = tokenize(line.as_ref());
		let ngrams = extract_ngrams(&tokens, n, config.start_marker(), config.end_marker());
		for ngram in &ngrams {
			let probability = distribution.probability(ngram);
			if probability.is_nan() || probability <= 0.0 {
				return Err(LmError::ZeroProbability(ngram.clone()));
			}
			log_sum += probability.ln();
		}
		token_count += ngrams.len().saturating_sub(n - 1);
	}

	if token_count == 0 {
		return Err(LmError::EmptyCorpus);
	}

	let result = -log_sum / token_count as f64;
	log::debug!("Log-perplexity {:.6} over {} tokens", result, token_count);
	Ok(result)
}

/// Computes the log-perplexity of every line of a corpus file.
pub fn log_perplexity_from_file<D, P>(filepath: P, distribution: &D, config: &ModelConfig) -> Result<f64>
where
	D: ProbabilityDistribution + ?Sized,
	P: AsRef<Path>,
{
	let lines = read_lines(&filepath)?;
	log_perplexity(&lines, distribution, config)
}
