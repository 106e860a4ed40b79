use std::collections::HashMap;

use super::{ProbabilityDistribution, gram_prefix};
use crate::error::{LmError, Result};
use crate::model::FrequencyTable;

/// Unsmoothed distribution: `P(k) = count(k) / count(prefix(k))`.
///
/// Grams unseen during training get a probability of 0, which makes this
/// distribution unsuitable for perplexity evaluation of new text.
///
/// Every n-gram prefix must have a subgram count. Tables counted by
/// `NGramModel` satisfy this unless a sentence is shorter than `n-2`
/// tokens: its boundary grams are truncated and so are their prefixes.
#[derive(Clone, Debug, Default)]
pub struct MaximumLikelihoodDistribution {
	probabilities: HashMap<String, f64>,
}

impl MaximumLikelihoodDistribution {
	/// Builds the distribution from the n-gram and (n-1)-gram tables of
	/// the same corpus.
	///
	/// # Errors
	/// Returns `MissingPrefix` if an n-gram's prefix has no subgram count.
	pub fn build(ngrams: &FrequencyTable, subgrams: &FrequencyTable) -> Result<Self> {
		let mut probabilities = HashMap::with_capacity(ngrams.len());
		for (ngram, frequency) in ngrams.iter() {
			let prefix = gram_prefix(ngram);
			let prefix_frequency = subgrams.frequency(&prefix);
			if prefix_frequency == 0 {
				return Err(LmError::MissingPrefix { ngram: ngram.to_owned(), prefix });
			}
			probabilities.insert(ngram.to_owned(), frequency as f64 / prefix_frequency as f64);
		}
		Ok(Self { probabilities })
	}
}

impl ProbabilityDistribution for MaximumLikelihoodDistribution {
	fn probability(&self, ngram: &str) -> f64 {
		self.probabilities.get(ngram).copied().unwrap_or(0.0)
	}
}
