use std::collections::HashMap;

use super::{ProbabilityDistribution, gram_prefix};
use crate::error::{LmError, Result};
use crate::model::FrequencyTable;

/// Add-one smoothed distribution.
///
/// `P(k) = (count(k) + 1) / (count(prefix(k)) + V)` for seen grams and
/// `1 / (count(prefix(k)) + V)` for unseen ones, `V` being the vocabulary
/// size. The subgram table is kept so unseen grams can be answered.
///
/// An unseen prefix is counted as 0, both while building and while
/// querying, so every continuation of it gets `1 / V`. A trained gram
/// whose prefix was never counted (the boundary gram of an empty sentence
/// in a trigram model) gets `(count + 1) / V`. Summed over all unseen
/// prefixes this can exceed the mass a proper distribution allows; the
/// approximation is kept as is since published perplexities depend on it.
#[derive(Clone, Debug)]
pub struct LaplaceDistribution {
	probabilities: HashMap<String, f64>,
	subgrams: FrequencyTable,
	vocabulary_size: usize,
}

impl LaplaceDistribution {
	/// Builds the distribution from the n-gram and (n-1)-gram tables of
	/// the same corpus.
	///
	/// The subgram table is moved into the distribution; clone it first if
	/// the caller still needs it.
	///
	/// # Errors
	/// Returns `InvalidVocabularySize` if `vocabulary_size` is 0.
	pub fn build(ngrams: &FrequencyTable, subgrams: FrequencyTable, vocabulary_size: usize) -> Result<Self> {
		if vocabulary_size == 0 {
			return Err(LmError::InvalidVocabularySize(vocabulary_size));
		}

		let mut probabilities = HashMap::with_capacity(ngrams.len());
		for (ngram, frequency) in ngrams.iter() {
			let prefix_frequency = subgrams.frequency(&gram_prefix(ngram));
			let probability = (frequency + 1) as f64 / (prefix_frequency + vocabulary_size) as f64;
			probabilities.insert(ngram.to_owned(), probability);
		}

		Ok(Self { probabilities, subgrams, vocabulary_size })
	}

	pub fn vocabulary_size(&self) -> usize {
		self.vocabulary_size
	}

	/// Returns the subgram table used for unseen grams.
	pub fn subgrams(&self) -> &FrequencyTable {
		&self.subgrams
	}
}

impl ProbabilityDistribution for LaplaceDistribution {
	fn probability(&self, ngram: &str) -> f64 {
		if let Some(probability) = self.probabilities.get(ngram) {
			return *probability;
		}
		let prefix = gram_prefix(ngram);
		let prefix_frequency = self.subgrams.frequency(&prefix);
		if prefix_frequency == 0 {
			log::trace!("Laplace fallback for unseen prefix '{}'", prefix);
		}
		1.0 / (prefix_frequency + self.vocabulary_size) as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::distribution::fixtures;

	fn laplace() -> LaplaceDistribution {
		let subgrams = fixtures::subgrams();
		let vocabulary_size = subgrams.len();
		LaplaceDistribution::build(&fixtures::ngrams(), subgrams, vocabulary_size).unwrap()
	}

	#[test]
	fn seen_gram_gets_one_extra_count() {
		assert!((laplace().probability("I am") - 2.0 / 8.0).abs() < 1e-12);
	}

	#[test]
	fn unseen_gram_with_unseen_prefix_gets_one_over_vocabulary() {
		assert!((laplace().probability("blah do") - 1.0 / 6.0).abs() < 1e-12);
	}

	#[test]
	fn unseen_gram_with_seen_prefix_uses_prefix_count() {
		assert!((laplace().probability("am do") - 1.0 / 7.0).abs() < 1e-12);
	}

	#[test]
	fn every_gram_has_positive_mass() {
		let laplace = laplace();
		for ngram in ["I am", "am do", "blah do", "x y"] {
			assert!(laplace.probability(ngram) > 0.0);
		}
	}

	#[test]
	fn trained_gram_with_uncounted_prefix_counts_it_as_zero() {
		let ngrams: FrequencyTable = [("blah blah", 3)].into_iter().collect();
		let laplace = LaplaceDistribution::build(&ngrams, fixtures::subgrams(), 6).unwrap();
		assert!((laplace.probability("blah blah") - 4.0 / 6.0).abs() < 1e-12);
	}

	#[test]
	fn keeps_the_given_subgram_table() {
		let laplace = laplace();
		assert_eq!(laplace.subgrams(), &fixtures::subgrams());
		assert_eq!(laplace.vocabulary_size(), 6);
	}

	#[test]
	fn zero_vocabulary_is_rejected() {
		let err = LaplaceDistribution::build(&fixtures::ngrams(), fixtures::subgrams(), 0).unwrap_err();
		assert!(matches!(err, LmError::InvalidVocabularySize(0)));
	}
}
