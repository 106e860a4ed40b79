//! Probability distributions over n-grams.
//!
//! A distribution is built once from frequency tables and then only
//! queried. The conditional probability `P(w_n | w_1 .. w_(n-1))` is
//! stored under the n-gram key `"w_1 .. w_(n-1) w_n"`: the probability of
//! `am` given `I` is found under `"I am"`.

/// Good-Turing smoothing with a log-log regression of count frequencies.
pub mod good_turing;

/// Add-one (Laplace) smoothing.
pub mod laplace;

/// Unsmoothed maximum-likelihood estimates.
pub mod mle;

/// Ordinary least squares in log-log space.
pub mod regression;

pub use good_turing::GoodTuringDistribution;
pub use laplace::LaplaceDistribution;
pub use mle::MaximumLikelihoodDistribution;
pub use regression::LogLinearFit;

/// Read-only probability lookup shared by every estimator.
pub trait ProbabilityDistribution {
	/// Returns the probability of `ngram`.
	///
	/// Never fails: grams unseen during training receive the estimator's
	/// fallback probability (possibly 0).
	fn probability(&self, ngram: &str) -> f64;
}

/// Returns the conditioning prefix of an n-gram: all tokens but the last.
///
/// Example: `"I am walking"` → `"I am"`, `"I"` → `""`
pub(crate) fn gram_prefix(ngram: &str) -> String {
	let tokens: Vec<&str> = ngram.split_whitespace().collect();
	match tokens.split_last() {
		Some((_, prefix)) => prefix.join(" "),
		None => String::new(),
	}
}
