use std::collections::{BTreeMap, HashMap};

use super::ProbabilityDistribution;
use super::regression::LogLinearFit;
use crate::error::{LmError, Result};
use crate::model::FrequencyTable;

/// Critical value of the 95% confidence interval used by the switchover.
const CONFIDENCE_FACTOR: f64 = 1.96;

/// Good-Turing smoothed distribution.
///
/// Built from n-gram counts only. A fixed share of the probability mass,
/// `N_1 / total`, is reserved for unseen grams; the remaining mass is
/// spread over seen grams according to their adjusted counts `r*`.
///
/// The adjusted counts come from two estimators:
/// - the Turing estimate `x = (r+1) N_(r+1) / N_r`
/// - a regression estimate `y = (r+1) S(r+1) / S(r)`, `S` being a line
///   fitted in log-log space to the averaged count frequencies
///
/// `x` is used for small counts while it stays within the confidence
/// interval of `y`. From the first count where it does not (or where
/// `r+1` was never observed), `y` is used for that count and all larger
/// ones.
#[derive(Clone, Debug)]
pub struct GoodTuringDistribution {
	probabilities: HashMap<String, f64>,

	/// `r` → number of distinct grams seen exactly `r` times.
	frequency_of_frequencies: BTreeMap<usize, usize>,

	/// `r` → adjusted count `r*`.
	smoothed_counts: BTreeMap<usize, f64>,

	fit: LogLinearFit,

	/// Probability returned for every unseen gram.
	unseen_mass: f64,
}

impl GoodTuringDistribution {
	/// Builds the distribution from an n-gram table.
	///
	/// # Errors
	/// - `EmptyTable` if no gram was counted
	/// - `DegenerateRegression` if the log-log fit has no unique solution,
	///   e.g. every gram shares the same count
	pub fn build(ngrams: &FrequencyTable) -> Result<Self> {
		if ngrams.is_empty() {
			return Err(LmError::EmptyTable);
		}

		let frequency_of_frequencies = ngrams.frequency_of_frequencies();
		let total_count = ngrams.total() as f64;
		let singletons = frequency_of_frequencies.get(&1).copied().unwrap_or(0);
		let unseen_mass = singletons as f64 / total_count;

		let fit = LogLinearFit::fit(&averaged_frequencies(&frequency_of_frequencies))?;
		let smoothed_counts = smoothed_counts(&frequency_of_frequencies, &fit);

		let total_mass: f64 = frequency_of_frequencies
			.iter()
			.map(|(r, n_r)| *n_r as f64 * smoothed_counts[r])
			.sum();
		if !(total_mass.is_finite() && total_mass > 0.0) {
			return Err(LmError::DegenerateRegression(format!("invalid smoothed mass {}", total_mass)));
		}

		let seen_mass = 1.0 - unseen_mass;
		let probabilities = ngrams
			.iter()
			.map(|(ngram, r)| (ngram.to_owned(), seen_mass * smoothed_counts[&r] / total_mass))
			.collect();

		log::info!(
			"Built Good-Turing distribution: {} grams, {} distinct counts, slope {:.4}, unseen mass {:.6}",
			ngrams.len(),
			frequency_of_frequencies.len(),
			fit.slope,
			unseen_mass
		);

		Ok(Self { probabilities, frequency_of_frequencies, smoothed_counts, fit, unseen_mass })
	}

	/// Probability mass shared by every unseen gram (`N_1 / total`).
	pub fn unseen_mass(&self) -> f64 {
		self.unseen_mass
	}

	/// Adjusted count `r*` of an observed count `r`.
	pub fn smoothed_count(&self, r: usize) -> Option<f64> {
		self.smoothed_counts.get(&r).copied()
	}

	/// Number of distinct grams observed exactly `r` times.
	pub fn frequency_of_frequency(&self, r: usize) -> usize {
		self.frequency_of_frequencies.get(&r).copied().unwrap_or(0)
	}

	/// Line fitted through `ln Z_r = slope * ln r + intercept`.
	pub fn fit(&self) -> LogLinearFit {
		self.fit
	}
}

impl ProbabilityDistribution for GoodTuringDistribution {
	fn probability(&self, ngram: &str) -> f64 {
		self.probabilities.get(ngram).copied().unwrap_or(self.unseen_mass)
	}
}

/// Averages each `N_r` over the gap between its neighbouring counts.
///
/// `Z_r = 2 N_r / (t - q)` where `q` is the previous observed count (0
/// for the smallest) and `t` the next one (`2r - q` for the largest).
/// Returns `(r, Z_r)` points in ascending `r`.
fn averaged_frequencies(frequency_of_frequencies: &BTreeMap<usize, usize>) -> Vec<(f64, f64)> {
	let counts: Vec<(usize, usize)> = frequency_of_frequencies.iter().map(|(r, n)| (*r, *n)).collect();
	let mut points = Vec::with_capacity(counts.len());

	for (i, (r, n_r)) in counts.iter().enumerate() {
		let r = *r as f64;
		let q = if i == 0 { 0.0 } else { counts[i - 1].0 as f64 };
		let t = match counts.get(i + 1) {
			Some((next, _)) => *next as f64,
			None => 2.0 * r - q,
		};
		points.push((r, 2.0 * *n_r as f64 / (t - q)));
	}

	points
}

/// Computes `r*` for every observed count, ascending.
///
/// The Turing estimate is kept while it stays within the confidence
/// interval of the regression estimate. Once it leaves it, or once `r+1`
/// is unobserved, the regression estimate is used from then on.
pub(crate) fn smoothed_counts(
	frequency_of_frequencies: &BTreeMap<usize, usize>,
	fit: &LogLinearFit,
) -> BTreeMap<usize, f64> {
	let mut result = BTreeMap::new();
	let mut use_turing = true;

	for (&r, &n_r) in frequency_of_frequencies {
		let next = (r + 1) as f64;
		let regression = next * fit.predict(next) / fit.predict(r as f64);

		if use_turing {
			if let Some(&n_next) = frequency_of_frequencies.get(&(r + 1)) {
				let n_r = n_r as f64;
				let n_next = n_next as f64;
				let turing = next * n_next / n_r;
				let half_width = CONFIDENCE_FACTOR * (next * next * n_next / (n_r * n_r) * (1.0 + n_next / n_r)).sqrt();
				if (turing - regression).abs() <= half_width {
					result.insert(r, turing);
					continue;
				}
			}
			log::debug!("Good-Turing switches to regression estimates at r={}", r);
			use_turing = false;
		}

		result.insert(r, regression);
	}

	result
}
