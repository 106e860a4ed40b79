use crate::error::{LmError, Result};

/// Straight line `ln(y) = slope * ln(x) + intercept` fitted by ordinary
/// least squares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogLinearFit {
	pub slope: f64,
	pub intercept: f64,
}

impl LogLinearFit {
	/// Fits the line through `(ln x, ln y)` for every point.
	///
	/// # Errors
	/// Returns `DegenerateRegression` if:
	/// - fewer than two points are given
	/// - a coordinate is not strictly positive
	/// - every `x` is equal (singular system)
	/// - the coefficients are not finite
	pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
		if points.len() < 2 {
			return Err(LmError::DegenerateRegression(format!(
				"{} point(s), at least 2 distinct counts are needed",
				points.len()
			)));
		}
		if let Some((x, y)) = points.iter().find(|(x, y)| !(*x > 0.0 && *y > 0.0)) {
			return Err(LmError::DegenerateRegression(format!("non-positive point ({}, {})", x, y)));
		}

		let logs: Vec<(f64, f64)> = points.iter().map(|(x, y)| (x.ln(), y.ln())).collect();
		let len = logs.len() as f64;
		let mean_x = logs.iter().map(|(x, _)| x).sum::<f64>() / len;
		let mean_y = logs.iter().map(|(_, y)| y).sum::<f64>() / len;

		let (mut covariance, mut variance) = (0.0, 0.0);
		for (x, y) in &logs {
			covariance += (x - mean_x) * (y - mean_y);
			variance += (x - mean_x) * (x - mean_x);
		}
		if variance <= f64::EPSILON {
			return Err(LmError::DegenerateRegression("zero variance in log counts".to_owned()));
		}

		let slope = covariance / variance;
		let intercept = mean_y - slope * mean_x;
		if !slope.is_finite() || !intercept.is_finite() {
			return Err(LmError::DegenerateRegression(format!(
				"non-finite coefficients (slope={}, intercept={})",
				slope, intercept
			)));
		}

		Ok(Self { slope, intercept })
	}

	/// Evaluates the fitted curve: `exp(intercept + slope * ln(x))`.
	pub fn predict(&self, x: f64) -> f64 {
		(self.intercept + self.slope * x.ln()).exp()
	}
}
