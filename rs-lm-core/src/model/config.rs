use serde::{Deserialize, Serialize};

use crate::error::{LmError, Result};

/// Marker inserted before the first token of every sentence.
pub const DEFAULT_START_MARKER: &str = "_START_";

/// Marker appended after the last token of every sentence.
pub const DEFAULT_END_MARKER: &str = "_END_";

/// Parameters shared by counting and evaluation.
///
/// # Invariants
/// - `window_size` is always >= 2
/// - Markers are non-empty, contain no whitespace and differ from each other
///
/// Deserialization goes through the same checks as the setters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawModelConfig")]
pub struct ModelConfig {
	/// The order of the model (number of tokens in an n-gram).
	window_size: usize,

	/// Synthetic token padding the left side of a sentence.
	start_marker: String,

	/// Synthetic token closing a sentence.
	end_marker: String,
}

/// Unchecked field values, as read by serde.
#[derive(Deserialize)]
struct RawModelConfig {
	window_size: usize,
	start_marker: String,
	end_marker: String,
}

impl TryFrom<RawModelConfig> for ModelConfig {
	type Error = LmError;

	fn try_from(raw: RawModelConfig) -> Result<Self> {
		let mut config = Self::default();
		config.set_window_size(raw.window_size)?;
		config.set_markers(&raw.start_marker, &raw.end_marker)?;
		Ok(config)
	}
}

impl Default for ModelConfig {
	/// Trigram model with `_START_` / `_END_` markers.
	fn default() -> Self {
		Self {
			window_size: 3,
			start_marker: DEFAULT_START_MARKER.to_owned(),
			end_marker: DEFAULT_END_MARKER.to_owned(),
		}
	}
}

impl ModelConfig {
	/// Creates a configuration of order `window_size` with the default markers.
	///
	/// # Errors
	/// Returns `InvalidWindowSize` if `window_size <= 1`.
	pub fn new(window_size: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_window_size(window_size)?;
		Ok(config)
	}

	pub fn window_size(&self) -> usize {
		self.window_size
	}

	pub fn start_marker(&self) -> &str {
		&self.start_marker
	}

	pub fn end_marker(&self) -> &str {
		&self.end_marker
	}

	/// Sets the model order.
	///
	/// # Errors
	/// Returns `InvalidWindowSize` if `window_size <= 1`: a unigram
	/// model has no conditioning prefix.
	pub fn set_window_size(&mut self, window_size: usize) -> Result<()> {
		if window_size <= 1 {
			return Err(LmError::InvalidWindowSize(window_size));
		}
		self.window_size = window_size;
		Ok(())
	}

	/// Sets both boundary markers.
	///
	/// # Errors
	/// Returns `InvalidMarker` if a marker is empty, contains whitespace,
	/// or if both markers are equal.
	pub fn set_markers(&mut self, start_marker: &str, end_marker: &str) -> Result<()> {
		Self::check_marker(start_marker)?;
		Self::check_marker(end_marker)?;
		if start_marker == end_marker {
			return Err(LmError::InvalidMarker {
				marker: end_marker.to_owned(),
				reason: "start and end markers must differ",
			});
		}
		self.start_marker = start_marker.to_owned();
		self.end_marker = end_marker.to_owned();
		Ok(())
	}

	/// Re-checks every invariant, for configurations obtained through serde.
	pub fn validate(&self) -> Result<()> {
		let mut checked = Self::default();
		checked.set_window_size(self.window_size)?;
		checked.set_markers(&self.start_marker, &self.end_marker)
	}

	fn check_marker(marker: &str) -> Result<()> {
		if marker.is_empty() {
			return Err(LmError::InvalidMarker { marker: marker.to_owned(), reason: "marker is empty" });
		}
		if marker.chars().any(char::is_whitespace) {
			return Err(LmError::InvalidMarker { marker: marker.to_owned(), reason: "marker contains whitespace" });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_a_trigram_model() {
		let config = ModelConfig::default();
		assert_eq!(config.window_size(), 3);
		assert_eq!(config.start_marker(), "_START_");
		assert_eq!(config.end_marker(), "_END_");
	}

	#[test]
	fn rejects_unigram_and_empty_windows() {
		assert!(matches!(ModelConfig::new(1), Err(LmError::InvalidWindowSize(1))));
		assert!(matches!(ModelConfig::new(0), Err(LmError::InvalidWindowSize(0))));
		assert_eq!(ModelConfig::new(2).unwrap().window_size(), 2);
	}

	#[test]
	fn rejects_bad_markers() {
		let mut config = ModelConfig::default();
		assert!(config.set_markers("", "</s>").is_err());
		assert!(config.set_markers("<s> x", "</s>").is_err());
		assert!(config.set_markers("<s>", "<s>").is_err());
		assert_eq!(config.start_marker(), "_START_");

		config.set_markers("<s>", "</s>").unwrap();
		assert_eq!(config.start_marker(), "<s>");
		assert_eq!(config.end_marker(), "</s>");
	}

	#[test]
	fn deserialization_rejects_small_windows() {
		for window_size in [0usize, 1] {
			let bytes = postcard::to_stdvec(&(window_size, "_START_", "_END_")).unwrap();
			assert!(postcard::from_bytes::<ModelConfig>(&bytes).is_err(), "window {}", window_size);
		}
	}

	#[test]
	fn deserialization_rejects_bad_markers() {
		let bytes = postcard::to_stdvec(&(3usize, "<s>", "<s>")).unwrap();
		assert!(postcard::from_bytes::<ModelConfig>(&bytes).is_err());
	}

	#[test]
	fn valid_config_survives_serialization() {
		let mut config = ModelConfig::new(4).unwrap();
		config.set_markers("<s>", "</s>").unwrap();
		let bytes = postcard::to_stdvec(&config).unwrap();
		let read: ModelConfig = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(read, config);
		assert!(read.validate().is_ok());
	}
}
