use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for language model operations.
pub type Result<T> = std::result::Result<T, LmError>;

/// Errors raised while building or evaluating a language model.
///
/// Looking up an unknown gram is never an error: absent keys have a
/// count of zero and every distribution answers with a defined probability.
#[derive(Error, Debug)]
pub enum LmError {
	/// A model needs at least bigrams.
	#[error("Invalid window size {0}: must be >= 2")]
	InvalidWindowSize(usize),

	/// Boundary markers must be non-empty, whitespace-free and distinct.
	#[error("Invalid boundary marker '{marker}': {reason}")]
	InvalidMarker { marker: String, reason: &'static str },

	/// Laplace smoothing needs a strictly positive vocabulary size.
	#[error("Invalid vocabulary size {0}: must be >= 1")]
	InvalidVocabularySize(usize),

	/// An n-gram whose (n-1)-gram prefix is absent from the subgram table.
	#[error("Prefix '{prefix}' of n-gram '{ngram}' is missing from the subgram table")]
	MissingPrefix { ngram: String, prefix: String },

	/// A distribution was requested from a table without any entry.
	#[error("Cannot build a distribution from an empty frequency table")]
	EmptyTable,

	/// The log-log regression of Good-Turing smoothing has no unique solution.
	#[error("Degenerate Good-Turing regression: {0}")]
	DegenerateRegression(String),

	/// A held-out gram received a zero probability, its log is undefined.
	#[error("Zero probability for gram '{0}'")]
	ZeroProbability(String),

	/// A held-out corpus without any token to normalize by.
	#[error("Held-out corpus contains no token")]
	EmptyCorpus,

	/// Two models with different configurations cannot be combined.
	#[error("Configuration mismatch: {0}")]
	ConfigMismatch(String),

	/// A path without a usable parent directory or file name.
	#[error("Invalid path: {0}")]
	InvalidPath(PathBuf),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}
