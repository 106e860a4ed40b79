//! N-gram language model estimation library.
//!
//! This crate turns a tokenized corpus (one sentence per line) into a
//! statistical language model:
//! - Boundary-padded n-gram extraction
//! - N-gram and subgram frequency counting
//! - Maximum-likelihood, Laplace and Good-Turing probability distributions
//! - Log-perplexity evaluation of a held-out corpus
//!
//! Text preprocessing (segmentation, tokenization, lemmatization) happens
//! upstream; every input line is expected to hold tokens separated by spaces.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Counting side of the model: tokenizer, extractor, frequency tables
/// and the frequency store itself.
pub mod model;

/// Probability distributions built from frequency tables.
pub mod distribution;

/// Held-out corpus evaluation.
pub mod perplexity;

/// I/O utilities (corpus reading, table persistence paths).
///
/// Not exposed
pub(crate) mod io;

pub use error::{LmError, Result};
