//! Counting side of the language model.
//!
//! This module turns raw corpus lines into frequency tables:
//! - Line tokenization (`tokenize`)
//! - Boundary-padded n-gram extraction (`extract_ngrams`)
//! - Get-or-zero count containers (`FrequencyTable`)
//! - Model configuration (`ModelConfig`)
//! - The frequency store accumulating both tables (`NGramModel`)

/// Model configuration: window size and boundary markers.
pub mod config;

/// Sliding-window n-gram extraction with boundary markers.
pub mod extractor;

/// Gram to count mapping where absent keys count as zero.
pub mod frequency_table;

/// Frequency store holding the n-gram and subgram tables of a corpus.
pub mod ngram_model;

/// Whitespace line tokenizer.
pub mod tokenizer;

pub use config::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, ModelConfig};
pub use extractor::{extract_ngrams, start_context};
pub use frequency_table::FrequencyTable;
pub use ngram_model::NGramModel;
pub use tokenizer::tokenize;
