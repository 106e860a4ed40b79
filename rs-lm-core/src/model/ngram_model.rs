use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::ModelConfig;
use super::extractor::{extract_ngrams, start_context};
use super::frequency_table::FrequencyTable;
use super::tokenizer::tokenize;
use crate::error::{LmError, Result};
use crate::io::{read_binary, read_lines, table_path, write_binary};

/// File name prefix of the persisted n-gram table.
const NGRAMS_KIND: &str = "ngrams";

/// File name prefix of the persisted subgram table.
const SUBGRAMS_KIND: &str = "subgrams";

/// Frequency store of an n-gram language model.
///
/// The `NGramModel` counts, over a corpus, every n-gram (window `n`) and
/// every subgram (window `n-1`) produced by the extractor. Both tables are
/// filled independently from the same lines, so boundary grams of short
/// sentences are represented in both.
///
/// The subgram table also counts the start context (`n-1` start markers)
/// once per sentence: it conditions the first n-gram of every sentence but
/// is never produced by the extractor.
///
/// # Responsibilities
/// - Ingest corpus lines and accumulate both tables
/// - Answer frequency queries (0 for unseen grams)
/// - Merge with another model of the same configuration
/// - Store / load the two tables
///
/// # Invariants
/// - `config.window_size()` is always >= 2
/// - Every table entry has a count >= 1
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NGramModel {
	config: ModelConfig,

	/// Counts of n-grams.
	ngrams: FrequencyTable,

	/// Counts of (n-1)-grams.
	subgrams: FrequencyTable,
}

impl NGramModel {
	/// Creates an empty model.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid (e.g. `n <= 1`).
	pub fn new(config: ModelConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { config, ngrams: FrequencyTable::new(), subgrams: FrequencyTable::new() })
	}

	/// Builds a model from every line of a corpus file.
	///
	/// Each line holds one preprocessed sentence, tokens separated by spaces.
	pub fn from_file<P: AsRef<Path>>(filepath: P, config: ModelConfig) -> Result<Self> {
		let mut model = Self::new(config)?;
		let lines = read_lines(&filepath)?;
		model.accumulate(&lines);
		log::info!(
			"Counted {} n-grams and {} subgrams from {}",
			model.ngrams.len(),
			model.subgrams.len(),
			filepath.as_ref().display()
		);
		Ok(model)
	}

	pub fn config(&self) -> &ModelConfig {
		&self.config
	}

	/// Returns the n-gram table.
	pub fn ngrams(&self) -> &FrequencyTable {
		&self.ngrams
	}

	/// Returns the (n-1)-gram table.
	pub fn subgrams(&self) -> &FrequencyTable {
		&self.subgrams
	}

	/// Returns the frequency count of an n-gram, 0 if unseen.
	pub fn frequency(&self, ngram: &str) -> usize {
		self.ngrams.frequency(ngram)
	}

	/// Returns the frequency count of an (n-1)-gram, 0 if unseen.
	pub fn subgram_frequency(&self, subgram: &str) -> usize {
		self.subgrams.frequency(subgram)
	}

	/// Adds one sentence to both tables.
	///
	/// An empty line still contributes its boundary grams.
	pub fn add_sentence(&mut self, sentence: &str) {
		let tokens = tokenize(sentence);
		let n = self.config.window_size();
		let start = self.config.start_marker();
		let end = self.config.end_marker();

		for ngram in extract_ngrams(&tokens, n, start, end) {
			self.ngrams.add(&ngram);
		}
		for subgram in extract_ngrams(&tokens, n - 1, start, end) {
			self.subgrams.add(&subgram);
		}
		self.subgrams.add(&start_context(n, start));
	}

	/// Adds every line of a corpus to both tables.
	pub fn accumulate<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut count = 0usize;
		for line in lines {
			self.add_sentence(line.as_ref());
			count += 1;
		}
		log::debug!("Accumulated {} sentences into a {}-gram model", count, self.config.window_size());
	}

	/// Merges another model into this one.
	///
	/// # Errors
	/// Returns an error if the configurations (order or markers) differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.config != other.config {
			return Err(LmError::ConfigMismatch(format!(
				"self=({}, {}, {}), other=({}, {}, {})",
				self.config.window_size(),
				self.config.start_marker(),
				self.config.end_marker(),
				other.config.window_size(),
				other.config.start_marker(),
				other.config.end_marker()
			)));
		}
		self.ngrams.merge(&other.ngrams);
		self.subgrams.merge(&other.subgrams);
		Ok(())
	}

	/// Writes both tables into `output_dir`.
	///
	/// Files are named `ngrams_N_{n}.bin` and `subgrams_N_{n}.bin`.
	pub fn store<P: AsRef<Path>>(&self, output_dir: P) -> Result<()> {
		let n = self.config.window_size();
		write_binary(table_path(&output_dir, NGRAMS_KIND, n)?, &self.ngrams)?;
		write_binary(table_path(&output_dir, SUBGRAMS_KIND, n)?, &self.subgrams)?;
		log::debug!("Stored {}-gram tables into {}", n, output_dir.as_ref().display());
		Ok(())
	}

	/// Reads the tables previously written by `store` for `config`'s order.
	pub fn load<P: AsRef<Path>>(input_dir: P, config: ModelConfig) -> Result<Self> {
		let mut model = Self::new(config)?;
		let n = model.config.window_size();
		model.ngrams = read_binary(table_path(&input_dir, NGRAMS_KIND, n)?)?;
		model.subgrams = read_binary(table_path(&input_dir, SUBGRAMS_KIND, n)?)?;
		Ok(model)
	}
}
