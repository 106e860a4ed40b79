use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Occurrence counts of grams, keyed by their canonical string.
///
/// Absent grams count as zero: `frequency` never fails and no entry is
/// ever stored with a zero count.
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - Keys are grams in canonical form (tokens joined by one space)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyTable {
	/// Example: { "I am" => 42, "am ." => 3 }
	counts: HashMap<String, usize>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more occurrence of `gram`.
	pub fn add(&mut self, gram: &str) {
		self.add_count(gram, 1);
	}

	/// Records `count` more occurrences of `gram`.
	///
	/// A zero count leaves the table untouched.
	pub fn add_count(&mut self, gram: &str, count: usize) {
		if count == 0 {
			return;
		}
		match self.counts.get_mut(gram) {
			Some(existing) => *existing += count,
			None => {
				self.counts.insert(gram.to_owned(), count);
			}
		}
	}

	/// Returns the count of `gram`, or 0 if it was never recorded.
	pub fn frequency(&self, gram: &str) -> usize {
		self.counts.get(gram).copied().unwrap_or(0)
	}

	/// Returns true if `gram` was recorded at least once.
	pub fn contains(&self, gram: &str) -> bool {
		self.counts.contains_key(gram)
	}

	/// Number of distinct grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(gram, count)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Iterates over the recorded grams.
	pub fn grams(&self) -> impl Iterator<Item = &str> {
		self.counts.keys().map(String::as_str)
	}

	/// Number of distinct grams for each observed count value.
	///
	/// Example: counts { a: 2, b: 1, c: 1 } → { 1 => 2, 2 => 1 }
	pub fn frequency_of_frequencies(&self) -> BTreeMap<usize, usize> {
		let mut result = BTreeMap::new();
		for count in self.counts.values() {
			*result.entry(*count).or_insert(0) += 1;
		}
		result
	}

	/// Adds every count of `other` to this table.
	pub fn merge(&mut self, other: &Self) {
		for (gram, count) in &other.counts {
			self.add_count(gram, *count);
		}
	}
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for FrequencyTable {
	fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (gram, count) in iter {
			table.add_count(gram.as_ref(), count);
		}
		table
	}
}
