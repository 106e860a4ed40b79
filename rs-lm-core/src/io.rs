use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{LmError, Result};

/// Reads a corpus file and returns all its lines as a `Vec<String>`.
///
/// - Single pass over the file, closed when the function returns
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let reader = BufReader::new(File::open(filename)?);
	let mut lines = Vec::new();
	for line in reader.lines() {
		lines.push(line?);
	}
	Ok(lines)
}

/// Builds the path of a persisted frequency table.
///
/// Example:
/// `data/` + `"ngrams"` + `3` → `data/ngrams_N_3.bin`
pub(crate) fn table_path<P: AsRef<Path>>(dir: P, kind: &str, window_size: usize) -> Result<PathBuf> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		return Err(LmError::InvalidPath(dir.to_path_buf()));
	}
	Ok(dir.join(format!("{}_N_{}.bin", kind, window_size)))
}

/// Serializes `value` with `postcard` and writes it to `path`.
pub(crate) fn write_binary<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
	let bytes = postcard::to_stdvec(value)?;
	std::fs::write(path, bytes)?;
	Ok(())
}

/// Reads `path` and deserializes its `postcard` content.
pub(crate) fn read_binary<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
	let bytes = std::fs::read(path)?;
	Ok(postcard::from_bytes(&bytes)?)
}
