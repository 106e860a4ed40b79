/// Splits one preprocessed sentence into its tokens.
///
/// Tokens are separated by runs of whitespace; leading and trailing
/// whitespace (including the line terminator) is ignored. A blank line
/// yields no token.
pub fn tokenize(line: &str) -> Vec<&str> {
	line.split_whitespace().collect()
}
