use crate::error::{Error, Result};

/// Cursor over the tokens of one database line.
///
/// Runs of the delimiter are collapsed, and the position only ever moves
/// forward. Tokens are slices of the original line.
#[derive(Clone, Debug)]
pub struct LineSplitter<'a> {
	line: &'a str,
	delim: char,
	pos: usize,
}

impl<'a> LineSplitter<'a> {
	pub fn new(line: &'a str, delim: char) -> Self {
		LineSplitter { line, delim, pos: 0 }
	}

	#[inline]
	fn skip_delims(&mut self) {
		let rest = &self.line[self.pos..];
		let trimmed = rest.trim_start_matches(self.delim);
		self.pos += rest.len() - trimmed.len();
	}

	/// Next maximal run of non-delimiter characters, or `""` at the end of the line.
	pub fn next_token(&mut self) -> &'a str {
		self.skip_delims();
		let rest = &self.line[self.pos..];
		let len = rest.find(self.delim).unwrap_or(rest.len());
		self.pos += len;
		&rest[..len]
	}

	/// Everything after the leading delimiters. Leaves the cursor at the end.
	pub fn rest_of_line(&mut self) -> &'a str {
		self.skip_delims();
		let rest = &self.line[self.pos..];
		self.pos = self.line.len();
		rest
	}

	pub fn has_more(&mut self) -> bool {
		self.skip_delims();
		self.pos < self.line.len()
	}

	pub(crate) fn required(&mut self, field: &'static str) -> Result<&'a str> {
		match self.next_token() {
			"" => Err(self.malformed(field)),
			token => Ok(token),
		}
	}

	pub(crate) fn decimal<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T> {
		self.required(field)?
			.parse()
			.map_err(|_| self.malformed(field))
	}

	pub(crate) fn hex(&mut self, field: &'static str) -> Result<u32> {
		let token = self.required(field)?;
		u32::from_str_radix(token, 16).map_err(|_| self.malformed(field))
	}

	pub(crate) fn single_char(&mut self, field: &'static str) -> Result<char> {
		let mut chars = self.required(field)?.chars();
		match (chars.next(), chars.next()) {
			(Some(ch), None) => Ok(ch),
			_ => Err(self.malformed(field)),
		}
	}

	pub(crate) fn malformed(&self, field: &'static str) -> Error {
		Error::MalformedLine { field, line: self.line.to_owned() }
	}
}

impl<'a> Iterator for LineSplitter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		match self.next_token() {
			"" => None,
			token => Some(token),
		}
	}
}
