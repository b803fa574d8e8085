use std::fmt;
use std::io::BufRead;

use log::error;
use serde::Serialize;

use crate::error::Result;
use crate::filter::TermFilter;
use crate::pointer::describe;
use crate::pos::PartOfSpeech;
use crate::splitter::LineSplitter;
use crate::synset::{LazySynset, SynsetId};

/// Counts come from the file; never reserve more than this up front.
pub(crate) const MAX_PREALLOC: usize = 64;

/// One line of an index file: a lemma and its senses, most frequent first.
///
/// Ordered by lemma first, so a merged list of terms sorts alphabetically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexTerm {
	pub lemma: String,
	pub pos: PartOfSpeech,
	/// Every relation type used by any of the lemma's synsets.
	pub pointers: Vec<String>,
	pub tag_sense_count: u32,
	pub synsets: Vec<SynsetId>,
}

impl IndexTerm {
	pub fn synset_count(&self) -> usize {
		self.synsets.len()
	}

	pub fn pointer_count(&self) -> usize {
		self.pointers.len()
	}

	/// 1-based sense rank of the synset at `offset`, 0 if this lemma has no such sense.
	pub fn sense_of(&self, offset: u64) -> u32 {
		self.synsets.iter()
			.position(|id| id.offset == offset)
			.map_or(0, |i| i as u32 + 1)
	}

	/// Handle on the synset of the given 1-based sense rank.
	pub fn synset(&self, rank: usize) -> Option<LazySynset> {
		let index = rank.checked_sub(1)?;
		self.synsets.get(index).copied().map(LazySynset::new)
	}
}

impl fmt::Display for IndexTerm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Lemma: {}  POS: {}  Tag-Sense-Count: {}", self.lemma, self.pos, self.tag_sense_count)?;
		write!(f, "\nList of Synsets ({})", self.synsets.len())?;
		for (i, id) in self.synsets.iter().enumerate() {
			write!(f, "\n  #{}: {}", i + 1, id.offset)?;
		}
		write!(f, "\nList of Pointers ({})", self.pointers.len())?;
		for (i, symbol) in self.pointers.iter().enumerate() {
			write!(f, "\n  #{}: {} ({})", i + 1, symbol, describe(self.pos, symbol))?;
		}
		Ok(())
	}
}

/// Parse one index file line. Blank lines and the indented license header
/// yield `Ok(None)`.
pub fn parse_index_line(line: &str) -> Result<Option<IndexTerm>> {
	let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
	if line.is_empty() || line.starts_with(' ') {
		return Ok(None);
	}

	let mut st = LineSplitter::new(line, ' ');
	let lemma = st.required("lemma")?.replace('_', " ");
	let pos = PartOfSpeech::from_code(st.single_char("part of speech")?)?;
	let synset_count: usize = st.decimal("synset count")?;
	let pointer_count: usize = st.decimal("pointer count")?;

	let mut pointers = Vec::with_capacity(pointer_count.min(MAX_PREALLOC));
	for _ in 0..pointer_count {
		pointers.push(st.required("pointer symbol")?.to_owned());
	}

	// sense_cnt duplicates the synset count
	st.required("sense count")?;
	let tag_sense_count = st.decimal("tag sense count")?;

	let mut synsets = Vec::with_capacity(synset_count.min(MAX_PREALLOC));
	for _ in 0..synset_count {
		let offset = st.decimal("synset offset")?;
		synsets.push(SynsetId::new(pos, offset));
	}

	Ok(Some(IndexTerm { lemma, pos, pointers, tag_sense_count, synsets }))
}

/// Stream index terms out of `reader`, keeping those accepted by `filter`
/// and stopping once `limit` terms are collected.
///
/// A read error ends the scan with the terms gathered so far; a malformed
/// line is an error.
pub(crate) fn read_index(
	mut reader: impl BufRead,
	file: &'static str,
	limit: Option<usize>,
	filter: Option<&dyn TermFilter>,
) -> Result<Vec<IndexTerm>> {
	if limit == Some(0) {
		return Ok(vec![]);
	}
	let mut terms = Vec::with_capacity(limit.unwrap_or(500).min(500));
	let mut line = String::new();
	loop {
		line.clear();
		match reader.read_line(&mut line) {
			Ok(0) => break,
			Ok(_) => {
				let Some(term) = parse_index_line(&line)? else {
					continue;
				};
				if filter.map_or(true, |f| f.accept(&term.lemma)) {
					terms.push(term);
					if limit.is_some_and(|limit| terms.len() >= limit) {
						break;
					}
				}
			}
			Err(e) => {
				error!("Exception reading {}: {}", file, e);
				break;
			}
		}
	}
	Ok(terms)
}
