use std::io::BufRead;

use crate::error::Result;
use crate::filter::ExactMatchFilter;
use crate::index::read_index;

/// Scan an index file for `word` (exact, case-sensitive) and return the
/// 1-based rank of `offset` among its senses.
///
/// A word missing from the index, or a sense missing from the word, is 0.
pub fn resolve_sense_number(reader: impl BufRead, file: &'static str, word: &str, offset: u64) -> Result<u32> {
	let filter = ExactMatchFilter::new(word, true);
	let terms = read_index(reader, file, Some(1), Some(&filter))?;
	Ok(terms.first().map_or(0, |term| term.sense_of(offset)))
}
