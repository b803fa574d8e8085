use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::data::Synset;
use crate::error::{Error, Result};
use crate::pos::PartOfSpeech;

const ID_BASE: u64 = 100_000_000;

/// Natural key of a synset: its category and byte offset in the category's data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetId {
	pub pos: PartOfSpeech,
	pub offset: u64,
}

impl SynsetId {
	pub fn new(pos: PartOfSpeech, offset: u64) -> Self {
		SynsetId { pos, offset }
	}

	/// Category prefix followed by the 8-digit offset. Offsets that need
	/// more than 8 digits have no such id.
	pub fn global_id(&self) -> Result<u64> {
		if self.offset >= ID_BASE {
			return Err(Error::OffsetOutOfRange(*self));
		}
		Ok(self.pos.prefix() as u64 * ID_BASE + self.offset)
	}

	pub fn from_global_id(id: u64) -> Result<SynsetId> {
		let pos = PartOfSpeech::from_prefix(id / ID_BASE)
			.ok_or(Error::UnknownSynsetId(id))?;
		Ok(SynsetId { pos, offset: id % ID_BASE })
	}
}

impl fmt::Display for SynsetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:08}-{}", self.offset, self.pos.code())
	}
}

/// What a lazy handle needs from the dictionary to populate itself.
pub trait DictSource {
	fn load_synset(&self, id: SynsetId) -> Result<Synset>;

	/// 1-based rank of `offset` among the senses of `word`, 0 when absent.
	fn sense_number(&self, word: &str, pos: PartOfSpeech, offset: u64) -> Result<u32>;
}

/// A synset known by its key whose body is read from the data file on first use.
///
/// The body is loaded at most once. A failed load is remembered, so later calls
/// return [`Error::UnresolvedSynset`] without touching the file again.
#[derive(Clone, Debug)]
pub struct LazySynset {
	id: SynsetId,
	body: OnceLock<Option<Synset>>,
}

impl LazySynset {
	pub fn new(id: SynsetId) -> Self {
		LazySynset { id, body: OnceLock::new() }
	}

	pub fn loaded(body: Synset) -> Self {
		let id = body.id();
		let cell = OnceLock::new();
		let _ = cell.set(Some(body));
		LazySynset { id, body: cell }
	}

	pub fn id(&self) -> SynsetId {
		self.id
	}

	pub fn pos(&self) -> PartOfSpeech {
		self.id.pos
	}

	pub fn offset(&self) -> u64 {
		self.id.offset
	}

	pub fn global_id(&self) -> Result<u64> {
		self.id.global_id()
	}

	pub fn is_loaded(&self) -> bool {
		self.body.get().is_some()
	}

	/// Body if a load has already succeeded. Never reads.
	pub fn get(&self) -> Option<&Synset> {
		self.body.get().and_then(Option::as_ref)
	}

	pub fn resolve<S>(&self, source: &S) -> Result<&Synset>
		where S: DictSource + ?Sized
	{
		let body = self.body.get_or_init(|| {
			debug!("Loading synset {}", self.id);
			match source.load_synset(self.id) {
				Ok(synset) => Some(synset),
				Err(e) => {
					error!("Failed to load synset {}: {}", self.id, e);
					None
				}
			}
		});
		body.as_ref().ok_or(Error::UnresolvedSynset(self.id))
	}
}

impl PartialEq for LazySynset {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for LazySynset {}

impl Hash for LazySynset {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl From<SynsetId> for LazySynset {
	fn from(id: SynsetId) -> Self {
		LazySynset::new(id)
	}
}
