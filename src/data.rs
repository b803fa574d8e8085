use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::BufRead;
use std::sync::OnceLock;

use log::error;
use serde::Serialize;

use crate::error::Result;
use crate::index::MAX_PREALLOC;
use crate::pointer::Pointer;
use crate::pos::PartOfSpeech;
use crate::splitter::LineSplitter;
use crate::synset::{DictSource, LazySynset, SynsetId};

#[derive(Clone, Debug, Serialize)]
pub struct WordData {
	pub word: String,
	pub lex_id: u32,
	/// Adjective position marker such as `p`, `a` or `ip`.
	pub marker: Option<String>,
	pub pos: PartOfSpeech,
	pub offset: u64,
	#[serde(skip)]
	sense: OnceLock<u32>,
}

impl WordData {
	pub fn new(word: String, lex_id: u32, marker: Option<String>, pos: PartOfSpeech, offset: u64) -> Self {
		WordData { word, lex_id, marker, pos, offset, sense: OnceLock::new() }
	}

	/// Rank of this word's synset among the word's senses, 0 if the index
	/// does not list it. Looked up on first call only.
	pub fn sense_number<S>(&self, source: &S) -> Result<u32>
		where S: DictSource + ?Sized
	{
		if let Some(sense) = self.sense.get() {
			return Ok(*sense);
		}
		let sense = source.sense_number(&self.word, self.pos, self.offset)?;
		Ok(*self.sense.get_or_init(|| sense))
	}

	pub fn cached_sense_number(&self) -> Option<u32> {
		self.sense.get().copied()
	}

	pub(crate) fn set_sense_number(&self, sense: u32) {
		let _ = self.sense.set(sense);
	}
}

impl fmt::Display for WordData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Word: {}  Lexicon-ID: {}", self.word, self.lex_id)?;
		if let Some(marker) = &self.marker {
			write!(f, "  Syntactic-Marker: {}", marker)?;
		}
		write!(f, "  POS: {}  Offset: {}  Sense", self.pos, self.offset)?;
		match self.cached_sense_number() {
			None => write!(f, ": <Not loaded>"),
			Some(0) => write!(f, ": <Not found>"),
			Some(n) => write!(f, " #{}", n),
		}
	}
}

/// Sentence frame applicable to a verb synset. `word` 0 means all words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FrameData {
	pub frame: u32,
	pub word: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Synset {
	pub offset: u64,
	pub lex_filenum: u32,
	pub pos: PartOfSpeech,
	pub words: Vec<WordData>,
	pub pointers: Vec<Pointer>,
	pub frames: Vec<FrameData>,
	pub gloss: Option<String>,
}

impl Synset {
	pub fn id(&self) -> SynsetId {
		SynsetId::new(self.pos, self.offset)
	}

	pub fn global_id(&self) -> Result<u64> {
		self.id().global_id()
	}

	/// Word by its 1-based number, as pointers and frames refer to it.
	pub fn word(&self, number: u32) -> Option<&WordData> {
		let index = (number as usize).checked_sub(1)?;
		self.words.get(index)
	}

	/// Targets of every pointer carrying `symbol`, in declaration order.
	pub fn related(&self, symbol: &str) -> Vec<LazySynset> {
		if symbol.trim().is_empty() {
			return vec![];
		}
		self.pointers.iter()
			.filter(|p| p.symbol == symbol)
			.map(Pointer::synset)
			.collect()
	}
}

impl PartialEq for Synset {
	fn eq(&self, other: &Self) -> bool {
		self.pos == other.pos
			&& self.offset == other.offset
			&& self.lex_filenum == other.lex_filenum
	}
}

impl Eq for Synset {}

impl Hash for Synset {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.pos.hash(state);
		self.offset.hash(state);
		self.lex_filenum.hash(state);
	}
}

impl fmt::Display for Synset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Synset-Offset: {}  Lex-FileNum: {}  POS: {}  Num-Words: {}",
			self.offset, self.lex_filenum, self.pos, self.words.len())?;
		write!(f, "\nNum-Ptrs: {}  Num-Frames: {}", self.pointers.len(), self.frames.len())?;
		if let Some(gloss) = &self.gloss {
			write!(f, "\nGloss: {}", gloss)?;
		}
		for (i, word) in self.words.iter().enumerate() {
			write!(f, "\n  Word #{}: {}", i + 1, word)?;
		}
		for (i, pointer) in self.pointers.iter().enumerate() {
			write!(f, "\n  Pointer #{}: {}", i + 1, pointer)?;
		}
		for (i, frame) in self.frames.iter().enumerate() {
			write!(f, "\n  Frame #{}: Frame-Number: {}  Word-Number: {}", i + 1, frame.frame, frame.word)?;
		}
		Ok(())
	}
}

/// Split `word(marker)` into the bare word and its marker.
fn split_marker(word: &str) -> (&str, Option<&str>) {
	if let Some(stripped) = word.strip_suffix(')') {
		if let Some(open) = stripped.rfind('(') {
			if open > 0 && open + 1 < stripped.len() {
				return (&stripped[..open], Some(&stripped[open + 1..]));
			}
		}
	}
	(word, None)
}

/// Parse one data file record. Blank lines and the indented license
/// header yield `Ok(None)`.
pub fn parse_data_line(line: &str) -> Result<Option<Synset>> {
	let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
	if line.is_empty() || line.starts_with(' ') {
		return Ok(None);
	}

	let mut st = LineSplitter::new(line, ' ');
	let offset: u64 = st.decimal("synset offset")?;
	let lex_filenum: u32 = st.decimal("lex file number")?;
	let pos = PartOfSpeech::from_code(st.single_char("part of speech")?)?;

	let word_count = st.hex("word count")?;
	let mut words = Vec::with_capacity((word_count as usize).min(MAX_PREALLOC));
	for _ in 0..word_count {
		let raw = st.required("word")?;
		let lex_id = st.hex("lex id")?;
		let (word, marker) = if pos.is_adjective() {
			split_marker(raw)
		} else {
			(raw, None)
		};
		words.push(WordData::new(
			word.replace('_', " "),
			lex_id,
			marker.map(str::to_owned),
			pos,
			offset,
		));
	}

	let pointer_count: u32 = st.decimal("pointer count")?;
	let mut pointers = Vec::with_capacity((pointer_count as usize).min(MAX_PREALLOC));
	for _ in 0..pointer_count {
		let symbol = st.required("pointer symbol")?.to_owned();
		let target_offset: u64 = st.decimal("pointer offset")?;
		let target_pos = PartOfSpeech::from_code(st.single_char("pointer part of speech")?)?;
		let words = st.required("pointer source/target")?;
		if words.len() != 4 || !words.is_char_boundary(2) {
			return Err(st.malformed("pointer source/target"));
		}
		let source_word = u32::from_str_radix(&words[..2], 16)
			.map_err(|_| st.malformed("pointer source/target"))?;
		let target_word = u32::from_str_radix(&words[2..], 16)
			.map_err(|_| st.malformed("pointer source/target"))?;
		pointers.push(Pointer {
			symbol,
			target: SynsetId::new(target_pos, target_offset),
			source_word,
			target_word,
		});
	}

	let mut frames = vec![];
	if pos == PartOfSpeech::Verb {
		let frame_count: u32 = st.decimal("frame count")?;
		for _ in 0..frame_count {
			if st.required("frame marker")? != "+" {
				return Err(st.malformed("frame marker"));
			}
			let frame = st.decimal("frame number")?;
			let word = st.hex("frame word number")?;
			frames.push(FrameData { frame, word });
		}
	}

	let gloss = if st.next_token() == "|" {
		Some(st.rest_of_line().trim_end().to_owned())
	} else {
		None
	};

	Ok(Some(Synset { offset, lex_filenum, pos, words, pointers, frames, gloss }))
}

/// Parse every record of a data file. A read error ends the scan with
/// the records gathered so far.
pub(crate) fn read_data(mut reader: impl BufRead, file: &'static str) -> Result<Vec<Synset>> {
	let mut synsets = vec![];
	let mut line = String::new();
	loop {
		line.clear();
		match reader.read_line(&mut line) {
			Ok(0) => break,
			Ok(_) => {
				if let Some(synset) = parse_data_line(&line)? {
					synsets.push(synset);
				}
			}
			Err(e) => {
				error!("Exception reading {}: {}", file, e);
				break;
			}
		}
	}
	Ok(synsets)
}
