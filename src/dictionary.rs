use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, error, warn};

use crate::config::Config;
use crate::data::{parse_data_line, read_data, Synset};
use crate::error::{Error, Result};
use crate::filter::{ExactMatchFilter, TermFilter};
use crate::index::{read_index, IndexTerm};
use crate::pos::PartOfSpeech;
use crate::sense::resolve_sense_number;
use crate::synset::{DictSource, LazySynset, SynsetId};

/// Marker file a database directory must contain.
const MARKER_FILE: &str = "data.noun";

pub struct WordNet {
	config: Config,
	valid: OnceLock<bool>,
}

impl WordNet {
	pub fn new(config: Config) -> WordNet {
		WordNet { config, valid: OnceLock::new() }
	}

	/// Open the database under `path`, failing if it is not one.
	pub fn open(path: impl Into<PathBuf>) -> Result<WordNet> {
		let wordnet = WordNet::new(Config::with_root(path));
		wordnet.ensure_valid()?;
		Ok(wordnet)
	}

	pub fn from_env() -> Result<WordNet> {
		let wordnet = WordNet::new(Config::from_env());
		wordnet.ensure_valid()?;
		Ok(wordnet)
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn root(&self) -> Option<&Path> {
		self.config.root.as_deref()
	}

	pub fn set_root(&mut self, root: impl Into<PathBuf>) {
		self.config.root = Some(root.into());
		self.valid = OnceLock::new();
	}

	pub fn is_valid(&self) -> bool {
		*self.valid.get_or_init(|| match self.root() {
			Some(root) => root.is_dir() && root.join(MARKER_FILE).is_file(),
			None => false,
		})
	}

	fn ensure_valid(&self) -> Result<&Path> {
		let root = self.root().ok_or(Error::NoDictPath)?;
		if self.is_valid() {
			Ok(root)
		} else {
			Err(Error::InvalidDictPath(root.to_path_buf()))
		}
	}

	fn open_file(&self, name: &'static str) -> Result<File> {
		let path = self.ensure_valid()?.join(name);
		if !path.is_file() {
			return Err(Error::NoFileFound(name));
		}
		OpenOptions::new()
			.read(true)
			.open(path)
			.map_err(|e| Error::FailedOpenFile(name, e))
	}

	/// Open a file for a full scan. A missing or unreadable file is logged and
	/// scans as empty; an unusable root is still an error.
	fn open_scan(&self, name: &'static str) -> Result<Option<File>> {
		match self.open_file(name) {
			Ok(file) => Ok(Some(file)),
			Err(e @ (Error::NoFileFound(_) | Error::FailedOpenFile(..))) => {
				error!("{}, scanning nothing", e);
				Ok(None)
			}
			Err(e) => Err(e),
		}
	}

	/// Index terms of one category in file order, at most `limit` of them.
	pub fn index_terms(&self, pos: PartOfSpeech, limit: Option<usize>, filter: Option<&dyn TermFilter>)
		-> Result<Vec<IndexTerm>>
	{
		let name = pos.index_file();
		self.ensure_valid()?;
		if limit == Some(0) {
			return Ok(vec![]);
		}
		let Some(file) = self.open_scan(name)? else {
			return Ok(vec![]);
		};
		debug!("Scanning {}", name);
		read_index(BufReader::new(file), name, limit, filter)
	}

	/// Index terms of every category, sorted by lemma and cut to `limit`.
	pub fn all_index_terms(&self, limit: Option<usize>, filter: Option<&dyn TermFilter>)
		-> Result<Vec<IndexTerm>>
	{
		let mut terms = vec![];
		for pos in PartOfSpeech::FILES {
			terms.extend(self.index_terms(pos, limit, filter)?);
		}
		terms.sort_by(|a, b| a.lemma.cmp(&b.lemma));
		if let Some(limit) = limit {
			terms.truncate(limit);
		}
		Ok(terms)
	}

	pub fn lookup(&self, pos: PartOfSpeech, word: &str) -> Result<Option<IndexTerm>> {
		let filter = ExactMatchFilter::new(word, true);
		let mut terms = self.index_terms(pos, Some(1), Some(&filter))?;
		Ok(terms.pop())
	}

	pub fn synset(&self, pos: PartOfSpeech, offset: u64) -> LazySynset {
		LazySynset::new(SynsetId::new(pos, offset))
	}

	pub fn synset_by_code(&self, offset: u64, code: char) -> Result<LazySynset> {
		Ok(self.synset(PartOfSpeech::from_code(code)?, offset))
	}

	pub fn synset_by_id(&self, id: u64) -> Result<LazySynset> {
		Ok(LazySynset::new(SynsetId::from_global_id(id)?))
	}

	/// Every record of a category's data file, fully parsed.
	pub fn synsets(&self, pos: PartOfSpeech) -> Result<Vec<Synset>> {
		let name = pos.data_file();
		let Some(file) = self.open_scan(name)? else {
			return Ok(vec![]);
		};
		debug!("Scanning {}", name);
		let synsets = read_data(BufReader::new(file), name)?;
		if self.config.eager_sense_numbers {
			for synset in &synsets {
				self.fill_sense_numbers(synset)?;
			}
		}
		Ok(synsets)
	}

	pub fn sense_number(&self, word: &str, pos: PartOfSpeech, offset: u64) -> Result<u32> {
		let name = pos.index_file();
		let Some(file) = self.open_scan(name)? else {
			return Ok(0);
		};
		let sense = resolve_sense_number(BufReader::new(file), name, word, offset)?;
		if sense == 0 {
			warn!("{} ({}) has no sense at offset {}", word, pos, offset);
		}
		Ok(sense)
	}

	fn fill_sense_numbers(&self, synset: &Synset) -> Result<()> {
		for word in &synset.words {
			word.set_sense_number(self.sense_number(&word.word, word.pos, word.offset)?);
		}
		Ok(())
	}
}

impl DictSource for WordNet {
	fn load_synset(&self, id: SynsetId) -> Result<Synset> {
		let name = id.pos.data_file();
		let mut file = self.open_file(name)?;
		file.seek(SeekFrom::Start(id.offset))
			.map_err(|e| Error::FailedReadFile(name, e))?;
		let mut line = String::new();
		BufReader::new(file)
			.read_line(&mut line)
			.map_err(|e| Error::FailedReadFile(name, e))?;

		let synset = parse_data_line(&line)?
			.filter(|synset| synset.offset == id.offset)
			.ok_or_else(|| Error::MalformedLine { field: "synset offset", line: line.trim_end().to_owned() })?;
		if self.config.eager_sense_numbers {
			self.fill_sense_numbers(&synset)?;
		}
		Ok(synset)
	}

	fn sense_number(&self, word: &str, pos: PartOfSpeech, offset: u64) -> Result<u32> {
		WordNet::sense_number(self, word, pos, offset)
	}
}
