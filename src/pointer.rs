use std::fmt;

use serde::Serialize;

use crate::pos::PartOfSpeech;
use crate::synset::{LazySynset, SynsetId};

/// A typed relation to another synset, or between two of their words.
///
/// Word numbers are 1-based positions in the source and target synsets;
/// 0 on both sides means the relation holds between the synsets themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pointer {
	pub symbol: String,
	pub target: SynsetId,
	pub source_word: u32,
	pub target_word: u32,
}

impl Pointer {
	pub fn pos(&self) -> PartOfSpeech {
		self.target.pos
	}

	pub fn is_lexical(&self) -> bool {
		self.source_word != 0 || self.target_word != 0
	}

	pub fn synset(&self) -> LazySynset {
		LazySynset::new(self.target)
	}
}

impl fmt::Display for Pointer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol: {}  Synset-Offset: {}  POS: {}  Source-Word-Number: {}  Target-Word-Number: {}",
			self.symbol, self.target.offset, self.target.pos, self.source_word, self.target_word)
	}
}

/// Name of the relation `symbol` stands for in synsets of category `pos`.
pub fn describe(pos: PartOfSpeech, symbol: &str) -> &'static str {
	let name = match symbol {
		"!" => Some("Antonym"),
		";c" => Some("Domain of synset - Topic"),
		";r" => Some("Domain of synset - Region"),
		";u" => Some("Domain of synset - Usage"),
		_ => None,
	};
	if let Some(name) = name {
		return name;
	}

	match pos {
		PartOfSpeech::Noun => match symbol {
			"@" => "Hypernym",
			"@i" => "Instance Hypernym",
			"~" => "Hyponym",
			"~i" => "Instance Hyponym",
			"#m" => "Member holonym",
			"#s" => "Substance holonym",
			"#p" => "Part holonym",
			"%m" => "Member meronym",
			"%s" => "Substance meronym",
			"%p" => "Part meronym",
			"=" => "Attribute",
			"+" => "Derivationally related form",
			"-c" => "Member of this domain - Topic",
			"-r" => "Member of this domain - Region",
			"-u" => "Member of this domain - Usage",
			_ => "[Unknown]",
		},
		PartOfSpeech::Verb => match symbol {
			"@" => "Hypernym",
			"~" => "Hyponym",
			"*" => "Entailment",
			">" => "Cause",
			"^" => "Also see",
			"$" => "Verb Group",
			"+" => "Derivationally related form",
			_ => "[Unknown]",
		},
		PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => match symbol {
			"&" => "Similar to",
			"<" => "Participle of verb",
			"\\" => "Pertainym (pertains to noun)",
			"=" => "Attribute",
			"^" => "Also see",
			_ => "[Unknown]",
		},
		PartOfSpeech::Adverb => match symbol {
			"\\" => "Derived from adjective",
			_ => "[Unknown]",
		},
	}
}
