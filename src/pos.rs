use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
	Noun,
	Verb,
	Adjective,
	AdjectiveSatellite,
	Adverb,
}

impl PartOfSpeech {
	pub const ALL: [PartOfSpeech; 5] = [
		PartOfSpeech::Noun,
		PartOfSpeech::Verb,
		PartOfSpeech::Adjective,
		PartOfSpeech::AdjectiveSatellite,
		PartOfSpeech::Adverb,
	];

	/// Categories that own an index/data file pair, in merge order.
	pub const FILES: [PartOfSpeech; 4] = [
		PartOfSpeech::Adjective,
		PartOfSpeech::Adverb,
		PartOfSpeech::Noun,
		PartOfSpeech::Verb,
	];

	pub fn code(self) -> char {
		match self {
			PartOfSpeech::Noun => 'n',
			PartOfSpeech::Verb => 'v',
			PartOfSpeech::Adjective => 'a',
			PartOfSpeech::AdjectiveSatellite => 's',
			PartOfSpeech::Adverb => 'r',
		}
	}

	pub fn from_code(code: char) -> Result<PartOfSpeech> {
		match code {
			'n' => Ok(PartOfSpeech::Noun),
			'v' => Ok(PartOfSpeech::Verb),
			'a' => Ok(PartOfSpeech::Adjective),
			's' => Ok(PartOfSpeech::AdjectiveSatellite),
			'r' => Ok(PartOfSpeech::Adverb),
			_ => Err(Error::UnknownPartOfSpeech(code.to_string())),
		}
	}

	/// Leading digit of the 9-digit synset id. Satellites share the adjective prefix.
	pub fn prefix(self) -> u8 {
		match self {
			PartOfSpeech::Noun => 1,
			PartOfSpeech::Verb => 2,
			PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => 3,
			PartOfSpeech::Adverb => 4,
		}
	}

	pub fn from_prefix(prefix: u64) -> Option<PartOfSpeech> {
		match prefix {
			1 => Some(PartOfSpeech::Noun),
			2 => Some(PartOfSpeech::Verb),
			3 => Some(PartOfSpeech::Adjective),
			4 => Some(PartOfSpeech::Adverb),
			_ => None,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			PartOfSpeech::Noun => "noun",
			PartOfSpeech::Verb => "verb",
			PartOfSpeech::Adjective => "adj",
			PartOfSpeech::AdjectiveSatellite => "adj sat",
			PartOfSpeech::Adverb => "adv",
		}
	}

	pub fn index_file(self) -> &'static str {
		match self {
			PartOfSpeech::Noun => "index.noun",
			PartOfSpeech::Verb => "index.verb",
			PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "index.adj",
			PartOfSpeech::Adverb => "index.adv",
		}
	}

	pub fn data_file(self) -> &'static str {
		match self {
			PartOfSpeech::Noun => "data.noun",
			PartOfSpeech::Verb => "data.verb",
			PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "data.adj",
			PartOfSpeech::Adverb => "data.adv",
		}
	}

	#[inline]
	pub fn is_adjective(self) -> bool {
		matches!(self, PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite)
	}
}

impl fmt::Display for PartOfSpeech {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for PartOfSpeech {
	type Err = Error;

	fn from_str(s: &str) -> Result<PartOfSpeech> {
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(code), None) => PartOfSpeech::from_code(code),
			_ => Err(Error::UnknownPartOfSpeech(s.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip() {
		for pos in PartOfSpeech::ALL {
			assert_eq!(PartOfSpeech::from_code(pos.code()).unwrap(), pos);
			assert_eq!(pos.code().to_string().parse::<PartOfSpeech>().unwrap(), pos);
		}
	}

	#[test]
	fn satellite_shares_adjective_files_and_prefix() {
		let sat = PartOfSpeech::AdjectiveSatellite;
		assert_eq!(sat.prefix(), PartOfSpeech::Adjective.prefix());
		assert_eq!(sat.data_file(), "data.adj");
		assert_eq!(sat.index_file(), "index.adj");
		assert_ne!(sat, PartOfSpeech::Adjective);
		assert_eq!(PartOfSpeech::from_prefix(3), Some(PartOfSpeech::Adjective));
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(matches!(PartOfSpeech::from_code('x'), Err(Error::UnknownPartOfSpeech(_))));
		assert!("nv".parse::<PartOfSpeech>().is_err());
		assert!("".parse::<PartOfSpeech>().is_err());
		assert_eq!(PartOfSpeech::from_prefix(0), None);
		assert_eq!(PartOfSpeech::from_prefix(5), None);
	}
}
