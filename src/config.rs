use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where the database lives and how records are materialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Directory holding the `index.*` and `data.*` files.
	pub root: Option<PathBuf>,
	/// Resolve every word's sense number as soon as its synset is read,
	/// instead of on first request. Costs one index scan per word.
	pub eager_sense_numbers: bool,
}

impl Config {
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Config { root: Some(root.into()), ..Config::default() }
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Config> {
		let file = File::open(path).map_err(|e| Error::FailedOpenFile("config", e))?;
		serde_json::from_reader(BufReader::new(file))
			.map_err(|e| Error::InvalidConfig(e.to_string()))
	}

	/// `WNSEARCHDIR`, else `$WNHOME/dict`, else `<data dir>/wordnet/dict` if present.
	pub fn from_env() -> Config {
		let root = env::var_os("WNSEARCHDIR")
			.map(PathBuf::from)
			.or_else(|| env::var_os("WNHOME").map(|home| PathBuf::from(home).join("dict")))
			.or_else(|| {
				dirs::data_dir()
					.map(|dir| dir.join("wordnet").join("dict"))
					.filter(|dir| dir.is_dir())
			});
		Config { root, ..Config::default() }
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn loads_json() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"root": "/usr/share/wordnet", "eager_sense_numbers": true}}"#).unwrap();
		let config = Config::load(file.path()).unwrap();
		assert_eq!(config.root.as_deref(), Some(Path::new("/usr/share/wordnet")));
		assert!(config.eager_sense_numbers);
	}

	#[test]
	fn missing_fields_default() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{}}").unwrap();
		assert_eq!(Config::load(file.path()).unwrap(), Config::default());
	}

	#[test]
	fn bad_json() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "root = here").unwrap();
		assert!(matches!(Config::load(file.path()), Err(Error::InvalidConfig(_))));
		assert!(matches!(Config::load("/nonexistent/wndb.json"), Err(Error::FailedOpenFile("config", _))));
	}
}
