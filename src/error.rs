use std::path::PathBuf;

use thiserror::Error;

use crate::synset::SynsetId;

#[derive(Debug, Error)]
pub enum Error {
	#[error("Dict path is not set")]
	NoDictPath,

	#[error("Dict path {0:?} is not valid")]
	InvalidDictPath(PathBuf),

	#[error("No {0} file found")]
	NoFileFound(&'static str),

	#[error("Failed open {0} file")]
	FailedOpenFile(&'static str, std::io::Error),

	#[error("Failed reading {0} file")]
	FailedReadFile(&'static str, std::io::Error),

	#[error("Invalid {field} in line: {line}")]
	MalformedLine { field: &'static str, line: String },

	#[error("Unknown part of speech: {0}")]
	UnknownPartOfSpeech(String),

	#[error("Unknown synset id {0}")]
	UnknownSynsetId(u64),

	#[error("Offset of synset {0} does not fit a 9-digit id")]
	OffsetOutOfRange(SynsetId),

	#[error("Synset {0} could not be loaded")]
	UnresolvedSynset(SynsetId),

	#[error("Invalid config: {0}")]
	InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
