pub mod error;
mod config;
mod data;
mod dictionary;
mod filter;
mod index;
mod pointer;
mod pos;
mod sense;
mod splitter;
mod synset;

pub use config::Config;
pub use data::{parse_data_line, FrameData, Synset, WordData};
pub use dictionary::WordNet;
pub use error::{Error, Result};
pub use filter::{ExactMatchFilter, TermFilter};
pub use index::{parse_index_line, IndexTerm};
pub use pointer::{describe as describe_pointer, Pointer};
pub use pos::PartOfSpeech;
pub use sense::resolve_sense_number;
pub use splitter::LineSplitter;
pub use synset::{DictSource, LazySynset, SynsetId};
