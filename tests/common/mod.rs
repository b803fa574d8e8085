//! Small WordNet-format database written to a temp directory.
//!
//! Data records are written with 8-character placeholders such as `{n:0001}`
//! in place of offsets. Placeholders have the width of a real offset, so the
//! byte position of every record is known before substitution.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::{tempdir, TempDir};

use wndb::WordNet;

const HEADER: &str = "  1 This software and database is being provided to you, the LICENSEE, by  \n  2 Princeton University under the following license.\n";

const DATA_NOUN: &[&str] = &[
	r#"{n:0001} 06 n 01 car 0 003 @ {n:0002} n 0000 ~ {n:0003} n 0000 + {v:0001} v 0101 | a motor vehicle with four wheels; "he needs a car to get to work""#,
	"{n:0002} 06 n 02 motor_vehicle 0 automotive_vehicle 0 001 ~ {n:0001} n 0000 | a self-propelled wheeled vehicle that does not run on rails",
	"{n:0003} 06 n 02 cab 0 taxi 0 001 @ {n:0001} n 0000 | a car driven by a person whose job is to take passengers where they want to go",
	"{n:0004} 06 n 02 car 1 railcar 0 000 | a wheeled vehicle adapted to the rails of railroad",
	"{n:0005} 13 n 01 carrot 0 000 | deep orange edible root of the cultivated carrot plant",
	"{n:0006} 06 n 01 cart 0 000 | a heavy open wagon usually having two wheels",
];

const INDEX_NOUN: &[&str] = &[
	"automotive_vehicle n 1 1 ~ 1 0 {n:0002}",
	"cab n 1 1 @ 1 0 {n:0003}",
	"car n 2 3 @ ~ + 2 1 {n:0001} {n:0004}",
	"carrot n 1 0 1 0 {n:0005}",
	"cart n 1 0 1 0 {n:0006}",
	"motor_vehicle n 1 1 ~ 1 0 {n:0002}",
	"railcar n 1 0 1 0 {n:0004}",
	"taxi n 1 1 @ 1 0 {n:0003}",
];

const DATA_VERB: &[&str] = &[
	r#"{v:0001} 38 v 01 drive 0 002 @ {v:0002} v 0000 + {n:0001} n 0101 02 + 02 00 + 08 01 | operate or control a vehicle; "drive a car""#,
	"{v:0002} 38 v 01 travel 0 001 ~ {v:0001} v 0000 01 + 01 00 | change location; move",
];

const INDEX_VERB: &[&str] = &[
	"drive v 1 2 @ + 1 1 {v:0001}",
	"travel v 1 1 ~ 1 0 {v:0002}",
];

const DATA_ADJ: &[&str] = &[
	"{a:0001} 00 a 01 big 0 001 ! {a:0002} a 0101 | above average in size",
	"{a:0002} 00 a 01 small 0 001 ! {a:0001} a 0101 | limited in size",
	"{a:0003} 00 s 02 galore(ip) 0 in_large_supply(a) 0 001 & {a:0001} a 0000 | existing in abundance",
	"{a:0004} 00 a 01 careful 0 000 | exercising caution",
];

const INDEX_ADJ: &[&str] = &[
	"big a 1 1 ! 1 0 {a:0001}",
	"careful a 1 0 1 0 {a:0004}",
	"galore a 1 1 & 1 0 {a:0003}",
	"in_large_supply a 1 1 & 1 0 {a:0003}",
	"small a 1 1 ! 1 0 {a:0002}",
];

const DATA_ADV: &[&str] = &[
	r"{r:0001} 02 r 01 carefully 0 001 \ {a:0004} a 0101 | in a careful manner",
	"{r:0002} 02 r 01 quickly 0 000 | with rapid movements",
];

const INDEX_ADV: &[&str] = &[
	r"carefully r 1 1 \ 1 0 {r:0001}",
	"quickly r 1 0 1 0 {r:0002}",
];

pub struct Fixture {
	dir: TempDir,
	offsets: HashMap<&'static str, u64>,
}

impl Fixture {
	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Byte offset of the record written with the given placeholder.
	pub fn offset(&self, key: &str) -> u64 {
		self.offsets[key]
	}

	pub fn open(&self) -> WordNet {
		WordNet::open(self.path()).unwrap()
	}

	pub fn remove(&self, file: &str) {
		fs::remove_file(self.path().join(file)).unwrap();
	}
}

pub fn fixture() -> Fixture {
	let data = [
		("data.noun", DATA_NOUN),
		("data.verb", DATA_VERB),
		("data.adj", DATA_ADJ),
		("data.adv", DATA_ADV),
	];
	let index = [
		("index.noun", INDEX_NOUN),
		("index.verb", INDEX_VERB),
		("index.adj", INDEX_ADJ),
		("index.adv", INDEX_ADV),
	];

	let mut offsets = HashMap::new();
	for (_, records) in data {
		let mut offset = HEADER.len();
		for &record in records {
			offsets.insert(&record[..8], offset as u64);
			offset += record.len() + 1;
		}
	}

	let substitute = |records: &[&str]| {
		let mut text = HEADER.to_owned();
		for record in records {
			text.push_str(record);
			text.push('\n');
		}
		for (key, offset) in &offsets {
			text = text.replace(key, &format!("{:08}", offset));
		}
		text
	};

	let dir = tempdir().unwrap();
	for (name, records) in data.into_iter().chain(index) {
		fs::write(dir.path().join(name), substitute(records)).unwrap();
	}
	Fixture { dir, offsets }
}
