use proptest::prelude::*;

use wndb::{parse_data_line, parse_index_line, LineSplitter, PartOfSpeech, SynsetId};

proptest! {
	#[test]
	fn global_id_round_trips(prefix in 1u64..=4, offset in 0u64..100_000_000) {
		let id = prefix * 100_000_000 + offset;
		let decoded = SynsetId::from_global_id(id).unwrap();
		prop_assert_eq!(decoded.offset, offset);
		prop_assert_eq!(decoded.pos.prefix() as u64, prefix);
		prop_assert_eq!(decoded.global_id().unwrap(), id);
	}

	#[test]
	fn other_prefixes_are_rejected(prefix in prop_oneof![Just(0u64), 5u64..=9], offset in 0u64..100_000_000) {
		prop_assert!(SynsetId::from_global_id(prefix * 100_000_000 + offset).is_err());
	}

	#[test]
	fn wide_offsets_have_no_id(pos in prop::sample::select(PartOfSpeech::ALL.to_vec()), offset in 100_000_000u64..u64::MAX) {
		prop_assert!(SynsetId::new(pos, offset).global_id().is_err());
	}

	#[test]
	fn lemma_underscores_become_spaces(lemma in "[a-zA-Z0-9_.'/-]{1,24}") {
		let line = format!("{} n 1 0 1 0 00001740", lemma);
		let term = parse_index_line(&line).unwrap().unwrap();
		prop_assert_eq!(term.lemma, lemma.replace('_', " "));
	}

	#[test]
	fn synset_equality_is_key_only(
		offset in 1u64..100_000_000,
		lex in 0u32..45,
		word_a in "[a-z_]{1,12}",
		word_b in "[a-z_]{1,12}",
	) {
		let a = parse_data_line(&format!("{:08} {:02} n 01 {} 0 000 | first", offset, lex, word_a)).unwrap().unwrap();
		let b = parse_data_line(&format!("{:08} {:02} n 01 {} 0 000 | second", offset, lex, word_b)).unwrap().unwrap();
		let c = parse_data_line(&format!("{:08} {:02} v 01 {} 0 000 00 | third", offset, lex, word_a)).unwrap().unwrap();
		prop_assert_eq!(&a, &b);
		prop_assert_eq!(&b, &a);
		prop_assert_ne!(&a, &c);
		prop_assert_eq!(a.id(), SynsetId::new(PartOfSpeech::Noun, offset));
	}

	#[test]
	fn splitter_matches_whitespace_split(line in "[a-z ]{0,40}") {
		let tokens: Vec<&str> = LineSplitter::new(&line, ' ').collect();
		let expected: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
		prop_assert_eq!(tokens, expected);
	}
}
