/// Predicate over a normalized lemma (underscores already replaced by spaces).
pub trait TermFilter {
	fn accept(&self, lemma: &str) -> bool;
}

impl<F> TermFilter for F
	where F: Fn(&str) -> bool
{
	fn accept(&self, lemma: &str) -> bool {
		self(lemma)
	}
}

#[derive(Clone, Debug)]
pub struct ExactMatchFilter {
	word: String,
	case_sensitive: bool,
}

impl ExactMatchFilter {
	pub fn new(word: impl Into<String>, case_sensitive: bool) -> Self {
		ExactMatchFilter { word: word.into(), case_sensitive }
	}
}

impl TermFilter for ExactMatchFilter {
	fn accept(&self, lemma: &str) -> bool {
		if self.case_sensitive {
			lemma == self.word
		} else {
			lemma.eq_ignore_ascii_case(&self.word)
		}
	}
}
