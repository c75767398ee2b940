use super::term::{Term, TermMetaData};
use super::utils::analyze;
use std::collections::HashMap;

/// data container representing a single document, in the nlp sense
#[derive(Debug, Default)]
pub(crate) struct Document {
    /// collection of `Term`s and their associated metadata
    terms: HashMap<Term, TermMetaData>,

    /// number of terms contained within the document
    number_of_terms: usize,
}

impl Document {
    /// create a new `Document` from the given string, tokenized by the bag-of-words analyzer
    pub(crate) fn new(text: &str) -> Self {
        let mut document = Self::default();

        let tokens = analyze(text);

        document.number_of_terms += tokens.len();

        for token in tokens {
            document.add_term(&token);
        }

        document
    }

    /// add a `Term` to the document if it's not already tracked, otherwise increment the number
    /// of times the term has been seen
    fn add_term(&mut self, word: &str) {
        let term = Term::new(word);

        let metadata = self.terms.entry(term).or_default();
        *metadata.count_mut() += 1;
    }

    /// number of times `term` occurs in this document
    pub(crate) fn count(&self, term: &Term) -> u32 {
        self.terms
            .get(term)
            .map(|metadata| metadata.count())
            .unwrap_or_default()
    }

    /// immutable reference to the collection of terms and their metadata
    pub(crate) fn terms(&self) -> &HashMap<Term, TermMetaData> {
        &self.terms
    }

    /// number of terms the current document knows about, repeats included
    pub(crate) fn number_of_terms(&self) -> usize {
        self.number_of_terms
    }
}
