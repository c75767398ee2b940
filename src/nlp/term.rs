use std::borrow::BorrowMut;

/// single word term for text processing
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Clone)]
pub(crate) struct Term {
    /// underlying string that the term represents
    raw: String,
}

impl Term {
    /// given a word, create a new `Term`
    pub(crate) fn new(word: &str) -> Self {
        Self {
            raw: word.to_owned(),
        }
    }

    /// return a reference to the underlying string
    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }
}

/// metadata to be associated with a `Term`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TermMetaData {
    /// number of times the associated `Term` was seen
    count: u32,

    /// number of documents the associated `Term` appeared in
    document_frequency: u32,
}

impl TermMetaData {
    /// create metadata from already known statistics
    pub(crate) fn new(count: u32, document_frequency: u32) -> Self {
        Self {
            count,
            document_frequency,
        }
    }

    /// mutable reference to the number of times a `Term` was seen
    pub(crate) fn count_mut(&mut self) -> &mut u32 {
        self.count.borrow_mut()
    }

    /// number of times a `Term` was seen
    pub(crate) fn count(&self) -> u32 {
        self.count
    }

    /// mutable reference to the number of documents a `Term` appeared in
    pub(crate) fn document_frequency_mut(&mut self) -> &mut u32 {
        self.document_frequency.borrow_mut()
    }

    /// number of documents a `Term` appeared in
    pub(crate) fn document_frequency(&self) -> u32 {
        self.document_frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// test accessors for correctness
    fn nlp_term_accessor_test() {
        let term = Term::new("stuff");
        assert_eq!(term.raw(), "stuff");
    }

    #[test]
    /// test accessors for correctness
    fn nlp_term_metadata_accessor_test() {
        let mut metadata = TermMetaData::default();

        *metadata.count_mut() += 1;
        assert_eq!(metadata.count(), 1);

        *metadata.document_frequency_mut() += 2;
        assert_eq!(metadata.document_frequency(), 2);

        assert_eq!(TermMetaData::new(1, 2), metadata);
    }
}
