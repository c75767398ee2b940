use super::document::Document;
use super::term::{Term, TermMetaData};
use super::vector::FeatureVector;
use std::collections::HashMap;

/// fitted bag-of-words vocabulary; immutable once built
///
/// tokens are stored in feature-index order, which is lexicographic order of the retained
/// tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    /// retained `Term`s, position == feature index
    terms: Vec<Term>,

    /// corpus statistics, parallel to `terms`
    metadata: Vec<TermMetaData>,

    /// reverse lookup from `Term` to feature index
    index: HashMap<Term, usize>,

    /// cap that was in effect when the vocabulary was fitted
    max_features: usize,
}

impl Vocabulary {
    /// build a vocabulary from the given documents, keeping at most `max_features` terms
    ///
    /// # Notes
    ///
    /// terms are ranked by total corpus frequency (descending); terms with equal frequency are
    /// ranked lexicographically, so the cutoff is deterministic
    pub(crate) fn fit(documents: &[Document], max_features: usize) -> Self {
        let mut corpus: HashMap<&Term, TermMetaData> = HashMap::new();

        for document in documents {
            for (term, doc_metadata) in document.terms() {
                let metadata = corpus.entry(term).or_default();
                *metadata.count_mut() += doc_metadata.count();
                *metadata.document_frequency_mut() += 1;
            }
        }

        let mut ranked = corpus.into_iter().collect::<Vec<_>>();

        ranked.sort_by(|(a_term, a_meta), (b_term, b_meta)| {
            b_meta
                .count()
                .cmp(&a_meta.count())
                .then_with(|| a_term.cmp(b_term))
        });
        ranked.truncate(max_features);

        // feature indices follow lexicographic order of what survived the cutoff
        ranked.sort_by(|(a_term, _), (b_term, _)| a_term.cmp(b_term));

        let (terms, metadata) = ranked
            .into_iter()
            .map(|(term, metadata)| (term.clone(), metadata))
            .unzip();

        Self::from_parts(terms, metadata, max_features)
    }

    /// assemble a vocabulary from terms already in index order and their statistics
    pub(crate) fn from_parts(
        terms: Vec<Term>,
        metadata: Vec<TermMetaData>,
        max_features: usize,
    ) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(position, term)| (term.clone(), position))
            .collect();

        Self {
            terms,
            metadata,
            index,
            max_features,
        }
    }

    /// count how often each vocabulary term occurs in `document`; unknown terms are ignored
    pub(crate) fn project(&self, document: &Document) -> FeatureVector {
        let mut vector = FeatureVector::zeroed(self.len());

        for (term, metadata) in document.terms() {
            if let Some(&position) = self.index.get(term) {
                vector.counts_mut()[position] = metadata.count();
            }
        }

        vector
    }

    /// number of features
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// true when fitted on a corpus without any usable tokens
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// cap that was in effect when the vocabulary was fitted
    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// feature names in index order
    pub fn tokens(&self) -> Vec<&str> {
        self.terms.iter().map(|term| term.raw()).collect()
    }

    /// feature index of `token`, if it's part of the vocabulary
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(&Term::new(token)).copied()
    }

    /// total number of times `token` was seen across the fitting corpus
    pub fn frequency(&self, token: &str) -> Option<u32> {
        self.index_of(token)
            .map(|position| self.metadata[position].count())
    }

    /// number of fitting documents that contained `token`
    pub fn document_frequency(&self, token: &str) -> Option<u32> {
        self.index_of(token)
            .map(|position| self.metadata[position].document_frequency())
    }

    /// `Term`s and their statistics in index order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Term, &TermMetaData)> {
        self.terms.iter().zip(self.metadata.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// helper for this test suite
    fn fit(corpus: &[&str], max_features: usize) -> Vocabulary {
        let documents = corpus
            .iter()
            .map(|text| Document::new(text))
            .collect::<Vec<_>>();

        Vocabulary::fit(&documents, max_features)
    }

    #[test]
    /// indices follow lexicographic order and statistics are summed over the corpus
    fn vocabulary_indices_and_statistics() {
        let vocab = fit(&["food was great", "great food great staff"], 10);

        assert_eq!(vocab.tokens(), ["food", "great", "staff", "was"]);
        assert_eq!(vocab.index_of("great"), Some(1));
        assert_eq!(vocab.frequency("great"), Some(3));
        assert_eq!(vocab.document_frequency("great"), Some(2));
        assert_eq!(vocab.document_frequency("staff"), Some(1));
        assert_eq!(vocab.index_of("bland"), None);
        assert_eq!(vocab.max_features(), 10);
    }

    #[test]
    /// most frequent terms survive the cap, ties go to the lexicographically smaller term
    fn vocabulary_cutoff_is_deterministic() {
        let vocab = fit(&["zeta alpha beta", "zeta beta gamma", "zeta delta"], 3);

        // zeta=3, beta=2, then alpha/gamma/delta tie at 1 -> alpha wins
        assert_eq!(vocab.tokens(), ["alpha", "beta", "zeta"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    /// projection ignores unknown terms and keeps vocabulary length
    fn vocabulary_projection() {
        let vocab = fit(&["food was great", "great food great staff"], 10);

        let vector = vocab.project(&Document::new("Great great GREAT food, never bland"));

        assert_eq!(vector.len(), 4);
        assert_eq!(vector.as_slice(), &[1, 3, 0, 0]);
    }

    #[test]
    /// a corpus without tokens yields an empty vocabulary and empty vectors
    fn vocabulary_empty_corpus() {
        let vocab = fit(&["", "a ! i"], 10);

        assert!(vocab.is_empty());
        assert!(vocab.project(&Document::new("anything")).is_empty());
    }
}
