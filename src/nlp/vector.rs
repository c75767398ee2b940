use serde::{Deserialize, Serialize};
use std::ops::Index;

/// fixed-length bag-of-words count vector; position `i` counts occurrences of vocabulary
/// token `i`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    counts: Vec<u32>,
}

impl FeatureVector {
    /// all-zero vector of the given length
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// mutable access for the vocabulary while projecting a document
    pub(crate) fn counts_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    /// number of features, equal to the size of the vocabulary that produced the vector
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// true when produced by an empty vocabulary
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// count at feature index `index`, if in range
    pub fn get(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    /// view the counts as a slice
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// iterate over the counts in feature order
    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.counts.iter()
    }

    /// sum of all counts, i.e. how many in-vocabulary tokens the text contained
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// consume the vector, returning the raw counts
    pub fn into_inner(self) -> Vec<u32> {
        self.counts
    }
}

impl Index<usize> for FeatureVector {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.counts[index]
    }
}

impl From<Vec<u32>> for FeatureVector {
    fn from(counts: Vec<u32>) -> Self {
        Self { counts }
    }
}
