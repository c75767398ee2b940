use super::model::Vocabulary;
use super::term::{Term, TermMetaData};
use crate::{traits::TextSerialize, VECTORIZER_STATE_VERSION};
use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// default type name for serialized vectorizer state
fn serialized_type() -> String {
    String::from("vectorizer")
}

/// versioned, on-disk representation of a fitted `Vocabulary`
///
/// `tokens`, `frequencies`, and `document_frequencies` are parallel arrays in feature-index
/// order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct VocabularyState {
    #[serde(rename = "type", default = "serialized_type")]
    /// Name of this type of struct, used for serialization, i.e. `{"type":"vectorizer"}`
    kind: String,

    /// format version the state was written with
    version: u32,

    /// vocabulary cap in effect when the vocabulary was fitted
    max_features: usize,

    /// feature names
    tokens: Vec<String>,

    /// total corpus frequency per token
    frequencies: Vec<u32>,

    /// number of fitting documents containing each token
    document_frequencies: Vec<u32>,
}

impl From<&Vocabulary> for VocabularyState {
    fn from(vocabulary: &Vocabulary) -> Self {
        let mut tokens = Vec::with_capacity(vocabulary.len());
        let mut frequencies = Vec::with_capacity(vocabulary.len());
        let mut document_frequencies = Vec::with_capacity(vocabulary.len());

        for (term, metadata) in vocabulary.entries() {
            tokens.push(term.raw().to_owned());
            frequencies.push(metadata.count());
            document_frequencies.push(metadata.document_frequency());
        }

        Self {
            kind: serialized_type(),
            version: VECTORIZER_STATE_VERSION,
            max_features: vocabulary.max_features(),
            tokens,
            frequencies,
            document_frequencies,
        }
    }
}

impl VocabularyState {
    /// validate the state and rebuild the `Vocabulary` it describes
    pub(crate) fn into_vocabulary(self) -> Result<Vocabulary> {
        ensure!(
            self.kind == serialized_type(),
            "expected state of type vectorizer, found {}",
            self.kind
        );

        if self.version != VECTORIZER_STATE_VERSION {
            bail!(
                "unsupported state version {} (expected {})",
                self.version,
                VECTORIZER_STATE_VERSION
            );
        }

        ensure!(
            self.tokens.len() == self.frequencies.len()
                && self.tokens.len() == self.document_frequencies.len(),
            "token and statistics arrays differ in length"
        );
        ensure!(
            self.tokens.len() <= self.max_features,
            "{} tokens exceed max_features {}",
            self.tokens.len(),
            self.max_features
        );

        let mut seen = HashSet::with_capacity(self.tokens.len());

        for token in &self.tokens {
            ensure!(!token.is_empty(), "empty token in vocabulary");
            ensure!(seen.insert(token.as_str()), "duplicate token {}", token);
        }

        ensure!(
            self.tokens.windows(2).all(|pair| pair[0] < pair[1]),
            "tokens are not in feature order"
        );

        let metadata = self
            .frequencies
            .iter()
            .zip(self.document_frequencies.iter())
            .map(|(&count, &document_frequency)| TermMetaData::new(count, document_frequency))
            .collect();

        let terms = self
            .tokens
            .iter()
            .map(|token| Term::new(token))
            .collect();

        Ok(Vocabulary::from_parts(terms, metadata, self.max_features))
    }
}

impl TextSerialize for VocabularyState {
    /// short human readable summary
    fn as_str(&self) -> String {
        format!(
            "vectorizer v{}: {} of {} features\n",
            self.version,
            self.tokens.len(),
            self.max_features
        )
    }

    /// Create a JSON representation of the vectorizer state
    ///
    /// ex:
    /// {
    ///   "type": "vectorizer",
    ///   "version": 1,
    ///   "max_features": 1420,
    ///   "tokens": ["food", "great"],
    ///   "frequencies": [3, 2],
    ///   "document_frequencies": [3, 2]
    /// }
    fn as_json(&self) -> Result<String> {
        serde_json::to_string(&self).context("Could not convert vectorizer state to JSON")
    }
}
