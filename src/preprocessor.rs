//! text cleaning and bag-of-words vectorization for review text
use crate::{
    config::Configuration,
    error::{PreprocessorError, Result},
    nlp::{self, Document, FeatureVector, Resources, Vocabulary, VocabularyState},
    traits::Stem,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// whether the vectorizer has a vocabulary to project text onto
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VectorizerState {
    /// no vocabulary yet; fit or load one before vectorizing single texts
    #[default]
    Unfitted,

    /// vocabulary built by `fit_vectorize` or restored by `load_vectorizer`
    Fitted(Vocabulary),
}

/// normalizes raw review text and maintains a fitted count vectorizer
///
/// each instance owns its own resources and vocabulary; `fit_vectorize` and `load_vectorizer`
/// take `&mut self`, so sharing an instance across threads requires external locking
#[derive(Debug)]
pub struct Preprocessor {
    /// stop words and stemmer used by `clean`
    resources: Resources,

    /// UNFITTED until a vocabulary is fitted or loaded
    state: VectorizerState,

    /// vocabulary cap used when fitting
    max_features: usize,
}

impl Preprocessor {
    /// build a preprocessor from the given configuration
    ///
    /// linguistic resources are initialized here, so missing stop word or stemmer data is
    /// reported immediately. When `vectorizer_path` names an existing file, the vocabulary it
    /// contains is loaded as well.
    pub fn new(config: &Configuration) -> Result<Self> {
        log::trace!("enter: Preprocessor::new({:?})", config);

        config.validate()?;

        let mut preprocessor = Self {
            resources: Resources::initialize(config)?,
            state: VectorizerState::Unfitted,
            max_features: config.max_features,
        };

        if let Some(path) = config.vectorizer_path() {
            if path.exists() {
                preprocessor.load_vectorizer(path)?;
            } else {
                log::warn!(
                    "vectorizer {} not found, starting unfitted",
                    path.display()
                );
            }
        }

        log::trace!("exit: Preprocessor::new");
        Ok(preprocessor)
    }

    /// build a preprocessor from the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(&Configuration::default())
    }

    /// swap the stemmer used by `clean` for another implementation
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stem>) -> Self {
        self.resources = self.resources.with_stemmer(stemmer);
        self
    }

    /// strip non-alphabetic characters, lowercase, drop stop words, and stem what remains
    ///
    /// returns an empty string when no token survives
    pub fn clean(&self, text: &str) -> String {
        nlp::clean(
            text,
            self.resources.stop_words(),
            self.resources.stemmer(),
        )
    }

    /// `clean` every text, preserving order and length
    pub fn clean_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|text| self.clean(text.as_ref())).collect()
    }

    /// build a new vocabulary from `texts` and return one feature vector per text
    ///
    /// texts are used as given; pass the output of `clean_batch` to fit on cleaned text.
    /// Any previously held vocabulary is replaced.
    pub fn fit_vectorize<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<FeatureVector> {
        log::trace!("enter: fit_vectorize({} texts)", texts.len());

        let documents = texts
            .iter()
            .map(|text| Document::new(text.as_ref()))
            .collect::<Vec<_>>();

        let vocabulary = Vocabulary::fit(&documents, self.max_features);

        let vectors = documents
            .iter()
            .map(|document| vocabulary.project(document))
            .collect::<Vec<_>>();

        log::debug!(
            "fitted vocabulary with {} features from {} documents ({} tokens)",
            vocabulary.len(),
            documents.len(),
            documents
                .iter()
                .map(Document::number_of_terms)
                .sum::<usize>()
        );

        self.state = VectorizerState::Fitted(vocabulary);

        log::trace!("exit: fit_vectorize -> {} vectors", vectors.len());
        vectors
    }

    /// clean a single raw text and project it onto the fitted vocabulary
    pub fn vectorize_single(&self, text: &str) -> Result<FeatureVector> {
        let vocabulary = self.fitted()?;
        let cleaned = self.clean(text);

        Ok(vocabulary.project(&Document::new(&cleaned)))
    }

    /// `vectorize_single` for every raw text against the current vocabulary, without refitting
    pub fn vectorize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<FeatureVector>> {
        let vocabulary = self.fitted()?;

        Ok(texts
            .iter()
            .map(|text| vocabulary.project(&Document::new(&self.clean(text.as_ref()))))
            .collect())
    }

    /// write the fitted vocabulary to `path`
    pub fn save_vectorizer<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::trace!("enter: save_vectorizer({})", path.display());

        let state = VocabularyState::from(self.fitted()?);

        let file = File::create(path).map_err(|e| PreprocessorError::persistence(path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &state)
            .map_err(|e| PreprocessorError::persistence(path, e))?;

        writer
            .flush()
            .map_err(|e| PreprocessorError::persistence(path, e))?;

        log::trace!("exit: save_vectorizer");
        Ok(())
    }

    /// replace the current vocabulary with the one stored at `path`
    ///
    /// the current state is untouched unless the whole file reads and validates
    pub fn load_vectorizer<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::trace!("enter: load_vectorizer({})", path.display());

        let file = File::open(path).map_err(|e| PreprocessorError::persistence(path, e))?;
        let reader = BufReader::new(file);

        let state: VocabularyState = serde_json::from_reader(reader)
            .map_err(|e| PreprocessorError::persistence(path, e))?;

        let vocabulary = state
            .into_vocabulary()
            .map_err(|e| PreprocessorError::persistence(path, e))?;

        log::debug!(
            "loaded vectorizer with {} features from {}",
            vocabulary.len(),
            path.display()
        );

        self.state = VectorizerState::Fitted(vocabulary);

        log::trace!("exit: load_vectorizer");
        Ok(())
    }

    /// true once a vocabulary has been fitted or loaded
    pub fn is_fitted(&self) -> bool {
        matches!(self.state, VectorizerState::Fitted(_))
    }

    /// the fitted vocabulary, if any
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        match &self.state {
            VectorizerState::Fitted(vocabulary) => Some(vocabulary),
            VectorizerState::Unfitted => None,
        }
    }

    /// current vectorizer state
    pub fn state(&self) -> &VectorizerState {
        &self.state
    }

    /// vocabulary cap used by `fit_vectorize`
    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// fitted vocabulary or the unfitted error
    fn fitted(&self) -> Result<&Vocabulary> {
        self.vocabulary()
            .ok_or(PreprocessorError::UnfittedVectorizer)
    }
}
