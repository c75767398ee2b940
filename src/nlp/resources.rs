use super::constants::{DEFAULT_STOP_WORDS, NEGATION};
use crate::{
    config::Configuration,
    error::{PreprocessorError, Result},
    traits::Stem,
};
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fs::read_to_string;

/// linguistic resources needed by the cleaning pipeline: a stop word set and a stemmer
#[derive(Debug)]
pub struct Resources {
    /// words dropped during cleaning; never contains the negation term
    stop_words: HashSet<String>,

    /// deterministic stemmer applied to surviving tokens
    stemmer: Box<dyn Stem>,
}

impl Resources {
    /// load stop words and build the stemmer described by `config`
    ///
    /// the built-in stop word list is materialized once per process, so calling this
    /// repeatedly is cheap and always produces the same set
    pub fn initialize(config: &Configuration) -> Result<Self> {
        log::trace!("enter: Resources::initialize");

        let stop_words = if config.stopwords_path.is_empty() {
            DEFAULT_STOP_WORDS.clone()
        } else {
            load_stop_words(&config.stopwords_path)?
        };

        let algorithm = stemmer_algorithm(&config.stemmer_language).ok_or_else(|| {
            PreprocessorError::MissingResource(format!(
                "no stemmer available for language {}",
                config.stemmer_language
            ))
        })?;

        log::debug!(
            "loaded {} stop words and the {} stemmer",
            stop_words.len(),
            config.stemmer_language
        );

        let resources = Self {
            stop_words,
            stemmer: Box::new(Stemmer::create(algorithm)),
        };

        log::trace!("exit: Resources::initialize");
        Ok(resources)
    }

    /// swap the stemmer for another implementation
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stem>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// immutable reference to the stop word set
    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// immutable reference to the stemmer
    pub fn stemmer(&self) -> &dyn Stem {
        self.stemmer.as_ref()
    }
}

/// read a newline separated stop word file; blank lines and `#` comments are skipped
fn load_stop_words(path: &str) -> Result<HashSet<String>> {
    let content = read_to_string(path).map_err(|e| {
        PreprocessorError::MissingResource(format!("could not read stop words from {path}: {e}"))
    })?;

    let stop_words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .filter(|word| word != NEGATION)
        .collect::<HashSet<_>>();

    if stop_words.is_empty() {
        return Err(PreprocessorError::MissingResource(format!(
            "stop word file {path} is empty"
        )));
    }

    Ok(stop_words)
}

/// map a language name onto one of the available snowball algorithms
fn stemmer_algorithm(language: &str) -> Option<Algorithm> {
    let algorithm = match language.trim().to_lowercase().as_str() {
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        _ => return None,
    };

    Some(algorithm)
}
