//! collection of all traits used
use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Debug;

/// Stem trait; represents a deterministic, rule-based stemmer that operates on a single
/// lowercase alphabetic token
pub trait Stem: Send + Sync {
    /// reduce `word` to its root form
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl Stem for rust_stemmers::Stemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        rust_stemmers::Stemmer::stem(self, word)
    }
}

impl Debug for dyn Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stem")
    }
}

/// TextSerialize trait; represents different types that are Serialize and also implement
/// as_str / as_json methods
pub trait TextSerialize: Serialize {
    /// Return a String representation of the object, generally the human readable version of the
    /// implementor
    fn as_str(&self) -> String;

    /// Return an NDJSON representation of the object
    fn as_json(&self) -> Result<String>;
}
