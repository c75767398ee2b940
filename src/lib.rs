//! Text normalization and bag-of-words vectorization for restaurant review sentiment analysis.
//!
//! A [`Preprocessor`] turns raw review text into a cleaned, stemmed token string and maintains
//! a fitted count vectorizer that maps text onto fixed-length [`FeatureVector`]s for a
//! downstream classifier.
//!
//! ```no_run
//! use lib_ml::Preprocessor;
//!
//! let mut preprocessor = Preprocessor::with_defaults()?;
//!
//! let corpus = ["The food was great", "Terrible service, never again"];
//! let cleaned = preprocessor.clean_batch(&corpus);
//! let vectors = preprocessor.fit_vectorize(&cleaned);
//! assert_eq!(vectors.len(), 2);
//!
//! let single = preprocessor.vectorize_single("Great food!")?;
//! assert_eq!(single.len(), vectors[0].len());
//!
//! preprocessor.save_vectorizer("vectorizer.json")?;
//! # Ok::<(), lib_ml::PreprocessorError>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod message;
pub mod nlp;
pub mod preprocessor;
pub mod traits;
pub mod utils;

pub use crate::config::Configuration;
pub use crate::error::{PreprocessorError, Result};
pub use crate::nlp::{FeatureVector, Resources, Vocabulary};
pub use crate::preprocessor::{Preprocessor, VectorizerState};

/// Version pulled from Cargo.toml at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default cap on the number of vocabulary features
pub const DEFAULT_MAX_FEATURES: usize = 1420;

/// Default filename for config file settings
///
/// Expected location is `CONFIG_DIR/lib-ml/` or the current working directory.
pub const DEFAULT_CONFIG_NAME: &str = "lib-ml-config.toml";

/// Version of the on-disk vectorizer format written by `save_vectorizer`
pub const VECTORIZER_STATE_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// asserts default config name is correct
    fn default_config_name() {
        assert_eq!(DEFAULT_CONFIG_NAME, "lib-ml-config.toml");
    }

    #[test]
    /// asserts default max features is correct
    fn default_max_features() {
        assert_eq!(DEFAULT_MAX_FEATURES, 1420);
    }

    #[test]
    /// asserts default version is correct
    fn default_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
