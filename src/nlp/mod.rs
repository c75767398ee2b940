//! small stand-alone bag-of-words library: text cleaning, stop words, stemming, and a fitted
//! count vocabulary

mod constants;
mod document;
mod model;
mod resources;
mod state;
mod term;
mod utils;
mod vector;

pub(crate) use self::document::Document;
pub use self::model::Vocabulary;
pub use self::resources::Resources;
pub(crate) use self::state::VocabularyState;
pub(crate) use self::utils::clean;
pub use self::vector::FeatureVector;
