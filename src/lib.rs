pub mod stemming;
pub mod stemmed_set;
pub mod word_filtering;
pub mod fs_helpers;

pub use stemmed_set::StemmedSet;
pub use stemming::{Stemmer, PorterStemmer, Lowercase, CachedStemmer};
