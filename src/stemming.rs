use std::sync::Arc;

use chashmap::CHashMap;
use log::trace;

/// Reduces a word to its morphological stem.
///
/// Implementations are expected to be deterministic and side-effect free:
/// two words are considered equivalent exactly when their stems are equal.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

impl<S: Stemmer + ?Sized> Stemmer for &S {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<S: Stemmer + ?Sized> Stemmer for Arc<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

/// The Porter algorithm as provided by the `porter-stemmer` crate.
///
/// No case folding is done; wrap in [`Lowercase`] for that.
/// The empty word is its own stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.is_empty() {
            return word.to_owned();
        }
        porter_stemmer::stem(word)
    }
}

/// Lowercases every word before handing it to the inner stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase<S>(pub S);

impl<S: Stemmer> Stemmer for Lowercase<S> {
    fn stem(&self, word: &str) -> String {
        self.0.stem(&word.to_lowercase())
    }
}

/// Memoizes the stems computed by the inner stemmer.
///
/// The cache is a concurrent map, so a shared set can be queried from
/// several threads at once. It is unbounded: every distinct word ever stemmed,
/// queries included, stays cached until [`clear`](Self::clear) is called.
pub struct CachedStemmer<S> {
    inner: S,
    cache: CHashMap<String, String>,
}

impl<S: Stemmer> CachedStemmer<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, cache: CHashMap::new() }
    }

    /// Number of distinct words stemmed so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached stem.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stemmer + Default> Default for CachedStemmer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CachedStemmer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedStemmer")
            .field("inner", &self.inner)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl<S: Stemmer> Stemmer for CachedStemmer<S> {
    fn stem(&self, word: &str) -> String {
        if let Some(stem) = self.cache.get(word) {
            return stem.clone();
        }
        let stem = self.inner.stem(word);
        trace!("caching stem `{}` for `{}`", stem, word);
        self.cache.insert(word.to_owned(), stem.clone());
        stem
    }
}
