use std::{collections::{HashMap, HashSet}, fmt};

use log::{debug, trace};
use serde::{Serialize, Deserialize, Serializer, Deserializer};

use crate::stemming::{Stemmer, PorterStemmer};

/// Insertion-ordered mapping from stem to the representative word of its stem class.
#[derive(Debug, Clone, Default)]
struct Members {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Members {
    /// Duplicate words are skipped. A stem class keeps the position of the first
    /// word that produced it, and its representative is the last distinct word
    /// of that class.
    fn build<I, S>(words: I, stemmer: &S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: Stemmer + ?Sized,
    {
        let mut members = Self::default();
        let mut seen: HashSet<String> = HashSet::new();

        for word in words {
            let word = word.as_ref();
            if seen.contains(word) {
                continue;
            }
            let stem = stemmer.stem(word);
            seen.insert(word.to_owned());
            let word = word.to_owned();

            match members.index.get(&stem) {
                Some(&i) => {
                    trace!("`{}` replaces `{}` as representative of `{}`",
                        word, members.entries[i].1, stem);
                    members.entries[i].1 = word;
                },
                None => {
                    members.index.insert(stem.clone(), members.entries.len());
                    members.entries.push((stem, word));
                },
            }
        }
        members
    }

    fn get(&self, stem: &str) -> Option<&str> {
        self.index.get(stem).map(|&i| self.entries[i].1.as_str())
    }

    fn contains_stem(&self, stem: &str) -> bool {
        self.index.contains_key(stem)
    }
}

/// A set of words compared by their stems rather than by exact spelling.
///
/// Every stem class is held by one representative word. The set is populated
/// once, at construction, and never changes afterwards.
///
/// ```
/// use std::collections::HashSet;
/// use stemmed_set::StemmedSet;
///
/// let s = StemmedSet::new(["university", "navigate"]);
/// assert!(s.contains("navigable"));
/// assert_eq!(s.intersect(["universe", "spam", "eggs"]),
///     HashSet::from(["university".to_owned()]));
/// ```
#[derive(Clone)]
pub struct StemmedSet<S = PorterStemmer> {
    members: Members,
    stemmer: S,
}

impl StemmedSet<PorterStemmer> {
    /// Builds a set using the Porter stemmer.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_stemmer(words, PorterStemmer)
    }
}

impl<S: Stemmer> StemmedSet<S> {
    /// Builds a set, stemming every distinct word once with `stemmer`.
    ///
    /// When several distinct words share a stem, the last of them in input order
    /// becomes the representative; the others are dropped.
    pub fn with_stemmer<I>(words: I, stemmer: S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let members = Members::build(words, &stemmer);
        debug!("built StemmedSet with {} stem classes", members.entries.len());
        Self { members, stemmer }
    }

    /// Returns true if some word of the set shares a stem with `word`.
    pub fn contains(&self, word: &str) -> bool {
        let stem = self.stemmer.stem(word);
        trace!("membership test for `{}` (stem `{}`)", word, stem);
        self.members.contains_stem(&stem)
    }

    /// The representative of the stem class `word` belongs to, if it is in the set.
    pub fn representative(&self, word: &str) -> Option<&str> {
        self.members.get(&self.stemmer.stem(word))
    }

    /// Words of this set whose stem also occurs among the stems of `other`.
    ///
    /// Not symmetric with [`reverse_intersect`](Self::reverse_intersect): the
    /// returned words are always this set's representatives, never words of `other`.
    pub fn intersect<I>(&self, other: I) -> HashSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let result: HashSet<String> = other.into_iter()
            .filter_map(|w| self.members.get(&self.stemmer.stem(w.as_ref())))
            .map(|w| w.to_owned())
            .collect();
        debug!("intersect matched {} stem classes", result.len());
        result
    }

    /// Words of `other` whose stem also occurs in this set.
    ///
    /// The mirror image of [`intersect`](Self::intersect): `other` is collapsed
    /// into stem classes with the same rules as construction, and the
    /// representatives drawn from `other` are returned, not this set's own words.
    pub fn reverse_intersect<I>(&self, other: I) -> HashSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let other = Members::build(other, &self.stemmer);
        let result: HashSet<String> = other.entries.into_iter()
            .filter(|(stem, _)| self.members.contains_stem(stem))
            .map(|(_, word)| word)
            .collect();
        debug!("reverse_intersect matched {} stem classes", result.len());
        result
    }
}

impl<S> StemmedSet<S> {
    /// Number of stem classes, i.e. of representatives.
    pub fn len(&self) -> usize {
        self.members.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.entries.is_empty()
    }

    /// Representatives in stem-class order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.members.entries.iter() }
    }

    /// The stems held by the set, in the same order as [`iter`](Self::iter).
    pub fn stems(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.entries.iter().map(|(stem, _)| stem.as_str())
    }

    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }

    /// Human-readable form, e.g. `StemmedSet(["university", "navigate"])`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<S: Stemmer + Default, W: AsRef<str>> FromIterator<W> for StemmedSet<S> {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        Self::with_stemmer(iter, S::default())
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, word)| word.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a, S> IntoIterator for &'a StemmedSet<S> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> fmt::Display for StemmedSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StemmedSet({:?})", self.iter().collect::<Vec<_>>())
    }
}

impl<S> fmt::Debug for StemmedSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Serialized as the list of representatives.
impl<S> Serialize for StemmedSet<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Rebuilt from a list of words, so stems always come from the set's own stemmer.
impl<'de, S: Stemmer + Default> Deserialize<'de> for StemmedSet<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let words = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::with_stemmer(words, S::default()))
    }
}
