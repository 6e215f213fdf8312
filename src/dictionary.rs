//! Spell-checking dictionary.
//!
//! A [`Dictionary`] is a [`RedBlackTree`] of words loaded one per line.
//! Text is split on whitespace, each token is passed through
//! [`normalize_word`], and every normalized word is looked up exactly.
//!
//! # Examples
//!
//! ```rust
//! use rbdict::Dictionary;
//!
//! let dictionary = Dictionary::from_reader("there\nonce\nwas\n".as_bytes()).unwrap();
//! let report = dictionary.check_text("There once was a man,");
//!
//! let missing: Vec<&str> = report.misspelled().map(|check| check.word.as_str()).collect();
//! assert_eq!(missing, ["a", "man"]);
//! assert_eq!(report.found_count(), 3);
//! ```

use std::fmt;
use std::io::BufRead;

use crate::config::TreeConfig;
use crate::error::{DictionaryError, InvalidKeyError};
use crate::tracing_helpers::{debug_log, trace_log};
use crate::tree::{NodeRef, RedBlackTree};

/// Normalizes a raw token for lookup.
///
/// The token is trimmed and lower-cased, then a single trailing
/// non-alphabetic character (usually punctuation) is dropped.
///
/// # Examples
///
/// ```rust
/// use rbdict::normalize_word;
///
/// assert_eq!(normalize_word("Nantucket,"), "nantucket");
/// assert_eq!(normalize_word("  Bucket. "), "bucket");
/// assert_eq!(normalize_word("man"), "man");
/// assert_eq!(normalize_word("?"), "");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    let mut word = raw.trim().to_lowercase();
    if word
        .chars()
        .next_back()
        .is_some_and(|last| !last.is_alphabetic())
    {
        word.pop();
    }
    word
}

// =============================================================================
// WordCheck / SpellCheckReport
// =============================================================================

/// The result of looking up one normalized word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCheck {
    /// The normalized word.
    pub word: String,
    /// Whether the dictionary holds it.
    pub found: bool,
}

impl fmt::Display for WordCheck {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(formatter, "{}", self.word)
        } else {
            write!(formatter, "{} (NOT FOUND)", self.word)
        }
    }
}

/// Word-by-word results of checking a text, in text order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellCheckReport {
    checks: Vec<WordCheck>,
}

impl SpellCheckReport {
    /// All checked words, in text order.
    #[must_use]
    pub fn checks(&self) -> &[WordCheck] {
        &self.checks
    }

    /// Number of checked words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no word was checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Number of words the dictionary holds.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.checks.iter().filter(|check| check.found).count()
    }

    /// The words the dictionary does not hold, in text order.
    pub fn misspelled(&self) -> impl Iterator<Item = &WordCheck> {
        self.checks.iter().filter(|check| !check.found)
    }

    /// Iterates over all results.
    pub fn iter(&self) -> std::slice::Iter<'_, WordCheck> {
        self.checks.iter()
    }
}

impl Extend<WordCheck> for SpellCheckReport {
    fn extend<I: IntoIterator<Item = WordCheck>>(&mut self, iter: I) {
        self.checks.extend(iter);
    }
}

impl IntoIterator for SpellCheckReport {
    type Item = WordCheck;
    type IntoIter = std::vec::IntoIter<WordCheck>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpellCheckReport {
    type Item = &'a WordCheck;
    type IntoIter = std::slice::Iter<'a, WordCheck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Dictionary
// =============================================================================

/// A set of known words backed by a [`RedBlackTree`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: RedBlackTree<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(TreeConfig::new())
    }

    /// Creates an empty dictionary whose tree uses `config`.
    #[must_use]
    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            words: RedBlackTree::with_config(config),
        }
    }

    /// Loads one word per line. Lines are trimmed; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::from_reader_with_config(reader, TreeConfig::new())
    }

    /// Like [`Dictionary::from_reader`], with a custom tree configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if reading fails, or
    /// [`DictionaryError::InvalidKey`] if the configuration rejects a line.
    pub fn from_reader_with_config<R: BufRead>(
        reader: R,
        config: TreeConfig,
    ) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::with_config(config);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            dictionary
                .insert(word)
                .map_err(|source| DictionaryError::InvalidKey {
                    line: index + 1,
                    source,
                })?;
        }
        debug_log!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Builds a dictionary from a list of words.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] for the first empty word.
    pub fn from_words<I, S>(words: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Adds a word as-is. Returns `Ok(false)` if it was already known.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if the tree configuration rejects the word.
    pub fn insert(&mut self, word: &str) -> Result<bool, InvalidKeyError> {
        self.words.insert(word.to_owned())
    }

    /// Returns `true` if `word` is known. No normalization is applied.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the tree node holding `word`, if known.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<NodeRef<'_, String>> {
        self.words.lookup(word)
    }

    /// Number of distinct words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word was loaded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &RedBlackTree<String> {
        &self.words
    }

    /// Unwraps the underlying tree.
    #[must_use]
    pub fn into_tree(self) -> RedBlackTree<String> {
        self.words
    }

    /// Normalizes `raw` and looks it up. Returns `None` if nothing is left
    /// after normalization.
    #[must_use]
    pub fn check_word(&self, raw: &str) -> Option<WordCheck> {
        let word = normalize_word(raw);
        if word.is_empty() {
            return None;
        }
        let found = self.contains(&word);
        trace_log!(%word, found, "checked word");
        Some(WordCheck { word, found })
    }

    /// Checks every whitespace-separated token of `text`.
    #[must_use]
    pub fn check_text(&self, text: &str) -> SpellCheckReport {
        SpellCheckReport {
            checks: text
                .split_whitespace()
                .filter_map(|token| self.check_word(token))
                .collect(),
        }
    }

    /// Checks text read line by line from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if reading fails.
    pub fn check_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<SpellCheckReport, DictionaryError> {
        let mut report = SpellCheckReport::default();
        for line in reader.lines() {
            report.extend(self.check_text(&line?));
        }
        Ok(report)
    }
}

impl From<RedBlackTree<String>> for Dictionary {
    fn from(words: RedBlackTree<String>) -> Self {
        Self { words }
    }
}
