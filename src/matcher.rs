//! String-facing convenience layer over the core trie.
//!
//! [`PrefixMatcher`] wraps a `Trie<char>` with the behavior a consuming
//! service wants from an autocomplete dictionary: loading word lists from
//! iterators or files, sorted owned results, and a small result cache for
//! short prefixes, which carry most of the query traffic and the largest
//! result sets.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::trie::Trie;

/// Prefixes up to this many characters have their match lists cached.
const CACHED_PREFIX_LEN: usize = 3;

/// A word dictionary answering prefix queries over `String`s.
///
/// Matching operates on `char`s (Unicode scalar values), one edge per
/// scalar, with no normalization: words match exactly as supplied.
///
/// The matcher is single-threaded: the result cache uses interior
/// mutability, so it is not `Sync`. Share one per thread, or serialize
/// access externally.
///
/// # Examples
///
/// ```
/// use libtrie::matcher::PrefixMatcher;
///
/// let matcher = PrefixMatcher::from_words(["cat", "car", "cart", "dog"]);
/// assert!(matcher.has_match("ca"));
/// assert_eq!(matcher.matches("ca"), ["car", "cart", "cat"]);
/// assert!(matcher.matches("z").is_empty());
/// ```
pub struct PrefixMatcher {
    trie: Trie<char>,
    cache: RefCell<HashMap<String, Vec<String>>>,
}

impl PrefixMatcher {
    /// Creates an empty matcher.
    pub fn new() -> Self {
        PrefixMatcher {
            trie: Trie::new(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Builds a matcher from an iterator of words.
    ///
    /// Duplicate words collapse into one entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        info!(words = trie.len(), "prefix matcher initialized");
        PrefixMatcher {
            trie,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Builds a matcher from a word file, one word per line.
    ///
    /// Empty lines are skipped, and lines starting with '#' are treated as
    /// comments and ignored.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut trie = Trie::new();

        // Instead of using BufReader::lines() we call read_line repeatedly,
        // which allows us to reuse the same string instead of allocating a
        // new string for every line.
        let mut buf = String::with_capacity(80);
        loop {
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Err(e) => return Err(e),
                _ => {}
            }
            let word = buf.trim_end();
            if !word.is_empty() && !is_comment(word) {
                trie.insert(word);
            }
            buf.clear();
        }

        info!(words = trie.len(), "prefix matcher loaded from word file");
        Ok(PrefixMatcher {
            trie,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// Adds a word to the matcher.
    ///
    /// Returns `true` if the word was newly added. Cached match lists are
    /// invalidated when the dictionary changes.
    pub fn add_word(&mut self, word: &str) -> bool {
        let added = self.trie.insert(word);
        if added {
            self.cache.get_mut().clear();
        }
        added
    }

    /// Returns `true` if any word in the dictionary starts with `prefix`.
    ///
    /// Blank prefixes (empty or whitespace-only) never match; see
    /// [`matches`](PrefixMatcher::matches).
    pub fn has_match(&self, prefix: &str) -> bool {
        if prefix.trim().is_empty() {
            return false;
        }
        self.trie.has_prefix(prefix)
    }

    /// Returns every word starting with `prefix`, sorted ascending.
    ///
    /// Blank prefixes (empty or whitespace-only) yield an empty result:
    /// the matcher refuses to enumerate the whole dictionary, matching the
    /// service behavior it is modeled on. Use the underlying
    /// [`Trie::words`] when a full listing is wanted.
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        if prefix.trim().is_empty() {
            debug!("blank prefix, returning no matches");
            return Vec::new();
        }

        if let Some(cached) = self.cache.borrow().get(prefix) {
            debug!(prefix, results = cached.len(), "prefix cache hit");
            return cached.clone();
        }

        let mut matches: Vec<String> = self
            .trie
            .words_with_prefix(prefix)
            .into_iter()
            .map(|word| word.iter().collect())
            .collect();
        matches.sort_unstable();
        debug!(prefix, results = matches.len(), "prefix matched");

        if prefix.chars().count() <= CACHED_PREFIX_LEN {
            self.cache
                .borrow_mut()
                .insert(prefix.to_owned(), matches.clone());
        }

        matches
    }

    /// Returns the number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for PrefixMatcher {
    fn default() -> Self {
        PrefixMatcher::new()
    }
}

impl std::fmt::Debug for PrefixMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixMatcher")
            .field("words", &self.trie.len())
            .finish()
    }
}

/// Returns true if this line is a comment.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_matcher() -> PrefixMatcher {
        PrefixMatcher::from_words(["cat", "car", "cart", "dog"])
    }

    #[test]
    fn matches_are_sorted() {
        let matcher = sample_matcher();
        assert_eq!(matcher.matches("ca"), ["car", "cart", "cat"]);
        assert_eq!(matcher.matches("do"), ["dog"]);
        assert_eq!(matcher.matches("car"), ["car", "cart"]);
    }

    #[test]
    fn absent_prefix_yields_nothing() {
        let matcher = sample_matcher();
        assert!(!matcher.has_match("z"));
        assert!(matcher.matches("z").is_empty());
    }

    #[test]
    fn blank_prefix_is_refused() {
        let matcher = sample_matcher();
        assert!(!matcher.has_match(""));
        assert!(!matcher.has_match("   "));
        assert!(matcher.matches("").is_empty());
        assert!(matcher.matches("   ").is_empty());
    }

    #[test]
    fn duplicate_words_collapse() {
        let matcher = PrefixMatcher::from_words(["cat", "cat", "cat"]);
        assert_eq!(matcher.word_count(), 1);
        assert_eq!(matcher.matches("c"), ["cat"]);
    }

    #[test]
    fn short_prefixes_are_cached() {
        let matcher = sample_matcher();
        let first = matcher.matches("ca");
        assert!(matcher.cache.borrow().contains_key("ca"));
        assert_eq!(matcher.matches("ca"), first);
    }

    #[test]
    fn long_prefixes_are_not_cached() {
        let matcher = sample_matcher();
        matcher.matches("cart");
        assert!(!matcher.cache.borrow().contains_key("cart"));
    }

    #[test]
    fn add_word_invalidates_cache() {
        let mut matcher = sample_matcher();
        assert_eq!(matcher.matches("ca"), ["car", "cart", "cat"]);
        assert!(matcher.add_word("cab"));
        assert!(matcher.cache.borrow().is_empty());
        assert_eq!(matcher.matches("ca"), ["cab", "car", "cart", "cat"]);
    }

    #[test]
    fn add_existing_word_keeps_cache() {
        let mut matcher = sample_matcher();
        matcher.matches("ca");
        assert!(!matcher.add_word("cat"));
        assert!(matcher.cache.borrow().contains_key("ca"));
    }

    #[test]
    fn from_file_skips_blanks_and_comments() {
        let path = std::env::temp_dir().join(format!(
            "libtrie-matcher-test-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "# dictionary fixture\ncat\ncar\n\ncart\n  # indented comment\ndog\n")
            .unwrap();
        let matcher = PrefixMatcher::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(matcher.word_count(), 4);
        assert_eq!(matcher.matches("ca"), ["car", "cart", "cat"]);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let res = PrefixMatcher::from_file("/nonexistent/words.txt");
        assert!(res.is_err());
    }

    #[test]
    fn comment_lines() {
        assert!(is_comment("# This is a comment"));
        assert!(is_comment("        # whitespace before the pound"));
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
    }

    #[test]
    fn empty_matcher() {
        let matcher = PrefixMatcher::new();
        assert!(matcher.is_empty());
        assert_eq!(matcher.word_count(), 0);
        assert!(!matcher.has_match("a"));
        assert!(matcher.matches("a").is_empty());
    }

    #[test]
    fn unicode_words_match_per_scalar() {
        let matcher = PrefixMatcher::from_words(["授人以鱼", "授人以渔"]);
        assert!(matcher.has_match("授人"));
        assert_eq!(matcher.matches("授人以"), ["授人以渔", "授人以鱼"]);
    }
}
