//! # libtrie
//!
//! A prefix-indexed string dictionary for Rust.
//!
//! A [trie](https://en.wikipedia.org/wiki/Trie) stores a set of words so
//! that all words sharing a prefix share a tree path, giving
//! O(prefix length) answers to "does any stored word start with this?"
//! and O(matched subtree) enumeration of every word under a prefix.
//!
//! ## Features
//!
//! - **Generic over edge label type**: works with `char`, `u8`, `u16`, or any
//!   type implementing [`TrieChar`](trie::TrieChar)
//! - **Exclusively-owned nodes**: the tree frees itself on drop; collected
//!   results borrow the stored words, so there is nothing to release by hand
//! - **String layer**: [`PrefixMatcher`](matcher::PrefixMatcher) adds word-file
//!   loading, sorted results, and short-prefix caching on top of the core
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.has_prefix("ca"));
//! assert!(!trie.has_prefix("z"));
//!
//! let mut matches: Vec<String> = trie
//!     .words_with_prefix("car")
//!     .into_iter()
//!     .map(|w| w.iter().collect())
//!     .collect();
//! matches.sort();
//! assert_eq!(matches, ["car", "cart"]);
//! ```
//!
//! For a `String`-in, sorted-`String`s-out surface, use the matcher layer:
//!
//! ```
//! use libtrie::matcher::PrefixMatcher;
//!
//! let matcher = PrefixMatcher::from_words(["cat", "car", "cart", "dog"]);
//! assert_eq!(matcher.matches("ca"), ["car", "cart", "cat"]);
//! assert!(matcher.matches("z").is_empty());
//! ```
//!
//! ## Generic Usage
//!
//! The trie is generic over the edge label type:
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert([1u8, 2, 3]);
//! trie.insert([1u8, 2, 4]);
//!
//! assert!(trie.has_prefix([1u8, 2]));
//! assert!(trie.contains([1u8, 2, 3]));
//! assert!(!trie.contains([1u8, 2, 5]));
//! ```

#![warn(missing_docs)]

/// String-facing matcher with sorted results and short-prefix caching.
pub mod matcher;
/// Core trie data structure: node types, edge-label trait, and the [`Trie`](trie::Trie) container.
pub mod trie;
