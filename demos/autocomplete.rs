//! Example: autocomplete over a small word list.
//!
//! Builds a `PrefixMatcher`, then runs word lookups, prefix checks, and
//! suggestion queries against it.
//!
//! Run with: cargo run --example autocomplete

use libtrie::matcher::PrefixMatcher;
use libtrie::trie::Trie;

fn main() {
    tracing_subscriber::fmt().init();

    let words = ["bake", "baked", "baker", "cake", "caked", "fake", "lake"];

    let mut trie = Trie::new();
    for word in words {
        trie.insert(word);
    }

    // Word lookup
    println!("Word lookup:");
    for word in ["bake", "baker", "bakes", "cake", "lake", "make"] {
        println!("  {word}: {}", if trie.contains(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["ba", "cak", "ma", "fak"] {
        println!("  {prefix}*: {}", if trie.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Suggestions
    let matcher = PrefixMatcher::from_words(words);
    println!("\nSuggestions:");
    for prefix in ["ba", "bake", "c", "z"] {
        println!("  {prefix}* -> {:?}", matcher.matches(prefix));
    }
}
