use std::fmt::Debug;

/// Trait for types that can serve as edge labels in a trie.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: children are kept in sorted label order
/// - `Debug`: debug printing of nodes
pub trait TrieChar: Copy + Eq + Ord + Debug {}

impl<T: Copy + Eq + Ord + Debug> TrieChar for T {}
