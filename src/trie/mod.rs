//! Core prefix trie: the node graph and the [`Trie`] container.

/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Trie node and children module containing the core tree data structures.
pub mod node;
/// Conversions from string and sequence types into word buffers.
pub mod word;

pub use char_trait::TrieChar;
pub use node::{ChildIter, TrieNode};
pub use word::IntoWord;

use smallvec::SmallVec;

/// A prefix-indexed dictionary of words over edge labels of type `C`.
///
/// Words sharing a prefix share a path from the root. The trie only grows:
/// words can be inserted but never removed. Dropping the trie frees every
/// node (each node exclusively owns its children).
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// for word in ["cat", "car", "cart", "dog"] {
///     trie.insert(word);
/// }
///
/// assert!(trie.has_prefix("ca"));
/// assert!(!trie.has_prefix("z"));
///
/// let mut matches: Vec<String> = trie
///     .words_with_prefix("car")
///     .into_iter()
///     .map(|w| w.iter().collect())
///     .collect();
/// matches.sort();
/// assert_eq!(matches, ["car", "cart"]);
/// ```
///
/// The edge label type is generic; any sequence of labels works as a word:
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert([1u8, 2, 3]);
/// trie.insert([1u8, 2, 4]);
///
/// assert!(trie.has_prefix([1u8, 2]));
/// assert!(trie.contains([1u8, 2, 3]));
/// assert!(!trie.contains([1u8, 2]));
/// ```
#[derive(Clone, Debug)]
pub struct Trie<C: TrieChar> {
    root: TrieNode<C>,
    words: usize,
}

impl<C: TrieChar> Trie<C> {
    /// Creates a new, empty trie: a lone non-terminal root.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            words: 0,
        }
    }

    /// Adds a word, creating one node per previously-absent label on its path.
    ///
    /// Returns `true` if the word was newly added, `false` if it was already
    /// present. Insertion is idempotent: re-inserting a word leaves the trie
    /// in the same observable state. The empty word is accepted and marks
    /// the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("cat"));
    /// assert!(!trie.insert("cat")); // already present
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let mut node = &mut self.root;
        for &ch in &word {
            node = node.get_or_insert(ch);
        }
        let added = node.set_word(word.into_vec().into_boxed_slice());
        self.words += added as usize;
        added
    }

    /// Returns `true` if exactly this word was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("cart");
    /// assert!(trie.contains("cart"));
    /// assert!(!trie.contains("car")); // a prefix, but not an inserted word
    /// ```
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.walk(&word.collect_word()).is_some_and(TrieNode::is_word)
    }

    /// Returns `true` if any inserted word starts with `prefix`.
    ///
    /// The walk succeeding is enough: every node lies on the path of at
    /// least one inserted word, so reaching a node means some word has this
    /// prefix whether or not the node is terminal. The empty prefix is
    /// always `true`, even on an empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.has_prefix(""));
    /// trie.insert("cat");
    /// assert!(trie.has_prefix("ca"));
    /// assert!(trie.has_prefix("cat"));
    /// assert!(!trie.has_prefix("cab"));
    /// ```
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.walk(&prefix.collect_word()).is_some()
    }

    /// Returns every inserted word starting with `prefix`.
    ///
    /// A missing prefix yields an empty `Vec`; that is a normal outcome,
    /// not an error. The enumeration order of the result is
    /// implementation-defined — callers requiring determinism must sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["cat", "car", "cart"] {
    ///     trie.insert(word);
    /// }
    ///
    /// assert_eq!(trie.words_with_prefix("cat").len(), 1);
    /// assert_eq!(trie.words_with_prefix("ca").len(), 3);
    /// assert!(trie.words_with_prefix("z").is_empty());
    /// ```
    pub fn words_with_prefix(&self, prefix: impl IntoWord<C>) -> Vec<&[C]> {
        let Some(node) = self.walk(&prefix.collect_word()) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        let mut stack: SmallVec<[&TrieNode<C>; 32]> = SmallVec::new();
        stack.push(node);
        while let Some(node) = stack.pop() {
            if let Some(word) = node.word() {
                matches.push(word);
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        matches
    }

    /// Returns every inserted word.
    pub fn words(&self) -> Vec<&[C]> {
        let empty: &[C] = &[];
        self.words_with_prefix(empty)
    }

    /// Returns a reference to the root node, for manual traversal with
    /// [`TrieNode::get`] and [`TrieNode::children`].
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    /// Returns the number of inserted words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: SmallVec<[&TrieNode<C>; 32]> = SmallVec::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Follows `path` from the root, one edge per label.
    fn walk(&self, path: &[C]) -> Option<&TrieNode<C>> {
        path.iter().try_fold(&self.root, |node, &ch| node.get(ch))
    }
}

impl<C: TrieChar> Default for Trie<C> {
    fn default() -> Self {
        Trie::new()
    }
}
