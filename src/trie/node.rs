use std::mem;

use super::char_trait::TrieChar;

/// A compact representation of the children of a TrieNode that doesn't allocate
/// until there are at least three children.
///
/// Children are kept in sorted label order so that `Many` can be searched
/// by binary search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Children<C: TrieChar> {
    /// No children.
    None,
    /// Exactly one child.
    One(C, Box<TrieNode<C>>),
    /// Exactly two children, in label order.
    Two(C, Box<TrieNode<C>>, C, Box<TrieNode<C>>),
    /// Three or more children, sorted by label.
    Many(Vec<(C, Box<TrieNode<C>>)>),
}

impl<C: TrieChar> Children<C> {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    fn get(&self, index: usize) -> Option<(C, &TrieNode<C>)> {
        match self {
            Children::None => None,
            Children::One(ch, node) => match index {
                0 => Some((*ch, node.as_ref())),
                _ => None,
            },
            Children::Two(c1, n1, c2, n2) => match index {
                0 => Some((*c1, n1.as_ref())),
                1 => Some((*c2, n2.as_ref())),
                _ => None,
            },
            Children::Many(children) => children.get(index).map(|(ch, node)| (*ch, node.as_ref())),
        }
    }

    /// Returns the child reached by the edge labeled `letter`, if any.
    #[inline]
    fn find(&self, letter: C) -> Option<&TrieNode<C>> {
        match self {
            Children::None => None,
            Children::One(ch, node) => {
                if *ch == letter {
                    Some(node.as_ref())
                } else {
                    None
                }
            }
            Children::Two(c1, n1, c2, n2) => {
                if letter == *c1 {
                    Some(n1.as_ref())
                } else if letter == *c2 {
                    Some(n2.as_ref())
                } else {
                    None
                }
            }
            Children::Many(children) => {
                match children.binary_search_by(|(ch, _)| ch.cmp(&letter)) {
                    Ok(i) => Some(children[i].1.as_ref()),
                    Err(_) => None,
                }
            }
        }
    }

    /// Mutable variant of [`find`](Children::find).
    fn find_mut(&mut self, letter: C) -> Option<&mut TrieNode<C>> {
        match self {
            Children::None => None,
            Children::One(ch, node) => {
                if *ch == letter {
                    Some(node.as_mut())
                } else {
                    None
                }
            }
            Children::Two(c1, n1, c2, n2) => {
                if letter == *c1 {
                    Some(n1.as_mut())
                } else if letter == *c2 {
                    Some(n2.as_mut())
                } else {
                    None
                }
            }
            Children::Many(children) => {
                match children.binary_search_by(|(ch, _)| ch.cmp(&letter)) {
                    Ok(i) => Some(children[i].1.as_mut()),
                    Err(_) => None,
                }
            }
        }
    }

    /// Inserts an edge in sorted position, promoting the representation as
    /// needed (`None` → `One` → `Two` → `Many`).
    ///
    /// `letter` must not already be present.
    fn add(&mut self, letter: C, node: Box<TrieNode<C>>) {
        debug_assert!(self.find(letter).is_none(), "add: letter already exists");
        *self = match mem::replace(self, Children::None) {
            Children::None => Children::One(letter, node),
            Children::One(c1, n1) => {
                if letter < c1 {
                    Children::Two(letter, node, c1, n1)
                } else {
                    Children::Two(c1, n1, letter, node)
                }
            }
            Children::Two(c1, n1, c2, n2) => {
                let mut children = vec![(c1, n1), (c2, n2), (letter, node)];
                children.sort_by(|a, b| a.0.cmp(&b.0));
                Children::Many(children)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|(ch, _)| *ch < letter);
                children.insert(pos, (letter, node));
                Children::Many(children)
            }
        };
    }

    /// Returns the number of children.
    #[inline]
    fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(..) => 1,
            Children::Two(..) => 2,
            Children::Many(children) => children.len(),
        }
    }
}

/// An iterator over the children of a TrieNode, in label order.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    node: &'t TrieNode<C>,
    index: usize,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, &'t TrieNode<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.node.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.node.child_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

/// A node in the prefix trie: one position in the shared prefix space of
/// all inserted words.
///
/// Each node exclusively owns its children; dropping a node drops its
/// entire subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode<C: TrieChar> {
    children: Children<C>,
    /// The full inserted word, present iff some word ends exactly here.
    word: Option<Box<[C]>>,
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates a new node with no children, not marking the end of any word.
    pub(crate) fn new() -> Self {
        TrieNode {
            children: Children::None,
            word: None,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        self.children.find(letter)
    }

    /// Returns the child for `letter`, creating it if absent.
    pub(crate) fn get_or_insert(&mut self, letter: C) -> &mut TrieNode<C> {
        if self.children.find(letter).is_none() {
            self.children.add(letter, Box::new(TrieNode::new()));
        }
        self.children
            .find_mut(letter)
            .expect("edge was just ensured")
    }

    /// True if some inserted word ends exactly at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word.is_some()
    }

    /// The word ending at this node, if any.
    ///
    /// Equal to the concatenation of edge labels on the root-to-node path;
    /// stored so collection doesn't have to reconstruct paths.
    #[inline]
    pub fn word(&self) -> Option<&[C]> {
        self.word.as_deref()
    }

    /// Marks this node as the end of `word`.
    ///
    /// Returns `true` if the node was not already terminal. Re-marking an
    /// already terminal node keeps the existing stored word (the path, and
    /// therefore the word, cannot have changed).
    pub(crate) fn set_word(&mut self, word: Box<[C]>) -> bool {
        if self.word.is_some() {
            return false;
        }
        self.word = Some(word);
        true
    }

    /// Returns an iterator over all children of this node, in label order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
