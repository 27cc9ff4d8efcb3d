//! Provides a prefix tree for storing keys composed of sequences of atoms,
//! with exact lookups, prefix lookups and autocompletion.
//!
//! Atoms must support the TrieAtom trait.
//!
//! The interface relies on iterators to insert and query keys. Because the
//! trie is based on the concept of atoms, it is up to the user to decide
//! what kind of atoms make most sense of the keys being stored. When
//! processing strings a key can be a sequence of:
//!  - bytes
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!
//! depending on what granularity counts as a shared prefix. The
//! [`crate::text::TextTrie`] type fixes the atom to a grapheme cluster
//! for the common case of storing words.
//!
//! Example 1
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "abcdef".chars();
//! trie.insert(input.clone());
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.search(input.clone())); // Clone the original iterator
//! assert!(trie.search("abcdef".chars())); // Create a new iterator
//! assert!(trie.search(['a', 'b', 'c', 'd', 'e', 'f'])); // Build an array, etc...
//! assert!(!trie.search("abc".chars()));
//! assert!(trie.contains("abc".chars()));
//! ```
//!
//! Example 2
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("the quick brown fox".split_whitespace());
//! trie.insert("the quick red fox".split_whitespace());
//!
//! assert!(trie.contains("the quick".split_whitespace()));
//! let completions: Vec<Vec<&str>> = trie.autocomplete("the quick".split_whitespace());
//! assert_eq!(
//!     completions,
//!     vec![
//!         vec!["the", "quick", "brown", "fox"],
//!         vec!["the", "quick", "red", "fox"],
//!     ]
//! );
//! ```
//!
//! Typical usages for this data structure:
//!  - Autocomplete
//!  - Spell checking
//!  - Symbol tables
//!  - Prefix matching keys

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::mem;

use tracing::{debug, trace};

use crate::iterator::Words;

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Clone + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Clone + Ord {}

/// One position in the trie.
///
/// `key` is the full sequence of atoms from the head down to this node. It
/// is fixed when the node is created and never changes afterwards.
#[derive(Debug)]
pub(crate) struct Node<A> {
    pub(crate) children: BTreeMap<A, Node<A>>,
    pub(crate) key: Vec<A>,
    pub(crate) terminated: bool,
}

impl<A: TrieAtom> Node<A> {
    fn head() -> Self {
        Self::new(Vec::new())
    }

    fn new(key: Vec<A>) -> Self {
        Self {
            children: BTreeMap::new(),
            key,
            terminated: false,
        }
    }
}

// Children are moved onto a heap stack before they drop, so tearing down
// a deep branch does not recurse once per level.
impl<A> Drop for Node<A> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<A>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// Stores a key of atoms as individual nodes.
#[derive(Debug)]
pub struct Trie<A> {
    pub(crate) head: Node<A>,
    count: usize,
    nodes: usize,
}

// Nodes only exist on the path of a stored key, so the set of keys fixes
// the whole shape. Cloning and comparing go through the keys rather than
// recursing down the nodes.
impl<A: TrieAtom> Clone for Trie<A> {
    fn clone(&self) -> Self {
        let mut trie = Trie::new();
        for key in self {
            trie.insert(key.iter().cloned());
        }
        trie
    }
}

impl<A: TrieAtom> PartialEq for Trie<A> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.nodes == other.nodes && self.iter().eq(other.iter())
    }
}

impl<A: TrieAtom> Default for Trie<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new, empty Trie.
    pub fn new() -> Self {
        Self {
            head: Node::head(),
            count: 0,
            nodes: 0,
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::head();
        self.count = 0;
        self.nodes = 0;
    }

    /// Insert the key into the Trie, creating any missing nodes along its
    /// path and marking the last one as the end of a word.
    ///
    /// Returns true if the key was not already present. Inserting a key
    /// more than once leaves the Trie unchanged.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut node = &mut self.head;

        for atom in key {
            let Node { children, key: parent, .. } = node;
            node = match children.entry(atom) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let mut path = Vec::with_capacity(parent.len() + 1);
                    path.extend_from_slice(parent);
                    path.push(entry.key().clone());
                    self.nodes += 1;
                    trace!(depth = path.len(), nodes = self.nodes, "created trie node");
                    entry.insert(Node::new(path))
                }
            };
        }

        if node.terminated {
            return false;
        }
        node.terminated = true;
        self.count += 1;
        trace!(depth = node.key.len(), count = self.count, "stored new key");
        true
    }

    /// Was exactly this key inserted into the Trie?
    pub fn search<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find(key).is_some_and(|node| node.terminated)
    }

    /// Does any key in the Trie start with the supplied prefix?
    ///
    /// Every prefix of an inserted key is contained, including the empty
    /// prefix and the key itself. An empty Trie contains nothing, not even
    /// the empty prefix.
    pub fn contains<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        !self.is_empty() && self.find(prefix).is_some()
    }

    /// Collect every key in the Trie which starts with the supplied
    /// prefix. An empty prefix returns every key.
    ///
    /// Keys are returned in ascending atom order.
    pub fn autocomplete<P, K>(&self, prefix: P) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        let result: Vec<K> = self
            .completions(prefix)
            .map(|key| key.iter().cloned().collect())
            .collect();
        debug!(matches = result.len(), "autocomplete");
        result
    }

    /// Lazily iterate over every key in the Trie which starts with the
    /// supplied prefix.
    pub fn completions<P: IntoIterator<Item = A>>(&self, prefix: P) -> Words<'_, A> {
        match self.find(prefix) {
            Some(node) => Words::new(node),
            None => Words::empty(),
        }
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// How many nodes, not counting the head, does the Trie hold?
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Create an iterator over every key in the Trie, in ascending atom
    /// order.
    pub fn iter(&self) -> Words<'_, A> {
        self.into_iter()
    }

    /// Get the longest common prefixes of the trie.
    ///
    /// There is one prefix per distinct first atom. Each one follows the
    /// only child downwards until it reaches a stored key or a branch.
    pub fn longest_common_prefixes<K: FromIterator<A>>(&self) -> Vec<K> {
        self.head
            .children
            .values()
            .map(|node| {
                let mut current = node;
                while !current.terminated {
                    let mut children = current.children.values();
                    match (children.next(), children.next()) {
                        (Some(only), None) => current = only,
                        _ => break,
                    }
                }
                current.key.iter().cloned().collect()
            })
            .collect()
    }

    // Walk one edge per atom. Stops at the first missing edge.
    fn find<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A>> {
        let mut node = &self.head;
        for atom in key {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> Extend<K> for Trie<A> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(keys);
        trie
    }
}
