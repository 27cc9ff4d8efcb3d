//! Provides Trie iterators.
//!
//! Both iterators walk the tree depth first with an explicit stack, so the
//! depth of the trie never limits how far the traversal can go. Children
//! are pushed in reverse order, which yields keys in ascending atom order.
//!
use std::iter::FusedIterator;
use std::mem;

use crate::trie::{Node, Trie, TrieAtom};

/// Iterator over the keys stored beneath a node of a Trie.
///
/// Each item borrows the full key held by the terminal node, so nothing is
/// rebuilt while iterating.
#[derive(Debug)]
pub struct Words<'a, A> {
    stack: Vec<&'a Node<A>>,
}

impl<'a, A: TrieAtom> Words<'a, A> {
    pub(crate) fn new(start: &'a Node<A>) -> Self {
        Self { stack: vec![start] }
    }

    pub(crate) fn empty() -> Self {
        Self { stack: vec![] }
    }
}

impl<'a, A: TrieAtom> Iterator for Words<'a, A> {
    type Item = &'a [A];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values().rev());
            if node.terminated {
                return Some(node.key.as_slice());
            }
        }
        None
    }
}

impl<A: TrieAtom> FusedIterator for Words<'_, A> {}

impl<'a, A: TrieAtom> IntoIterator for &'a Trie<A> {
    type Item = &'a [A];
    type IntoIter = Words<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        Words::new(&self.head)
    }
}

/// Consuming iterator over a Trie.
#[derive(Debug)]
pub struct TrieIntoIterator<A> {
    stack: Vec<Node<A>>,
}

impl<A: TrieAtom> Iterator for TrieIntoIterator<A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(mem::take(&mut node.children).into_values().rev());
            if node.terminated {
                return Some(mem::take(&mut node.key));
            }
        }
        None
    }
}

impl<A: TrieAtom> FusedIterator for TrieIntoIterator<A> {}

impl<A: TrieAtom> IntoIterator for Trie<A> {
    type Item = Vec<A>;
    type IntoIter = TrieIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        TrieIntoIterator {
            stack: vec![self.head],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distr::Alphanumeric, rng, Rng};
    use std::iter::FromIterator;

    fn populated() -> Trie<char> {
        let mut trie: Trie<char> = Trie::new();
        for input in ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"] {
            trie.insert(input.chars());
        }
        trie
    }

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie: Trie<char> = Trie::new();
        assert_eq!(0, trie.iter().count());
        assert_eq!(0, trie.into_iter().count());
    }

    #[test]
    fn it_iterates_and_re_assembles_trie() {
        let mut trie = Trie::new();
        let input = "the quick brown fox".split_whitespace();
        trie.insert(input);

        for key in trie.into_iter() {
            assert_eq!(
                "the quick brown fox",
                Itertools::intersperse(key.into_iter(), " ").collect::<String>()
            );
        }
    }

    #[test]
    fn it_iterates_over_owned_populated_trie() {
        let words: Vec<String> = populated().into_iter().map(String::from_iter).collect();
        assert_eq!(
            vec!["abcdef", "abcdefg", "abd", "abdd", "ez", "z", "ze"],
            words
        );
    }

    #[test]
    fn it_iterates_over_populated_trie() {
        let trie = populated();
        let words: Vec<String> = (&trie).into_iter().map(String::from_iter).collect();
        assert_eq!(
            vec!["abcdef", "abcdefg", "abd", "abdd", "ez", "z", "ze"],
            words
        );
    }

    #[test]
    fn it_stays_exhausted() {
        let trie = populated();
        let mut words = trie.completions("ab".chars());
        assert_eq!(4, words.by_ref().count());
        assert_eq!(None, words.next());
        assert_eq!(None, words.next());
    }

    #[test]
    fn it_finds_in_owned_populated_trie() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut trie: Trie<char> = Trie::new();
        let mut searches: Vec<Vec<char>> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: Vec<char> = rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            trie.insert(entry);
        }
        let keys: Vec<Vec<char>> = trie.clone().into_iter().collect();
        for entry in &searches {
            assert!(keys.contains(entry));
        }
        searches.sort();
        searches.dedup();
        assert_eq!(searches, keys);
    }

    #[test]
    fn it_finds_in_populated_trie() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut trie: Trie<char> = Trie::new();
        let mut searches: Vec<Vec<char>> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: Vec<char> = rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            trie.insert(entry);
        }
        for entry in &searches {
            let mut iterator = trie.iter();
            assert_eq!(
                Some(entry.as_slice()),
                iterator.find(|x| *x == entry.as_slice())
            );
        }
        assert_eq!(trie.len(), trie.iter().count());
    }
}
