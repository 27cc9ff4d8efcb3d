//! Provides a Trie of words, where each edge is one extended grapheme
//! cluster.
//!
//! A grapheme cluster is what a reader perceives as a single character.
//! It may span several chars, for instance a base letter followed by a
//! combining accent, or a pair of regional indicators forming a flag.
//! Because a cluster is never split, a word ending in "e\u{301}" ('é'
//! written with a combining accent) does not have "e" as a prefix of its
//! last position.
//!
//! ```
//! use wordtrie::text::TextTrie;
//!
//! let mut trie = TextTrie::new();
//! trie.insert("apple");
//! trie.insert("application");
//! trie.insert("amp");
//!
//! assert!(trie.search("apple"));
//! assert!(!trie.search("app"));
//! assert!(trie.contains("app"));
//! assert_eq!(trie.autocomplete("app"), vec!["apple", "application"]);
//! ```
//!
//! If a different unit is wanted, use [`crate::trie::Trie`] directly with
//! `str::chars` or `str::bytes`.

use unicode_segmentation::UnicodeSegmentation;

use crate::trie::Trie;

/// The atom used by a [`TextTrie`].
pub type Grapheme = Box<str>;

/// Split text into the extended grapheme clusters used as edge keys.
pub fn graphemes(text: &str) -> impl Iterator<Item = Grapheme> + Clone + '_ {
    text.graphemes(true).map(Grapheme::from)
}

/// Stores words as sequences of grapheme clusters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextTrie {
    trie: Trie<Grapheme>,
}

impl TextTrie {
    /// Create a new, empty TextTrie.
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Insert a word. Returns true if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.trie.insert(graphemes(word))
    }

    /// Was exactly this word inserted?
    pub fn search(&self, word: &str) -> bool {
        self.trie.search(graphemes(word))
    }

    /// Does any inserted word start with this prefix?
    pub fn contains(&self, prefix: &str) -> bool {
        self.trie.contains(graphemes(prefix))
    }

    /// Every inserted word starting with the prefix, in ascending order.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.trie.autocomplete(graphemes(prefix))
    }

    /// Lazy form of [`TextTrie::autocomplete`].
    pub fn completions<'a>(&'a self, prefix: &str) -> impl Iterator<Item = String> + 'a {
        self.trie.completions(graphemes(prefix)).map(concat)
    }

    /// All stored words, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.trie.iter().map(concat)
    }

    /// How many distinct words are stored?
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Is the TextTrie empty?
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Clear the TextTrie.
    pub fn clear(&mut self) {
        self.trie.clear()
    }

    /// The underlying grapheme-keyed Trie.
    pub fn as_trie(&self) -> &Trie<Grapheme> {
        &self.trie
    }
}

fn concat(key: &[Grapheme]) -> String {
    key.iter().map(|g| &**g).collect()
}

impl<S: AsRef<str>> Extend<S> for TextTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TextTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = TextTrie::new();
        trie.extend(words);
        trie
    }
}
