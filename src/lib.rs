//! Provides a prefix tree (trie) for storing keys composed of sequences of
//! atoms, answering three kinds of question about them:
//!  - was this exact key inserted? ([`crate::trie::Trie::search`])
//!  - does any key start with this prefix? ([`crate::trie::Trie::contains`])
//!  - which keys start with this prefix? ([`crate::trie::Trie::autocomplete`])
//!
//! Keys must be supplied as iterators of atoms implementing the
//! [`crate::trie::TrieAtom`] trait. It is up to the user to decide what
//! kind of atoms make most sense of the keys being stored: bytes, chars,
//! grapheme clusters, whole words or numbers.
//!
//! Since the most common use of a trie is to store words, a convenience
//! type, [`crate::text::TextTrie`], is provided. It takes `&str` directly
//! and splits it into extended grapheme clusters.
//!
//! Every node records the full key leading to it, so autocompletion hands
//! back stored keys without rebuilding them from the path.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * text : [`crate::text`]
//! * iterator : [`crate::iterator`]
//!
//! The library logs through `tracing` (node creation at `TRACE`,
//! autocomplete result sizes at `DEBUG`) and never installs a subscriber.

pub mod iterator;

pub mod text;

pub mod trie;

pub use text::TextTrie;
pub use trie::Trie;
