use wordtrie::text::{graphemes, TextTrie};

fn main() {
    // Create our trie
    let mut trie = TextTrie::new();

    // Insert some words whose characters span several code points
    let s = "a̐éö̲";
    let count = graphemes(s).count();
    trie.insert(s);
    trie.insert("cafe\u{301}");
    assert!(trie.search(s));
    assert_eq!(count, 3);

    // A combining accent stays with its base letter
    assert!(trie.contains("caf"));
    assert!(!trie.contains("cafe"));
    println!("completions of \"caf\": {:?}", trie.autocomplete("caf"));
}
