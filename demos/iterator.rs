use rand::{distr::Alphanumeric, rng, Rng};
use std::iter::FromIterator;
use wordtrie::trie::Trie;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random strings (char sequences)
    // composed of between 1 and 10 characters in
    // our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: Vec<char> = rng()
            .sample_iter(&Alphanumeric)
            .take(rng().random_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        trie.insert(entry);
    }

    // iterate over the trie and confirm that all
    // keys are in our search collection. Keys come
    // back in ascending order.
    for key in trie.iter() {
        assert!(searches.iter().any(|s| s.as_slice() == key));
        println!("key: {}", String::from_iter(key));
    }

    // and the same again, restricted to one prefix
    if let Some(first) = searches.first().and_then(|s| s.first()) {
        println!("starting with {first}:");
        for key in trie.completions([*first]) {
            println!("key: {}", String::from_iter(key));
        }
    }
}
