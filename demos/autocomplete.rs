//! Load a word list and print the completions of one or more prefixes.
//!
//! ```text
//! RUST_LOG=wordtrie=debug cargo run --example autocomplete -- words.txt ami amp
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordtrie::text::TextTrie;

/// Command line arguments for the autocomplete demo.
#[derive(Parser, Debug)]
#[clap(name = "autocomplete", version, about)]
struct Args {
    /// File holding the words to load, separated by whitespace
    #[clap(value_parser)]
    words: PathBuf,

    /// Prefixes to complete
    #[clap(value_parser)]
    prefixes: Vec<String>,

    /// Only print how many words match each prefix
    #[clap(short, long)]
    count: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let text = fs::read_to_string(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;
    let trie: TextTrie = text.split_whitespace().collect();
    info!(words = trie.len(), path = %args.words.display(), "loaded word list");

    for prefix in &args.prefixes {
        if args.count {
            println!("{prefix}: {}", trie.completions(prefix).count());
            continue;
        }
        let matches = trie.autocomplete(prefix);
        if matches.is_empty() {
            println!("{prefix}: no matches");
        }
        for word in matches {
            println!("{word}");
        }
    }
    Ok(())
}
