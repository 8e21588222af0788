pub mod trie;
pub mod search;
pub mod trie_builder;
pub mod iterators;

mod node;

pub use iterators::Words;
pub use search::Probe;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
