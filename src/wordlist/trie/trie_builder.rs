use std::mem::take;

use crate::wordlist::trie::trie::Trie;

/// Chaining front end for filling a [`Trie`].
#[derive(Default)]
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder {
            trie: Trie::new(),
        }
    }

    pub fn add(&mut self, word: &str) -> &mut TrieBuilder {
        self.trie.insert(word);
        self
    }

    pub fn add_all<'f, I>(&mut self, items: I) -> &mut TrieBuilder
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| { self.add(x); });
        self
    }

    /// Hands over the trie built so far and leaves the builder empty.
    pub fn build(&mut self) -> Trie {
        take(&mut self.trie)
    }
}
