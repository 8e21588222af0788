use std::fmt::{Debug, Formatter};

use tracing::debug;

use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::search::Probe;
use crate::wordlist::trie::trie_builder::TrieBuilder;

/// Prefix tree over `char`s. Nodes are owned by their parent, so dropping the
/// trie releases the whole tree.
#[derive(PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            len: 0,
        }
    }

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    /// Adds `word`. Inserting a word twice leaves the trie unchanged, and the
    /// empty word is ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            debug!("ignoring empty word");
            return;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if !current.is_terminal {
            current.is_terminal = true;
            self.len += 1;
        }
    }

    pub fn insert_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.insert(x));
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_: &TrieNode| count += 1);
        count
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn probe(&self, prefix: &str) -> Probe {
        Trie::probe(self, prefix)
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'f str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.insert_all(iter);
        trie
    }
}

impl<'f> Extend<&'f str> for Trie {
    fn extend<I: IntoIterator<Item=&'f str>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut |x: &TrieNode| { l.entry(x); });
        l.finish()
    }
}
