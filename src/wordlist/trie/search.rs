use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Result of following a string down the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// No stored word starts with the string.
    NotFound,
    /// Some stored word starts with the string, but the string itself is not stored.
    Prefix,
    /// The string is a stored word. Longer words may still extend it.
    Word,
}

impl Probe {
    /// Whether a search should keep extending the string.
    pub fn can_extend(self) -> bool {
        self != Probe::NotFound
    }
}

impl Trie {
    pub fn probe(&self, prefix: &str) -> Probe {
        match self.get_node(prefix) {
            None => Probe::NotFound,
            Some(node) if node.is_terminal => Probe::Word,
            // the root is never terminal, so the empty string matches nothing
            Some(_) if prefix.is_empty() => Probe::NotFound,
            Some(_) => Probe::Prefix,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.probe(word) == Probe::Word
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.get_child(c))
    }
}
