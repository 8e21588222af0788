use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

pub(crate) const ROOT_LETTER: char = '\0';

/// One letter position, shared by every word passing through it.
#[derive(PartialEq, Eq, Default)]
pub(crate) struct TrieNode {
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
    pub(crate) children: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub(crate) fn root() -> TrieNode {
        TrieNode::new(ROOT_LETTER)
    }

    pub(crate) fn new(letter: char) -> TrieNode {
        TrieNode {
            letter,
            is_terminal: false,
            children: HashMap::new(),
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// Letters of the children, sorted so output built from them is stable.
    pub(crate) fn child_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.children.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode) {
        f(self);
        self.child_letters().iter()
            .filter_map(|c| self.get_child(*c))
            .for_each(|child| child.traverse_prefix(f));
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.child_letters())
            .finish()
    }
}
