use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Depth-first walk over the stored words, in `char` order.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            for c in node.child_letters().into_iter().rev() {
                if let Some(child) = node.get_child(c) {
                    let mut child_path = path.clone();
                    child_path.push(c);
                    self.stack.push((child, child_path));
                }
            }
            if node.is_terminal {
                return Some(path);
            }
        }
        None
    }
}

impl Trie {
    pub fn words(&self) -> Words<'_> {
        Words { stack: vec![(&self.root, String::new())] }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::Trie;

    #[test]
    fn words_come_out_sorted() {
        let trie: Trie = vec!["robe", "bed", "bored", "bore", "be"].into_iter().collect();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["be", "bed", "bore", "bored", "robe"]);
    }

    #[test]
    fn empty_trie_has_no_words() {
        assert_eq!(Trie::new().words().count(), 0);
    }

    #[test]
    fn words_round_trip_through_a_new_trie() {
        let trie: Trie = vec!["yore", "byre", "orby"].into_iter().collect();
        let copy: Trie = trie.words().collect::<Vec<_>>().iter().map(|x| x.as_str()).collect();
        assert_eq!(trie, copy);
    }
}
