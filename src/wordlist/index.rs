use crate::wordlist::trie::Probe;

/// A dictionary that can answer incremental prefix queries.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn probe(&self, prefix: &str) -> Probe;

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'a str>, Self: Sized {
        items.into_iter().for_each(|x| self.add(x));
    }
}
