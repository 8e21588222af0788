use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use tracing::debug;

use crate::boggle::board::Board;
use crate::boggle::path::SearchPath;
use crate::boggle::position::Position;
use crate::boggle::searchconfig::SearchConfig;
use crate::wordlist::index::Index;
use crate::wordlist::trie::Probe;

/// Depth-first search over a board, pruned by a prefix index.
pub struct Searcher<'a, I: Index + ?Sized> {
    board: &'a Board,
    index: &'a I,
    config: SearchConfig,
}

impl<'a, I: Index + ?Sized> Searcher<'a, I> {
    pub fn new(board: &'a Board, index: &'a I) -> Self {
        Searcher { board, index, config: SearchConfig::new() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Every word of the index that can be traced on the board.
    pub fn find_words(&self) -> BTreeSet<String> {
        let start = Instant::now();
        let found: BTreeSet<String> = self.all_matches()
            .map(|path| path.into_parts().0)
            .collect();
        debug!("Found {} words on a {}x{} board in {:?}",
               found.len(), self.board.dimension(), self.board.dimension(), start.elapsed());
        found
    }

    /// Like [`Searcher::find_words`], with one path per word. When a word can
    /// be traced several ways, the path starting earliest in row-major order
    /// wins.
    pub fn find_word_paths(&self) -> BTreeMap<String, Vec<Position>> {
        let mut paths = BTreeMap::new();
        for path in self.all_matches() {
            let (letters, positions) = path.into_parts();
            paths.entry(letters).or_insert(positions);
        }
        paths
    }

    fn all_matches(&self) -> impl Iterator<Item=SearchPath> + '_ {
        self.board.positions()
            .flat_map(move |start| self.search_from(start, &SearchPath::new()))
    }

    fn search_from(&self, position: Position, path: &SearchPath) -> Vec<SearchPath> {
        let mut found = vec![];
        if path.contains(&position) || !self.config.allows(path.len() + 1) {
            return found;
        }
        let letter = match self.board.get(position) {
            Some(letter) => letter,
            None => return found,
        };
        let path = path.extended(position, letter);

        let probe = self.index.probe(path.letters());
        if !probe.can_extend() {
            return found;
        }
        if probe == Probe::Word {
            found.push(path.clone());
        }
        for next in self.board.neighbors(position) {
            found.extend(self.search_from(next, &path));
        }
        found
    }
}

/// Every word of `index` that can be traced on `board`.
pub fn find_words<I: Index + ?Sized>(board: &Board, index: &I) -> BTreeSet<String> {
    Searcher::new(board, index).find_words()
}
