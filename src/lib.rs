//! Boggle solving on top of a prefix tree.
//!
//! Load a dictionary into a [`Trie`] (or a [`Wordlist`] when reading from a
//! file), describe the grid with a [`Board`], and ask [`find_words`] for every
//! word that can be traced through adjacent cells without reusing one.
//!
//! ```
//! use boggle_tools::{find_words, Board, Trie};
//!
//! let trie: Trie = vec!["bed", "bore", "robe", "merry"].into_iter().collect();
//! let board = Board::parse("yox rba ved")?;
//! let found = find_words(&board, &trie);
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["bed", "bore", "robe"]);
//! # Ok::<(), boggle_tools::Error>(())
//! ```

pub mod alphabet;
pub mod boggle;
pub mod error;
pub mod wordlist;

pub use crate::boggle::{find_words, Board, Position, SearchConfig, SearchPath, Searcher};
pub use crate::error::{Error, Result};
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::{Probe, Trie, TrieBuilder};
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
