use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::boggle::{Board, Position, SearchConfig, Searcher};
use crate::error::{Error, Result};
use crate::wordlist::trie::{Probe, Trie};

/// A dictionary loaded into a trie, ready to solve boards.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// How to pull words out of a word list file.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator. Without one, the whole line is the word.
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
    /// Upper-case words and drop characters outside A-Z.
    #[builder(default)]
    normalize: bool,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<Cow<'a, str>> {
        let word = match self.delimiter {
            None => line.trim(),
            Some(delimiter) => {
                let word_idx = self.word_column.unwrap_or(0);
                line.split(delimiter).nth(word_idx)
                    .map(str::trim)
                    .ok_or_else(|| Error::MalformedLine {
                        line: line_no,
                        reason: format!("no column {} after splitting on {:?}", word_idx, delimiter),
                    })?
            }
        };
        if self.normalize {
            Ok(Cow::Owned(normalize(word)))
        } else {
            Ok(Cow::Borrowed(word))
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        Wordlist::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: FileFormat) -> Result<Wordlist> {
        let start = Instant::now();
        let mut builder = Trie::builder();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Skipping unreadable line {}: {}", idx + 1, e);
                    failures += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line, idx + 1) {
                Ok(word) if word.is_empty() => {
                    debug!("Line {} has no usable letters", idx + 1);
                    failures += 1;
                }
                Ok(word) => {
                    builder.add(&word);
                    count += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    failures += 1;
                }
            }
        }

        let trie = builder.build();
        info!("Read {} words ({} distinct) in {:.3}s [{} skipped]",
              count, trie.len(), start.elapsed().as_secs_f64(), failures);
        Ok(Wordlist { trie })
    }

    pub fn from_words<'f, I>(words: I) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        Wordlist { trie: words.into_iter().collect() }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn probe(&self, prefix: &str) -> Probe;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn solve(&self, board: &Board, config: &SearchConfig) -> BTreeSet<String> {
        Searcher::new(board, &self.trie).with_config(config.clone()).find_words()
    }

    pub fn solve_with_paths(&self, board: &Board, config: &SearchConfig) -> BTreeMap<String, Vec<Position>> {
        Searcher::new(board, &self.trie).with_config(config.clone()).find_word_paths()
    }
}
