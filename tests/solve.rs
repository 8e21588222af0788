use std::collections::BTreeSet;
use std::io::Write;

use maplit::btreeset;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use boggle_tools::{find_words, Board, FileFormat, Probe, SearchConfig, Searcher, Trie, Wordlist};

fn strings(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|x| x.to_string()).collect()
}

#[test]
fn solves_board_from_word_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "bed\nbore\nrobe\nmerry\nlead").unwrap();

    let wl = Wordlist::from_file(file.path(), FileFormat::builder().build()).unwrap();
    let board = Board::parse("yox\nrba\nved").unwrap();

    assert_eq!(wl.solve(&board, &SearchConfig::new()), btreeset! {
        "bed".to_string(), "bore".to_string(), "robe".to_string()
    });
}

#[test]
fn missing_word_file_is_an_io_error() {
    let result = Wordlist::from_file("/nonexistent/words.txt", FileFormat::builder().build());
    assert!(matches!(result, Err(boggle_tools::Error::Io(_))));
}

#[test]
fn every_prefix_of_every_word_is_at_least_a_prefix() {
    let words = ["abed", "aero", "byroad", "derby", "oread"];
    let trie: Trie = words.iter().copied().collect();
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for end in 1..chars.len() {
            let prefix: String = chars[..end].iter().collect();
            assert_eq!(trie.probe(&prefix), Probe::Prefix, "{}", prefix);
        }
        assert_eq!(trie.probe(word), Probe::Word);
    }
}

#[test]
fn random_boards_only_yield_dictionary_words_with_valid_paths() {
    let words = ["AT", "TA", "EAT", "TEA", "ATE", "RATE", "TEAR", "STAR", "ARTS", "NEST", "SENT",
        "TEN", "NET", "ONE", "NOTE", "TONE", "STONE", "NOTES", "ONSET", "SEAT", "EAST"];
    let trie: Trie = words.iter().copied().collect();
    let dictionary = strings(&words);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let board = Board::random(4, &mut rng).unwrap();
        let paths = Searcher::new(&board, &trie).find_word_paths();
        for (word, path) in &paths {
            assert!(dictionary.contains(word));
            let spelled: String = path.iter().filter_map(|p| board.get(*p)).collect();
            assert_eq!(&spelled, word);
            assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
        }
        let expected: BTreeSet<String> = words.iter()
            .filter(|w| board.trace(w).is_some())
            .map(|w| w.to_string())
            .collect();
        assert_eq!(find_words(&board, &trie), expected, "\n{}", board);
    }
}

#[test]
fn repeated_runs_agree() {
    let board = Board::from_letters(3, "yoxrbaved").unwrap();
    let trie: Trie = vec!["bred", "bread", "broad", "road", "very"].into_iter().collect();
    let first = find_words(&board, &trie);
    let second = find_words(&board, &trie);
    assert_eq!(first, second);
    assert_eq!(first, strings(&["bread", "bred", "broad", "road", "very"]));
}

#[test]
fn inserting_twice_does_not_change_results() {
    let board = Board::from_letters(3, "yoxrbaved").unwrap();
    let once: Trie = vec!["robe", "robed"].into_iter().collect();
    let twice: Trie = vec!["robe", "robed", "robe", "robed"].into_iter().collect();
    assert_eq!(find_words(&board, &once), find_words(&board, &twice));
}
