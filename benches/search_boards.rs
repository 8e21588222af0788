use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use boggle_tools::alphabet::normalize;
use boggle_tools::{find_words, Board, Trie};

const WORDS: &[&str] = &[
    "bred", "merry", "bed", "lead", "yore", "byre", "abed", "oread", "bore", "orby", "robed",
    "broad", "byroad", "robe", "bored", "derby", "bade", "aero", "read", "orbed", "verb", "aery",
    "bead", "bread", "very", "road", "rate", "tear", "stare", "tone", "note", "stone", "onset",
    "seat", "east", "eats", "teas", "ante", "neat", "rain", "train", "strain", "satire", "artist",
];

fn criterion_benchmark(c: &mut Criterion) {
    let normalized: Vec<String> = WORDS.iter().map(|w| normalize(w)).collect();
    let trie: Trie = normalized.iter().map(String::as_str).collect();
    let mut rng = StdRng::seed_from_u64(1234);
    let boards: Vec<Board> = [4, 5, 8].iter()
        .map(|&n| Board::random(n, &mut rng).unwrap())
        .collect();

    let mut group = c.benchmark_group("random boards");
    for board in &boards {
        let name = format!("{0}x{0}", board.dimension());
        group.bench_function(name, |b| b.iter(|| find_words(board, &trie)));
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
