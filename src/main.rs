use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use boggle_tools::alphabet::normalize;
use boggle_tools::{Board, FileFormat, Position, SearchConfig, Wordlist};


/// Find every dictionary word that can be traced on a Boggle board.
#[derive(StructOpt)]
#[structopt(name = "boggle-tools")]
struct Cli {
    /// The word list, one word per line
    #[structopt(parse(from_os_str))]
    dictionary: PathBuf,
    /// Board letters, row-major, optionally split into rows by whitespace
    #[structopt(short, long, required_unless = "random")]
    board: Option<String>,
    /// Side length of the board; inferred from --board when omitted
    #[structopt(short, long, conflicts_with = "random")]
    dimension: Option<usize>,
    /// Solve a random board of this size instead (implies --normalize)
    #[structopt(long, conflicts_with = "board")]
    random: Option<usize>,
    /// Seed for --random
    #[structopt(long)]
    seed: Option<u64>,
    /// Upper-case words and board letters and drop anything outside A-Z
    #[structopt(long)]
    normalize: bool,
    /// Column separator of the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word, used with --delimiter
    #[structopt(long)]
    word_column: Option<usize>,
    /// Longest word to look for
    #[structopt(long)]
    max_length: Option<usize>,
    /// Print the cells used for each word
    #[structopt(long)]
    paths: bool,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    dimension: usize,
    board: String,
    words: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a BTreeMap<String, Vec<Position>>>,
}

fn read_board(args: &Cli, normalize_letters: bool) -> boggle_tools::Result<Board> {
    if let Some(dimension) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Board::random(dimension, &mut rng);
    }
    let letters = args.board.clone().unwrap_or_default();
    let letters = if normalize_letters {
        letters.split_whitespace().map(normalize).collect::<Vec<_>>().join(" ")
    } else {
        letters
    };
    match args.dimension {
        Some(dimension) => Board::from_letters(dimension, &letters.split_whitespace().collect::<String>()),
        None => Board::parse(&letters),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();
    let normalize_letters = args.normalize || args.random.is_some();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .normalize(normalize_letters)
        .build();
    let wl = Wordlist::from_file(&args.dictionary, format)?;
    let board = read_board(&args, normalize_letters)?;
    let config = SearchConfig::builder().max_length(args.max_length).build();

    let start = Instant::now();
    let paths = wl.solve_with_paths(&board, &config);
    let words: Vec<&str> = paths.keys().map(|x| x.as_str()).collect();
    info!("{} words in {:.3}s", words.len(), start.elapsed().as_secs_f64());

    if args.json {
        let report = Report {
            dimension: board.dimension(),
            board: board.cells().iter().collect(),
            words,
            paths: if args.paths { Some(&paths) } else { None },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", board);
        println!();
        for (word, path) in &paths {
            if args.paths {
                let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                println!("{} {}", word, cells.join(" "));
            } else {
                println!("{}", word);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use super::Cli;

    #[test]
    fn random_board_rejects_explicit_dimension() {
        let args = ["boggle-tools", "words.txt", "--random", "4", "--dimension", "3"];
        assert!(Cli::from_iter_safe(&args).is_err());
    }

    #[test]
    fn board_with_dimension_is_accepted() {
        let args = ["boggle-tools", "words.txt", "--board", "yoxrbaved", "--dimension", "3"];
        let cli = Cli::from_iter_safe(&args).unwrap();
        assert_eq!(cli.dimension, Some(3));
    }
}
