pub mod board;
pub mod path;
pub mod position;
pub mod search;
pub mod searchconfig;

pub use board::Board;
pub use path::SearchPath;
pub use position::Position;
pub use search::{find_words, Searcher};
pub use searchconfig::SearchConfig;
