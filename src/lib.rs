// Ataxx engine: reference board plus depth-bounded alpha-beta search
pub mod board;
pub mod openings;
pub mod perft;
pub mod search;

pub use board::{Board, Move, Side};
pub use search::{SearchParams, SearchResult, Searcher};
