pub mod alphabeta;
pub mod eval;
pub mod movegen;

pub use alphabeta::{Role, SearchError, SearchParams, SearchResult, Searcher};
