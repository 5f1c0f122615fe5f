pub mod moves;
pub mod position;
pub mod square;

pub use moves::{Move, MoveKind};
pub use position::{Board, BoardError, START_LAYOUT};
pub use square::Square;

use serde::{Deserialize, Serialize};

/// Number of columns and rows.
pub const SIDE: i32 = 7;
pub const SQUARES: usize = (SIDE * SIDE) as usize;
/// Consecutive jumps after which the game is decided on material.
pub const JUMP_LIMIT: u32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self { Side::Red => Side::Blue, Side::Blue => Side::Red }
    }

    pub fn from_char(c: char) -> Option<Side> {
        match c.to_ascii_lowercase() { 'r' => Some(Side::Red), 'b' => Some(Side::Blue), _ => None }
    }

    pub fn to_char(self) -> char {
        match self { Side::Red => 'r', Side::Blue => 'b' }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { Side::Red => write!(f, "red"), Side::Blue => write!(f, "blue") }
    }
}

impl std::str::FromStr for Side {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Side::Red),
            "b" | "blue" => Ok(Side::Blue),
            other => Err(BoardError::BadSide(other.to_string())),
        }
    }
}

/// Occupant of a square. Off-board coordinates read as `Blocked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocked,
    Piece(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// What the search needs from a position.
///
/// `make` is the trusted path: it is only handed moves produced by the move
/// generator (or `Move::Pass`) and must apply the full game rules. `unmake`
/// reverts the most recent `make`.
pub trait GamePosition: Clone {
    fn cell(&self, col: i32, row: i32) -> Cell;
    fn outcome(&self) -> Option<Outcome>;
    fn piece_count(&self, side: Side) -> u32;
    fn make(&mut self, mv: Move);
    fn unmake(&mut self);
}
