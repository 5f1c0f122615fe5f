use super::{BoardError, Square};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Move {
    Pass,
    Step { from: Square, to: Square },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Pass,
    /// Distance 1: the source keeps its piece.
    Extend,
    /// Distance 2: the source is vacated.
    Jump,
    /// Distance 0 or more than 2; never produced by the generator.
    Invalid,
}

impl Move {
    pub fn step(from: Square, to: Square) -> Move { Move::Step { from, to } }

    pub fn kind(self) -> MoveKind {
        match self {
            Move::Pass => MoveKind::Pass,
            Move::Step { from, to } => match from.distance(to) {
                1 => MoveKind::Extend,
                2 => MoveKind::Jump,
                _ => MoveKind::Invalid,
            },
        }
    }

    pub fn is_pass(self) -> bool { self == Move::Pass }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "-"),
            Move::Step { from, to } => write!(f, "{}-{}", from, to),
        }
    }
}

impl std::str::FromStr for Move {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" { return Ok(Move::Pass); }
        let (a, b) = s.split_once('-').ok_or_else(|| BoardError::BadMove(s.to_string()))?;
        let from: Square = a.parse().map_err(|_| BoardError::BadMove(s.to_string()))?;
        let to: Square = b.parse().map_err(|_| BoardError::BadMove(s.to_string()))?;
        Ok(Move::Step { from, to })
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> String { mv.to_string() }
}

impl TryFrom<String> for Move {
    type Error = BoardError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}
