use super::{BoardError, SIDE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// `None` when (col, row) lies off the board.
    pub fn new(col: i32, row: i32) -> Option<Square> {
        if (0..SIDE).contains(&col) && (0..SIDE).contains(&row) {
            Some(Square { col: col as u8, row: row as u8 })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Square {
        debug_assert!(idx < super::SQUARES);
        Square { col: (idx as i32 % SIDE) as u8, row: (idx as i32 / SIDE) as u8 }
    }

    pub fn col(self) -> i32 { self.col as i32 }
    pub fn row(self) -> i32 { self.row as i32 }
    pub fn index(self) -> usize { self.row as usize * SIDE as usize + self.col as usize }
    pub fn bit(self) -> u64 { 1u64 << self.index() }

    /// Chebyshev distance: 1 for an extend, 2 for a jump.
    pub fn distance(self, other: Square) -> i32 {
        (self.col() - other.col()).abs().max((self.row() - other.row()).abs())
    }

    pub fn offset(self, dc: i32, dr: i32) -> Option<Square> {
        Square::new(self.col() + dc, self.row() + dr)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, (b'1' + self.row) as char)
    }
}

impl std::str::FromStr for Square {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 { return Err(BoardError::BadSquare(s.to_string())); }
        let col = b[0].wrapping_sub(b'a') as i32;
        let row = b[1].wrapping_sub(b'1') as i32;
        Square::new(col, row).ok_or_else(|| BoardError::BadSquare(s.to_string()))
    }
}
