use super::{Cell, GamePosition, Move, MoveKind, Outcome, Side, Square, JUMP_LIMIT, SIDE, SQUARES};
use std::sync::OnceLock;
use thiserror::Error;

pub const START_LAYOUT: &str = "r-----b/-------/-------/-------/-------/-------/b-----r r";

const FULL: u64 = (1u64 << SQUARES) - 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("malformed layout: {0}")]
    BadLayout(String),
    #[error("unknown cell character '{0}'")]
    BadCell(char),
    #[error("unknown side '{0}'")]
    BadSide(String),
    #[error("bad square '{0}'")]
    BadSquare(String),
    #[error("bad move notation '{0}'")]
    BadMove(String),
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },
}

#[derive(Clone, Copy, Debug)]
struct Undo {
    mv: Move,
    mover: Side,
    flipped: u64,
    jumps: u32,
    turn: Side,
}

/// 7x7 Ataxx board stored as one bitboard per occupant kind.
#[derive(Clone, Debug)]
pub struct Board {
    red: u64,
    blue: u64,
    blocked: u64,
    turn: Side,
    jumps: u32,
    history: Vec<Undo>,
}

struct Masks {
    near: [u64; SQUARES],
    reach: [u64; SQUARES],
}

static MASKS: OnceLock<Masks> = OnceLock::new();

fn masks() -> &'static Masks {
    MASKS.get_or_init(|| {
        let mut m = Masks { near: [0; SQUARES], reach: [0; SQUARES] };
        for idx in 0..SQUARES {
            let sq = Square::from_index(idx);
            for dr in -2..=2 {
                for dc in -2..=2 {
                    if dr == 0 && dc == 0 { continue; }
                    if let Some(t) = sq.offset(dc, dr) {
                        m.reach[idx] |= t.bit();
                        if dr.abs() <= 1 && dc.abs() <= 1 { m.near[idx] |= t.bit(); }
                    }
                }
            }
        }
        m
    })
}

fn bits(mut bb: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if bb == 0 { return None; }
        let idx = bb.trailing_zeros() as usize;
        bb &= bb - 1;
        Some(idx)
    })
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red && self.blue == other.blue && self.blocked == other.blocked
            && self.turn == other.turn && self.jumps == other.jumps
    }
}

impl Eq for Board {}

impl Board {
    /// No pieces, no blocks, Red to move.
    pub fn empty() -> Self {
        Self { red: 0, blue: 0, blocked: 0, turn: Side::Red, jumps: 0, history: Vec::with_capacity(64) }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (name, cell) in [("a7", Cell::Piece(Side::Red)), ("g1", Cell::Piece(Side::Red)),
                             ("a1", Cell::Piece(Side::Blue)), ("g7", Cell::Piece(Side::Blue))] {
            if let Ok(sq) = name.parse::<Square>() { b.set(sq, cell); }
        }
        b
    }

    pub fn get(&self, sq: Square) -> Cell {
        let bit = sq.bit();
        if self.red & bit != 0 { Cell::Piece(Side::Red) }
        else if self.blue & bit != 0 { Cell::Piece(Side::Blue) }
        else if self.blocked & bit != 0 { Cell::Blocked }
        else { Cell::Empty }
    }

    /// Setup helper: overwrite one square. Does not touch the move history.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        let bit = sq.bit();
        self.red &= !bit;
        self.blue &= !bit;
        self.blocked &= !bit;
        match cell {
            Cell::Empty => {}
            Cell::Blocked => self.blocked |= bit,
            Cell::Piece(Side::Red) => self.red |= bit,
            Cell::Piece(Side::Blue) => self.blue |= bit,
        }
    }

    pub fn side_to_move(&self) -> Side { self.turn }
    pub fn set_side_to_move(&mut self, side: Side) { self.turn = side; }
    pub fn jumps(&self) -> u32 { self.jumps }
    pub fn plies(&self) -> usize { self.history.len() }

    pub fn pieces(&self, side: Side) -> u64 {
        match side { Side::Red => self.red, Side::Blue => self.blue }
    }

    fn pieces_mut(&mut self, side: Side) -> &mut u64 {
        match side { Side::Red => &mut self.red, Side::Blue => &mut self.blue }
    }

    pub fn empties(&self) -> u64 { !(self.red | self.blue | self.blocked) & FULL }

    pub fn count(&self, side: Side) -> u32 { self.pieces(side).count_ones() }

    pub fn can_move(&self, side: Side) -> bool {
        let empties = self.empties();
        let m = masks();
        bits(self.pieces(side)).any(|idx| m.reach[idx] & empties != 0)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        let r = self.count(Side::Red);
        let b = self.count(Side::Blue);
        if r == 0 || b == 0 {
            return Some(match (r, b) {
                (0, 0) => Outcome::Draw,
                (0, _) => Outcome::Winner(Side::Blue),
                _ => Outcome::Winner(Side::Red),
            });
        }
        if self.jumps >= JUMP_LIMIT || (!self.can_move(Side::Red) && !self.can_move(Side::Blue)) {
            return Some(match r.cmp(&b) {
                std::cmp::Ordering::Greater => Outcome::Winner(Side::Red),
                std::cmp::Ordering::Less => Outcome::Winner(Side::Blue),
                std::cmp::Ordering::Equal => Outcome::Draw,
            });
        }
        None
    }

    /// Full legality check for the side to move.
    pub fn check(&self, mv: Move) -> Result<(), BoardError> {
        let illegal = |reason| Err(BoardError::IllegalMove { mv, reason });
        if self.outcome().is_some() { return illegal("game is over"); }
        match mv {
            Move::Pass => {
                if self.can_move(self.turn) { return illegal("pass while a move is available"); }
            }
            Move::Step { from, to } => {
                if self.get(from) != Cell::Piece(self.turn) { return illegal("source is not a piece of the side to move"); }
                if !self.get(to).is_empty() { return illegal("destination is not empty"); }
                if !matches!(mv.kind(), MoveKind::Extend | MoveKind::Jump) { return illegal("destination out of range"); }
            }
        }
        Ok(())
    }

    pub fn play(&mut self, mv: Move) -> Result<(), BoardError> {
        self.check(mv)?;
        self.make(mv);
        Ok(())
    }

    pub fn make(&mut self, mv: Move) {
        let Move::Step { from, to } = mv else {
            self.history.push(Undo { mv, mover: self.turn, flipped: 0, jumps: self.jumps, turn: self.turn });
            self.turn = self.turn.opponent();
            return;
        };
        let mover = match self.get(from) { Cell::Piece(s) => s, _ => self.turn };
        let opp = mover.opponent();
        let flipped = self.pieces(opp) & masks().near[to.index()];
        self.history.push(Undo { mv, mover, flipped, jumps: self.jumps, turn: self.turn });
        let jump = mv.kind() == MoveKind::Jump;
        let own = self.pieces_mut(mover);
        if jump { *own &= !from.bit(); }
        *own |= to.bit() | flipped;
        *self.pieces_mut(opp) &= !flipped;
        self.jumps = if jump { self.jumps + 1 } else { 0 };
        self.turn = opp;
    }

    pub fn unmake(&mut self) {
        let Some(u) = self.history.pop() else { return; };
        if let Move::Step { from, to } = u.mv {
            let own = self.pieces_mut(u.mover);
            *own &= !(to.bit() | u.flipped);
            if u.mv.kind() == MoveKind::Jump { *own |= from.bit(); }
            *self.pieces_mut(u.mover.opponent()) |= u.flipped;
        }
        self.jumps = u.jumps;
        self.turn = u.turn;
    }
}

impl GamePosition for Board {
    fn cell(&self, col: i32, row: i32) -> Cell {
        Square::new(col, row).map_or(Cell::Blocked, |sq| self.get(sq))
    }
    fn outcome(&self) -> Option<Outcome> { Board::outcome(self) }
    fn piece_count(&self, side: Side) -> u32 { self.count(side) }
    fn make(&mut self, mv: Move) { Board::make(self, mv) }
    fn unmake(&mut self) { Board::unmake(self) }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..SIDE).rev() {
            for col in 0..SIDE {
                let c = match self.cell(col, row) {
                    Cell::Empty => '-',
                    Cell::Blocked => 'X',
                    Cell::Piece(s) => s.to_char(),
                };
                write!(f, "{}", c)?;
            }
            if row > 0 { write!(f, "/")?; }
        }
        write!(f, " {}", self.turn.to_char())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let layout = tokens.next().ok_or_else(|| BoardError::BadLayout(s.to_string()))?;
        let ranks: Vec<&str> = layout.split('/').collect();
        if ranks.len() != SIDE as usize { return Err(BoardError::BadLayout(s.to_string())); }
        let mut b = Board::empty();
        for (i, rank) in ranks.iter().enumerate() {
            if rank.chars().count() != SIDE as usize { return Err(BoardError::BadLayout(s.to_string())); }
            let row = SIDE - 1 - i as i32;
            for (col, ch) in rank.chars().enumerate() {
                let cell = match ch {
                    '-' => Cell::Empty,
                    'X' | 'x' => Cell::Blocked,
                    c => Cell::Piece(Side::from_char(c).ok_or(BoardError::BadCell(c))?),
                };
                if let Some(sq) = Square::new(col as i32, row) { b.set(sq, cell); }
            }
        }
        if let Some(side) = tokens.next() { b.turn = side.parse()?; }
        Ok(b)
    }
}
