use crate::board::{GamePosition, Outcome, Side, SQUARES};

/// Default magnitude of a decided position. Positive means Red won.
pub const WIN_VALUE: i32 = 1_000_000;
/// Larger than any win value plus depth bias; seeds the root window.
pub const INFINITY: i32 = i32::MAX;
/// Largest magnitude the material heuristic can reach.
pub const MAX_HEURISTIC: i32 = SQUARES as i32;
pub const DRAW_SCORE: i32 = 0;

// Red minus Blue piece count.
pub fn material(pos: &impl GamePosition) -> i32 {
    pos.piece_count(Side::Red) as i32 - pos.piece_count(Side::Blue) as i32
}

/// Static score from Red's point of view: `+win_value` / `-win_value` for a
/// decided game, 0 for a draw, material difference otherwise.
pub fn static_score(pos: &impl GamePosition, win_value: i32) -> i32 {
    match pos.outcome() {
        Some(Outcome::Winner(Side::Red)) => win_value,
        Some(Outcome::Winner(Side::Blue)) => -win_value,
        Some(Outcome::Draw) => DRAW_SCORE,
        None => material(pos),
    }
}
