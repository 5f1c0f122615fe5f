use crate::board::{Cell, GamePosition, Move, Side, Square, SIDE};

/// Every move for `side`: each owned piece paired with each empty, on-board
/// square of its 5x5 neighbourhood.
///
/// Order is fixed: pieces by row then column, destinations by row offset then
/// column offset (both -2..=2). The search breaks ties by this order.
/// Whether `side` may move at all is not consulted; an empty vector is a
/// valid answer.
pub fn generate_moves<P: GamePosition>(pos: &P, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for_each_move(pos, side, |m| moves.push(m));
    moves
}

pub fn count_moves<P: GamePosition>(pos: &P, side: Side) -> usize {
    let mut n = 0usize;
    for_each_move(pos, side, |_| n += 1);
    n
}

fn for_each_move<P: GamePosition, F: FnMut(Move)>(pos: &P, side: Side, mut emit: F) {
    let own = Cell::Piece(side);
    for row in 0..SIDE {
        for col in 0..SIDE {
            if pos.cell(col, row) != own { continue; }
            for dr in -2..=2 {
                for dc in -2..=2 {
                    // off-board reads as Blocked, the source itself is occupied
                    if !pos.cell(col + dc, row + dr).is_empty() { continue; }
                    if let (Some(from), Some(to)) = (Square::new(col, row), Square::new(col + dc, row + dr)) {
                        emit(Move::step(from, to));
                    }
                }
            }
        }
    }
}
