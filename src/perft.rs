// Move-path counting over the search move generator (make/unmake, no cloning)
use crate::board::{GamePosition, Move, Side};
use crate::search::movegen::generate_moves;
use rayon::prelude::*;

/// Leaf paths of length `depth` from `pos` with `side` to move. A side
/// without moves passes; decided positions are leaves.
pub fn perft<P: GamePosition>(pos: &mut P, side: Side, depth: u32) -> u64 {
    if depth == 0 || pos.outcome().is_some() { return 1; }
    let moves = generate_moves(&*pos, side);
    if moves.is_empty() {
        pos.make(Move::Pass);
        let n = perft(pos, side.opponent(), depth - 1);
        pos.unmake();
        return n;
    }
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        pos.make(m);
        nodes += perft(pos, side.opponent(), depth - 1);
        pos.unmake();
    }
    nodes
}

/// Per-root-move counts, root moves split across the rayon pool.
pub fn perft_divide<P: GamePosition + Send + Sync>(pos: &P, side: Side, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 || pos.outcome().is_some() { return Vec::new(); }
    generate_moves(pos, side).par_iter().map(|&m| {
        let mut b = pos.clone();
        b.make(m);
        (m, perft(&mut b, side.opponent(), depth - 1))
    }).collect()
}
