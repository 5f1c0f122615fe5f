//! Seeded random openings for tests, benches and the CLI.
use crate::board::{Board, Move};
use crate::search::movegen::generate_moves;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Play up to `plies` uniformly random moves from the start position.
/// Stops early once the game is decided. Same seed, same board.
pub fn random_opening(seed: u64, plies: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::startpos();
    for _ in 0..plies {
        if board.outcome().is_some() { break; }
        let mv = select_random_move(&board, &mut rng);
        board.make(mv);
    }
    board
}

fn select_random_move(board: &Board, rng: &mut SmallRng) -> Move {
    let moves = generate_moves(board, board.side_to_move());
    if moves.is_empty() { Move::Pass } else { moves[rng.gen_range(0..moves.len())] }
}
