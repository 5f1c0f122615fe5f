use ataxbot::board::{Board, Side};
use ataxbot::perft::{perft, perft_divide};

#[test]
fn perft_startpos_small_depths() {
    let mut b = Board::startpos();
    assert_eq!(perft(&mut b, Side::Red, 0), 1);
    assert_eq!(perft(&mut b, Side::Red, 1), 16);
    assert_eq!(perft(&mut b, Side::Red, 2), 256);
    assert_eq!(b, Board::startpos(), "perft must leave the board as it found it");
}

#[test]
fn divide_sums_to_perft() {
    let b = Board::startpos();
    let split = perft_divide(&b, Side::Red, 3);
    assert_eq!(split.len(), 16);
    let total: u64 = split.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&mut b.clone(), Side::Red, 3));
}

#[test]
fn walled_side_passes() {
    let mut b: Board = "------b/-------/-------/-------/XXX----/XXX----/rXX---- r".parse().unwrap();
    let blue_replies = perft(&mut b.clone(), Side::Blue, 1);
    assert_eq!(perft(&mut b, Side::Red, 2), blue_replies);
}
