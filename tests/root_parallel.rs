use ataxbot::board::Side;
use ataxbot::openings::random_opening;
use ataxbot::search::movegen::generate_moves;
use ataxbot::search::{SearchParams, Searcher};
use pretty_assertions::assert_eq;

fn compute(board: &ataxbot::Board, side: Side, depth: u32, threads: usize) -> ataxbot::SearchResult {
    let mut p = SearchParams::default();
    p.depth = depth;
    p.threads = threads;
    let mut s = Searcher::new(p).expect("valid params");
    s.compute_move(board, side).expect("side can move")
}

#[test]
fn root_split_matches_sequential_choice() {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    for seed in 0..6u64 {
        let b = random_opening(seed, 6);
        let side = b.side_to_move();
        if b.outcome().is_some() || generate_moves(&b, side).is_empty() { continue; }
        let seq = compute(&b, side, 3, 1);
        let par = pool.install(|| compute(&b, side, 3, 4));
        assert_eq!((seq.best_move, seq.score), (par.best_move, par.score), "seed {seed}");
    }
}

#[test]
fn root_split_finds_capture_win() {
    let b: ataxbot::Board = "-------/-------/-------/---r---/-------/-------/b------ r".parse().unwrap();
    let r = compute(&b, Side::Red, 3, 4);
    assert_eq!(r.best_move.map(|m| m.to_string()), Some("d4-b2".to_string()));
}
