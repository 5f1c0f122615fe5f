use ataxbot::board::{Board, Move, Side};
use ataxbot::openings::random_opening;
use ataxbot::search::eval::{static_score, WIN_VALUE};
use ataxbot::search::{SearchError, SearchParams, Searcher};

fn parse(layout: &str) -> Board { layout.parse().expect("valid layout") }

fn searcher(depth: u32) -> Searcher {
    let mut p = SearchParams::default();
    p.depth = depth;
    Searcher::new(p).expect("valid params")
}

// Red on d4, Blue's only piece on a1: d4-b2 captures it and ends the game.
const RED_WINS_BY_CAPTURE: &str = "-------/-------/-------/---r---/-------/-------/b------ r";
const BLUE_WINS_BY_CAPTURE: &str = "------r/-------/-------/---b---/-------/-------/------- b";

#[test]
fn default_params_match_classic_depth() {
    let p = SearchParams::default();
    assert_eq!(p.depth, 3);
    assert_eq!(p.win_value, WIN_VALUE);
    assert!(p.use_pruning);
    assert_eq!(p.threads, 1);
}

#[test]
fn search_returns_generated_move_startpos() {
    let b = Board::startpos();
    let mut s = searcher(1);
    let res = s.compute_move(&b, Side::Red).expect("red can move");
    let bm = res.best_move.expect("a move at depth 1");
    assert!(b.check(bm).is_ok(), "engine produced illegal move {bm}");
    assert!(res.nodes > 1);
}

#[test]
fn search_finds_immediate_capture_win() {
    let b = parse(RED_WINS_BY_CAPTURE);
    for depth in 1..=3 {
        let mut s = searcher(depth);
        let res = s.compute_move(&b, Side::Red).expect("red can move");
        assert_eq!(res.best_move.map(|m| m.to_string()).as_deref(), Some("d4-b2"), "depth {depth}");
        assert_eq!(res.score, WIN_VALUE + (depth as i32 - 1), "depth {depth}");
    }
}

#[test]
fn blue_search_minimizes() {
    let b = parse(BLUE_WINS_BY_CAPTURE);
    for depth in 1..=3 {
        let mut s = searcher(depth);
        let res = s.compute_move(&b, Side::Blue).expect("blue can move");
        assert_eq!(res.best_move.map(|m| m.to_string()).as_deref(), Some("d4-f6"), "depth {depth}");
        assert_eq!(res.score, -(WIN_VALUE + (depth as i32 - 1)), "depth {depth}");
    }
}

#[test]
fn decided_positions_score_win_plus_depth() {
    let red_won = parse("r------/-------/-------/-------/-------/-------/------- b");
    let blue_won = parse("-------/-------/---b---/-------/-------/-------/------- r");
    let drawn = parse("XXXXXXb/XXXXXXX/XXXXXXX/XXXXXXX/XXXXXXX/XXXXXXX/rXXXXXX r");
    let mut s = Searcher::default();
    for depth in 0..=4u32 {
        let r = s.search(&red_won, Side::Red, depth);
        assert_eq!(r.score, WIN_VALUE + depth as i32);
        assert_eq!(r.best_move, None);
        let r = s.search(&blue_won, Side::Blue, depth);
        assert_eq!(r.score, -(WIN_VALUE + depth as i32));
        assert_eq!(r.best_move, None);
        let r = s.search(&drawn, Side::Red, depth);
        assert_eq!(r.score, 0);
        assert_eq!(r.best_move, None);
    }
}

#[test]
fn depth_zero_is_static_score_without_move() {
    let b = random_opening(3, 8);
    let mut s = Searcher::default();
    let r = s.search(&b, b.side_to_move(), 0);
    assert_eq!(r.score, static_score(&b, WIN_VALUE));
    assert_eq!(r.best_move, None);
    assert_eq!(r.nodes, 1);
}

#[test]
fn nonterminal_scores_stay_below_win_value() {
    let b = Board::startpos();
    let mut s = Searcher::default();
    for depth in 1..=3 {
        let r = s.search(&b, Side::Red, depth);
        assert!(r.score.abs() < WIN_VALUE, "depth {depth} score {}", r.score);
    }
}

#[test]
fn search_is_deterministic() {
    for seed in 0..4u64 {
        let b = random_opening(seed, 10);
        let side = b.side_to_move();
        let r1 = searcher(3).search(&b, side, 3);
        let r2 = searcher(3).search(&b, side, 3);
        assert_eq!(r1, r2, "seed {seed}");
    }
}

#[test]
fn caller_position_is_untouched() {
    let b = random_opening(11, 6);
    let before = b.clone();
    let mut s = searcher(3);
    let _ = s.compute_move(&b, b.side_to_move());
    assert_eq!(b, before);
    assert_eq!(b.plies(), before.plies());
}

#[test]
fn root_without_moves_records_pass() {
    let b = parse("------b/-------/-------/-------/XXX----/XXX----/rXX---- r");
    let mut s = Searcher::default();
    let r = s.search(&b, Side::Red, 2);
    assert_eq!(r.best_move, Some(Move::Pass));
    assert!(r.score.abs() < WIN_VALUE);
}

#[test]
fn interior_pass_keeps_searching() {
    // Blue to move; after any Blue move Red is still walled in and must pass.
    let b = parse("------b/-------/-------/-------/XXX----/XXX----/rXX---- b");
    let mut s = Searcher::default();
    let r = s.search(&b, Side::Blue, 3);
    assert!(r.best_move.is_some());
    assert!(r.score.abs() < WIN_VALUE);
}

#[test]
fn compute_move_reports_contract_violations() {
    let walled = parse("------b/-------/-------/-------/XXX----/XXX----/rXX---- r");
    let mut s = Searcher::default();
    assert_eq!(s.compute_move(&walled, Side::Red), Err(SearchError::NoLegalMoves(Side::Red)));

    let decided = parse("r------/-------/-------/-------/-------/-------/------- r");
    assert_eq!(s.compute_move(&decided, Side::Red), Err(SearchError::GameOver));
}

#[test]
fn params_are_validated() {
    let mut p = SearchParams::default();
    p.depth = 0;
    assert!(matches!(Searcher::new(p), Err(SearchError::DepthOutOfRange { .. })));
    p.depth = 65;
    assert!(matches!(Searcher::new(p), Err(SearchError::DepthOutOfRange { .. })));
    let mut p = SearchParams::default();
    p.win_value = 10;
    assert!(matches!(Searcher::new(p), Err(SearchError::WinValueTooSmall { .. })));
    p.win_value = i32::MAX - 5;
    assert!(matches!(Searcher::new(p), Err(SearchError::WinValueTooLarge { .. })));
}

#[test]
fn params_roundtrip_through_json_with_defaults() {
    let p: SearchParams = serde_json::from_str(r#"{"depth": 2, "threads": 4}"#).expect("json");
    assert_eq!(p.depth, 2);
    assert_eq!(p.threads, 4);
    assert_eq!(p.win_value, WIN_VALUE);
    assert!(p.use_pruning);
}
