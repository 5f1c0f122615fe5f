use crate::board::{GamePosition, Move, Side};
use crate::search::eval::{static_score, INFINITY, MAX_HEURISTIC, WIN_VALUE};
use crate::search::movegen::generate_moves;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

pub const DEFAULT_DEPTH: u32 = 3;
pub const MAX_SEARCH_DEPTH: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub win_value: i32,
    /// Off = exhaustive minimax over the same tree.
    pub use_pruning: bool,
    /// >1 searches root moves in parallel, each with a full window.
    pub threads: usize,
    /// Reproducibility knob for callers; the search itself is deterministic.
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, win_value: WIN_VALUE, use_pruning: true, threads: 1, seed: 0 }
    }
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth == 0 || self.depth > MAX_SEARCH_DEPTH {
            return Err(SearchError::DepthOutOfRange { depth: self.depth, max: MAX_SEARCH_DEPTH });
        }
        if self.win_value <= MAX_HEURISTIC {
            return Err(SearchError::WinValueTooSmall { win_value: self.win_value, min: MAX_HEURISTIC + 1 });
        }
        // win_value + depth must stay strictly inside the root window
        let max = INFINITY - 1 - MAX_SEARCH_DEPTH as i32;
        if self.win_value > max {
            return Err(SearchError::WinValueTooLarge { win_value: self.win_value, max });
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth {depth} outside 1..={max}")]
    DepthOutOfRange { depth: u32, max: u32 },
    #[error("win value {win_value} must be at least {min}")]
    WinValueTooSmall { win_value: i32, min: i32 },
    #[error("win value {win_value} leaves no room for the depth bias (max {max})")]
    WinValueTooLarge { win_value: i32, max: i32 },
    #[error("{0} has no legal move; the caller must pass instead")]
    NoLegalMoves(Side),
    #[error("game is already decided")]
    GameOver,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Which way a frame optimizes. Red maximizes, Blue minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    pub fn of(side: Side) -> Role {
        match side { Side::Red => Role::Maximizing, Side::Blue => Role::Minimizing }
    }

    pub fn side(self) -> Side {
        match self { Role::Maximizing => Side::Red, Role::Minimizing => Side::Blue }
    }

    pub fn flip(self) -> Role {
        match self { Role::Maximizing => Role::Minimizing, Role::Minimizing => Role::Maximizing }
    }

    /// Strictly better for this role; equal scores never win.
    pub fn prefers(self, score: i32, current: i32) -> bool {
        match self { Role::Maximizing => score > current, Role::Minimizing => score < current }
    }

    fn worst(self) -> i32 {
        match self { Role::Maximizing => -INFINITY, Role::Minimizing => INFINITY }
    }
}

pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self { params: SearchParams::default(), nodes: 0 } }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Result<Self, SearchError> {
        params.validate()?;
        Ok(Self { params, nodes: 0 })
    }

    pub fn params(&self) -> &SearchParams { &self.params }
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Pick a move for `side` with the configured depth.
    ///
    /// `pos` is never modified; the search works on a private copy.
    pub fn compute_move<P: GamePosition + Send + Sync>(&mut self, pos: &P, side: Side) -> Result<SearchResult, SearchError> {
        if pos.outcome().is_some() { return Err(SearchError::GameOver); }
        if generate_moves(pos, side).is_empty() { return Err(SearchError::NoLegalMoves(side)); }
        let depth = self.params.depth;
        let t0 = Instant::now();
        let res = if self.params.threads > 1 && depth > 1 {
            self.search_parallel(pos, side, depth)
        } else {
            self.search(pos, side, depth)
        };
        debug!(
            "search side={} depth={} best={} score={} nodes={} elapsed={:.3}s",
            side, depth, res.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            res.score, res.nodes, t0.elapsed().as_secs_f64()
        );
        Ok(res)
    }

    /// Root (recording) frame of the minimax search. Depth 0, or a decided
    /// position, yields the static score and no move. Depth is capped at
    /// `MAX_SEARCH_DEPTH`.
    pub fn search<P: GamePosition>(&mut self, pos: &P, side: Side, depth: u32) -> SearchResult {
        self.nodes = 0;
        let depth = depth.min(MAX_SEARCH_DEPTH);
        let mut scratch = pos.clone();
        let (score, best_move) = self.minimax(&mut scratch, depth, Role::of(side), -INFINITY, INFINITY, true);
        SearchResult { best_move, score, nodes: self.nodes }
    }

    fn minimax<P: GamePosition>(&mut self, pos: &mut P, depth: u32, role: Role, mut alpha: i32, mut beta: i32, root: bool) -> (i32, Option<Move>) {
        self.nodes += 1;
        // sooner wins score higher: the bias is the depth still remaining
        if depth == 0 || pos.outcome().is_some() {
            return (static_score(&*pos, self.params.win_value + depth as i32), None);
        }
        let moves = generate_moves(&*pos, role.side());
        if moves.is_empty() {
            pos.make(Move::Pass);
            let (score, _) = self.minimax(pos, depth - 1, role.flip(), alpha, beta, false);
            pos.unmake();
            return (score, Some(Move::Pass));
        }
        let mut best: Option<Move> = None;
        let mut best_score = role.worst();
        for m in moves {
            pos.make(m);
            let (score, _) = self.minimax(pos, depth - 1, role.flip(), alpha, beta, false);
            pos.unmake();
            if root { trace!("root move {} score {}", m, score); }
            if best.is_none() || role.prefers(score, best_score) {
                best_score = score;
                best = Some(m);
            }
            match role {
                Role::Maximizing => alpha = alpha.max(score),
                Role::Minimizing => beta = beta.min(score),
            }
            if self.params.use_pruning && beta <= alpha { break; }
        }
        (best_score, best)
    }

    // Root split: every root move gets its own copy and a full window, so each
    // score is exact and the ordered reduction matches the sequential choice.
    fn search_parallel<P: GamePosition + Send + Sync>(&mut self, pos: &P, side: Side, depth: u32) -> SearchResult {
        let depth = depth.min(MAX_SEARCH_DEPTH);
        let role = Role::of(side);
        let moves = generate_moves(pos, side);
        if moves.is_empty() || pos.outcome().is_some() { return self.search(pos, side, depth); }

        let params = self.params;
        let results: Vec<(Move, i32, u64)> = moves.par_iter().map(|&m| {
            let mut child = pos.clone();
            child.make(m);
            let mut w = Searcher { params, nodes: 0 };
            let (score, _) = w.minimax(&mut child, depth - 1, role.flip(), -INFINITY, INFINITY, false);
            (m, score, w.nodes)
        }).collect();

        let mut best: Option<(Move, i32)> = None;
        self.nodes = 1;
        for (m, s, n) in results {
            self.nodes += n;
            if best.map_or(true, |(_, bs)| role.prefers(s, bs)) { best = Some((m, s)); }
        }
        match best {
            Some((m, s)) => SearchResult { best_move: Some(m), score: s, nodes: self.nodes },
            None => self.search(pos, side, depth),
        }
    }
}
