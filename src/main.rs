use anyhow::{Context, Result};
use ataxbot::board::{Board, Side, START_LAYOUT};
use ataxbot::openings::random_opening;
use ataxbot::search::{SearchParams, Searcher, SearchError};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute an Ataxx move with alpha-beta search", long_about = None)]
struct Args {
    /// Board layout, e.g. "r-----b/-------/-------/-------/-------/-------/b-----r r"
    #[arg(long)]
    layout: Option<String>,

    /// Side to search for: 'r'/'red' or 'b'/'blue' (defaults to the side to move)
    #[arg(long)]
    side: Option<String>,

    /// Search depth (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Threads for the root split (overrides the config file)
    #[arg(long)]
    threads: Option<usize>,

    /// Disable alpha-beta cutoffs (exhaustive minimax)
    #[arg(long)]
    exhaustive: bool,

    /// Seed for --random-plies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start from a seeded random opening of this many plies instead of --layout
    #[arg(long)]
    random_plies: Option<usize>,

    /// JSON file with search parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn load_params(args: &Args) -> Result<SearchParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parse config: {}", path.display()))?
        }
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth { params.depth = d; }
    if let Some(t) = args.threads { params.threads = t.max(1); }
    if args.exhaustive { params.use_pruning = false; }
    params.seed = args.seed;
    Ok(params)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;

    let board: Board = match (args.random_plies, &args.layout) {
        (Some(plies), _) => random_opening(args.seed, plies),
        (None, Some(layout)) => layout.parse().with_context(|| format!("parse layout: {layout}"))?,
        (None, None) => START_LAYOUT.parse()?,
    };
    let side: Side = match &args.side {
        Some(s) => s.parse()?,
        None => board.side_to_move(),
    };
    info!("position {} side={} depth={} threads={}", board, side, params.depth, params.threads);

    let mut searcher = Searcher::new(params)?;
    let t0 = Instant::now();
    let res = match searcher.compute_move(&board, side) {
        Ok(r) => r,
        Err(SearchError::NoLegalMoves(_)) => {
            // nothing to search: the only move is a pass
            println!("bestmove -");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.json {
        println!("{}", serde_json::to_string(&res)?);
    } else {
        let nps = if dt > 0.0 { res.nodes as f64 / dt } else { 0.0 };
        println!("bestmove {} score={} nodes={} elapsed={:.3}s nps={:.1}",
            res.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()), res.score, res.nodes, dt, nps);
    }
    Ok(())
}
