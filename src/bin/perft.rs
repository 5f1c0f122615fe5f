use ataxbot::board::{Board, START_LAYOUT};
use ataxbot::perft::{perft, perft_divide};
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the Ataxx move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board layout or "startpos"
    #[arg(value_name = "LAYOUT", default_value = "startpos")]
    layout: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let layout = if args.layout == "startpos" { START_LAYOUT } else { args.layout.as_str() };
    let board: Board = layout.parse()?;
    let side = board.side_to_move();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.divide || args.threads > 1 {
            let split = perft_divide(&board, side, args.depth);
            if args.divide {
                for (m, n) in &split { println!("{}: {}", m, n); }
            }
            if split.is_empty() { perft(&mut board.clone(), side, args.depth) } else { split.iter().map(|(_, n)| n).sum() }
        } else {
            perft(&mut board.clone(), side, args.depth)
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.1}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
