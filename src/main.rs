use anyhow::{Context, Result};
use clap::Parser;
use fenbot::board::Position;
use fenbot::config::{BotConfig, Strategy};
use fenbot::perft::perft;
use fenbot::search::alphabeta::RootMode;
use fenbot::search::zobrist::KeyMode;
use fenbot::Bot;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "fenbot", author, version, about = "Pick a chess move for a FEN position", long_about = None)]
struct Args {
    /// Position as a FEN string, or "startpos"
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Use the greedy one-ply bot instead of minimax
    #[arg(long)]
    greedy: bool,

    /// Search the root with a single recursive call
    #[arg(long)]
    one_shot: bool,

    /// Disable the transposition cache
    #[arg(long)]
    no_tt: bool,

    /// Use static evaluation at the horizon instead of quiescence search
    #[arg(long)]
    no_quiescence: bool,

    /// Key the cache on castling and en passant rights as well
    #[arg(long)]
    full_key: bool,

    /// Seed for the random fallback
    #[arg(long)]
    seed: Option<u64>,

    /// Print the perft count to this depth instead of choosing a move
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u32>,

    /// Print score, depth and node count with the move
    #[arg(long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<BotConfig> {
    let mut cfg = match &args.config {
        Some(path) => BotConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => BotConfig::default(),
    };
    if let Some(d) = args.depth { cfg.depth = d; }
    if args.greedy { cfg.strategy = Strategy::Greedy; }
    if args.one_shot { cfg.root_mode = RootMode::OneShot; }
    if args.no_tt { cfg.use_tt = false; }
    if args.no_quiescence { cfg.use_quiescence = false; }
    if args.full_key { cfg.key_mode = KeyMode::Full; }
    if args.seed.is_some() { cfg.seed = args.seed; }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut pos = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).context("parsing --fen")?
    };

    if let Some(depth) = args.perft {
        let t0 = Instant::now();
        let nodes = perft(&mut pos, depth);
        let dt = t0.elapsed().as_secs_f64();
        println!("nodes: {} elapsed: {:.3}s", nodes, dt);
        return Ok(());
    }

    let cfg = build_config(&args)?;
    log::debug!("config: {}", serde_json::to_string(&cfg)?);
    let mut bot = Bot::new(cfg);
    let decision = bot.choose(&mut pos).context("choosing a move")?;
    if args.verbose {
        println!(
            "{} source={:?} score={} depth={} nodes={}",
            decision.uci,
            decision.source,
            decision.score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            decision.depth,
            decision.nodes
        );
    } else {
        println!("{}", decision.uci);
    }
    Ok(())
}
