//! Command-line host for the engine.
//!
//! Two modes:
//! - `analyze` searches one position (or a built-in suite when no FEN is
//!   given) at a fixed depth and reports the best move, score, and node
//!   count per position.
//! - `selfplay` has the engine play both sides from the start (or a FEN)
//!   until the game ends or a ply cap is reached.

use std::env;
use std::process::ExitCode;

use alfil::types::Move;
use alfil::{Depth, Game, SearchParams, Searcher};

const DEFAULT_DEPTH: i32 = 3;
const DEFAULT_MAX_PLIES: u32 = 200;

/// Positions used when `analyze` is run without a FEN
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Initial position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Ruy Lopez opening",
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    ),
    (
        "Complex middlegame",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Simple endgame (K+P vs K)", "7k/8/8/8/8/8/P7/K7 w - - 0 1"),
    ("Queen vs rook endgame", "k7/1q6/8/8/8/8/8/K5R1 w - - 0 1"),
];

struct Options {
    mode: Mode,
    depth: i32,
    fen: Option<String>,
    max_plies: u32,
}

enum Mode {
    Analyze,
    SelfPlay,
}

fn usage() {
    eprintln!("usage: alfil <analyze|selfplay> [--depth N] [--fen FEN] [--max-plies N]");
}

fn parse_args() -> Option<Options> {
    let mut args = env::args().skip(1);
    let mode = match args.next().as_deref() {
        Some("analyze") => Mode::Analyze,
        Some("selfplay") => Mode::SelfPlay,
        _ => return None,
    };

    let mut opts = Options {
        mode,
        depth: DEFAULT_DEPTH,
        fen: None,
        max_plies: DEFAULT_MAX_PLIES,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" => opts.depth = args.next()?.parse().ok()?,
            "--fen" => opts.fen = Some(args.next()?),
            "--max-plies" => opts.max_plies = args.next()?.parse().ok()?,
            _ => return None,
        }
    }
    Some(opts)
}

fn format_move(m: Move) -> String {
    let mut s = format!("{}{}", m.get_source(), m.get_dest());
    if let Some(promo) = m.get_promotion() {
        s.push(match promo {
            chess::Piece::Queen => 'q',
            chess::Piece::Rook => 'r',
            chess::Piece::Bishop => 'b',
            chess::Piece::Knight => 'n',
            _ => unreachable!(),
        });
    }
    s
}

fn analyze_position(name: &str, fen: &str, depth: Depth) -> Result<(), chess::Error> {
    let game = Game::from_fen(fen)?;
    let mut searcher = Searcher::new();
    let params = SearchParams::for_position(game.board(), depth);

    println!("{name}");
    println!("  fen: {fen}");
    match searcher.find_best_move(game.board(), &params) {
        Ok(result) => match result.best_move {
            Some(m) => println!(
                "  best {} ({}), {} nodes in {} ms ({} nps)",
                format_move(m),
                result.score,
                result.stats.nodes,
                result.stats.time_ms,
                result.stats.nps(),
            ),
            None => println!("  game over, no move available"),
        },
        Err(e) => println!("  search failed: {e}"),
    }
    Ok(())
}

fn analyze(opts: &Options) -> Result<(), chess::Error> {
    let depth = Depth::new(opts.depth);
    match &opts.fen {
        Some(fen) => analyze_position("Position", fen, depth),
        None => {
            for (name, fen) in TEST_POSITIONS {
                analyze_position(name, fen, depth)?;
            }
            Ok(())
        }
    }
}

fn selfplay(opts: &Options) -> Result<(), chess::Error> {
    let mut game = match &opts.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };
    let depth = Depth::new(opts.depth);
    let mut searcher = Searcher::new();

    for ply in 1..=opts.max_plies {
        if game.is_over() {
            break;
        }
        let params = SearchParams::for_position(game.board(), depth);
        let result = match searcher.find_best_move(game.board(), &params) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("search failed: {e}");
                return Ok(());
            }
        };
        let Some(m) = result.best_move else { break };
        log::info!(
            "ply {}: {:?} plays {} ({}, {} nodes)",
            ply,
            game.side_to_move(),
            format_move(m),
            result.score,
            result.stats.nodes,
        );
        game.make_move(m);
        println!("{:3}. {}  {}", ply, format_move(m), game.fen());
    }

    match game.result() {
        Some(result) => println!("game over: {result:?}"),
        None => println!("stopped after {} plies", game.history().len()),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(opts) = parse_args() else {
        usage();
        return ExitCode::FAILURE;
    };

    let run = match opts.mode {
        Mode::Analyze => analyze(&opts),
        Mode::SelfPlay => selfplay(&opts),
    };

    if let Err(e) = run {
        eprintln!("invalid position: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
