//! Move-path enumeration and position inspection
//!
//! ```text
//! perft --depth 4
//! perft --fen "4k4/9/9/9/9/9/9/9/9/4K4 w - - 0 1" --divide --depth 2
//! perft --moves h2e2 h9g7 --show
//! ```

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use rxiangqi_core::init::init_all_tables_once;
use rxiangqi_core::movegen::perft_divide;
use rxiangqi_core::notation::{move_to_string, parse_move};
use rxiangqi_core::{perft, GameResult, Position, START_FEN};

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Count move paths and inspect xiangqi positions")]
struct Args {
    /// FEN of the root position (default: initial position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Moves to play from the root before counting, in absolute notation
    #[arg(short, long, num_args = 1..)]
    moves: Vec<String>,

    /// Search depth
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Print the count below every root move
    #[arg(long)]
    divide: bool,

    /// Print the board, legal moves and game state of the root
    #[arg(short, long)]
    show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    init_all_tables_once();

    let fen = args.fen.as_deref().unwrap_or(START_FEN);
    let mut pos = Position::from_fen(fen).with_context(|| format!("cannot set up '{fen}'"))?;
    debug!("root position {}", pos.to_fen());

    for text in &args.moves {
        let mv = parse_move(text, pos.is_mirrored())?;
        if !pos.generate_legal_moves().contains(&mv) {
            bail!("illegal move {text} in {}", pos.to_fen());
        }
        pos = pos.execute(mv).position;
    }

    if args.show {
        show(&pos);
    }

    let start = Instant::now();
    let nodes = if args.divide {
        let mut total = 0;
        for (mv, count) in perft_divide(&pos, args.depth) {
            println!("{}: {count}", move_to_string(mv, pos.is_mirrored()));
            total += count;
        }
        total
    } else {
        perft(&pos, args.depth)
    };
    let elapsed = start.elapsed();

    println!("perft({}) = {nodes}", args.depth);
    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    info!("{nodes} nodes in {:.3}s ({nps:.0} nps)", elapsed.as_secs_f64());
    Ok(())
}

fn show(pos: &Position) {
    println!("{pos}");
    println!("fen: {}", pos.to_fen());
    if pos.is_in_check() {
        println!("in check");
    }

    let moves: Vec<String> = pos
        .generate_legal_moves()
        .iter()
        .map(|mv| move_to_string(*mv, pos.is_mirrored()))
        .collect();
    println!("{} legal moves: {}", moves.len(), moves.join(" "));

    match pos.game_result() {
        GameResult::Undecided => {}
        result => println!("result: {result:?}"),
    }
}
