//! Tictac-Solver: exact tic-tac-toe engine.
//!
//! ## Usage
//!
//! - `tictac-solver` - Play against the engine on the terminal
//! - `tictac-solver solve <BOARD>` - Print the best move for a position
//! - `tictac-solver compare <BOARD>` - Compare minimax and alpha-beta node counts
//! - `tictac-solver arena` - Play the engine against a random opponent
//!
//! Boards are written as nine cells, e.g. `OO.XX....` or `OO_|XX_|___`.

use std::io;

use anyhow::{Context, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tictac_solver::arena::play_random_games;
use tictac_solver::board::{Board, Player};
use tictac_solver::rules::classify;
use tictac_solver::search::Algorithm;
use tictac_solver::selector::{Selection, select};
use tictac_solver::session::{FirstMover, Session};

/// Tictac-Solver: exact tic-tac-toe engine
#[derive(Parser)]
#[command(name = "tictac-solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine (you are X, the engine is O)
    Play {
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        engine: Algorithm,
        #[arg(long, value_enum, default_value_t = FirstMover::Human)]
        first: FirstMover,
    },
    /// Print the best move for a position
    Solve {
        board: String,
        #[arg(long, value_enum, default_value_t = Side::O)]
        to_move: Side,
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        engine: Algorithm,
    },
    /// Run both engines on a position and compare the work they do
    Compare {
        board: String,
        #[arg(long, value_enum, default_value_t = Side::O)]
        to_move: Side,
    },
    /// Play the engine against a uniformly random opponent
    Arena {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        engine: Algorithm,
    },
}

/// Side to move, by mark.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Side {
    /// The maximizer
    O,
    /// The minimizer
    X,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::O => Player::Maximizer,
            Side::X => Player::Minimizer,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play { engine, first }) => run_play(engine, first),
        Some(Commands::Solve {
            board,
            to_move,
            engine,
        }) => run_solve(&board, to_move.into(), engine),
        Some(Commands::Compare { board, to_move }) => run_compare(&board, to_move.into()),
        Some(Commands::Arena {
            games,
            seed,
            engine,
        }) => run_arena(games, seed, engine),
        None => run_play(Algorithm::default(), FirstMover::default()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_board(text: &str) -> anyhow::Result<Board> {
    text.parse()
        .with_context(|| format!("failed to parse board '{text}'"))
}

fn run_play(engine: Algorithm, first: FirstMover) -> anyhow::Result<()> {
    let mut session = Session::new(engine, first);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_solve(text: &str, to_move: Player, engine: Algorithm) -> anyhow::Result<()> {
    let board = parse_board(text)?;
    print!("{board}");

    let outcome = classify(&board);
    if outcome.is_terminal() {
        println!("Game over: {outcome}");
        return Ok(());
    }

    match select(&board, to_move, engine) {
        Some(selection) => {
            println!("Best move for {to_move}: {} (score {:+})", selection.index, selection.score);
            print_stats(engine, &selection);
        }
        None => println!("No legal move"),
    }
    Ok(())
}

fn run_compare(text: &str, to_move: Player) -> anyhow::Result<()> {
    let board = parse_board(text)?;
    print!("{board}");

    let (Some(plain), Some(pruned)) = (
        select(&board, to_move, Algorithm::Minimax),
        select(&board, to_move, Algorithm::AlphaBeta),
    ) else {
        println!("No legal move");
        return Ok(());
    };

    print_stats(Algorithm::Minimax, &plain);
    print_stats(Algorithm::AlphaBeta, &pruned);
    ensure!(
        plain.index == pruned.index && plain.score == pruned.score,
        "engines disagree: minimax chose {} ({:+}), alpha-beta chose {} ({:+})",
        plain.index,
        plain.score,
        pruned.index,
        pruned.score
    );
    println!(
        "Both engines choose {} (score {:+})",
        pruned.index, pruned.score
    );
    Ok(())
}

fn run_arena(games: usize, seed: u64, engine: Algorithm) -> anyhow::Result<()> {
    let tally = play_random_games(games, seed, engine)?;
    println!(
        "{} games: {} wins, {} draws, {} losses",
        tally.games(),
        tally.wins,
        tally.draws,
        tally.losses
    );
    Ok(())
}

fn print_stats(engine: Algorithm, selection: &Selection) {
    let name = engine
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default();
    println!(
        "{name:>10}: move {} score {:+} nodes={} leaves={} cutoffs={}",
        selection.index,
        selection.score,
        selection.stats.nodes,
        selection.stats.leaves,
        selection.stats.cutoffs
    );
}
