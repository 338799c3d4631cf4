//! Gomoku AI Engine CLI
//!
//! A command-line front end for the engine: ask for a recommended move in a
//! given position, or watch the engine play itself.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku::config::DEFAULT_CONFIG_FILE;
use gomoku::{Engine, EngineConfig, GameResult, MoveOutcome, Pos, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Gomoku engine with alpha-beta search")]
struct Cli {
    /// Log search details
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend a move for the side to move after the given moves
    Suggest {
        /// Moves played so far, Black first, as "row,col row,col ..."
        #[arg(long, short = 'm', default_value = "")]
        moves: String,

        #[command(flatten)]
        settings: Settings,
    },
    /// Let the engine play both sides
    Selfplay {
        /// Stop after this many moves even without a result
        #[arg(long, default_value_t = 60)]
        max_moves: usize,

        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(Args, Debug)]
struct Settings {
    /// TOML file with board_size and search_depth [default: ./gomoku.toml if present]
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Board dimension (overrides the config file)
    #[arg(long, short = 's')]
    size: Option<usize>,

    /// Search depth in plies (overrides the config file)
    #[arg(long, short = 'd')]
    depth: Option<u8>,
}

impl Settings {
    fn resolve(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => EngineConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("loading config from {DEFAULT_CONFIG_FILE}"))?,
        };
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Suggest { moves, settings } => suggest(&moves, &settings),
        Command::Selfplay {
            max_moves,
            settings,
        } => selfplay(max_moves, &settings),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn suggest(moves: &str, settings: &Settings) -> Result<()> {
    let mut engine = Engine::with_config(settings.resolve()?)?;

    for token in moves.split_whitespace() {
        let pos = parse_move(&engine, token)?;
        match engine
            .play(pos)
            .with_context(|| format!("playing {token}"))?
        {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(result) => {
                print!("{}", engine.board());
                print_result(&result);
                return Ok(());
            }
            MoveOutcome::Draw => {
                print!("{}", engine.board());
                println!("Draw: the board is full");
                return Ok(());
            }
        }
    }

    print!("{}", engine.board());
    let to_move = engine.current_player();
    let result = engine.find_best_move_with_stats();
    match result.best_move {
        Some(pos) => {
            println!("{} to move: play {}", color_name(to_move), pos);
            println!(
                "  score {}  depth {}  nodes {}  time {}ms",
                result.score, result.depth, result.nodes, result.time_ms
            );
        }
        None => println!("No move available"),
    }
    Ok(())
}

fn selfplay(max_moves: usize, settings: &Settings) -> Result<()> {
    let mut engine = Engine::with_config(settings.resolve()?)?;

    for ply in 1..=max_moves {
        let mover = engine.current_player();
        let (pos, outcome) = engine.play_engine_move()?;
        println!("{ply:3}. {} {}", color_name(mover), pos);

        match outcome {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(result) => {
                print!("{}", engine.board());
                print_result(&result);
                return Ok(());
            }
            MoveOutcome::Draw => {
                print!("{}", engine.board());
                println!("Draw: the board is full");
                return Ok(());
            }
        }
    }

    print!("{}", engine.board());
    println!("Stopped after {max_moves} moves without a result");
    Ok(())
}

/// Parse "row,col" against the engine's board.
fn parse_move(engine: &Engine, token: &str) -> Result<Pos> {
    let Some((row, col)) = token.split_once(',') else {
        bail!("move '{token}' is not in row,col form");
    };
    let row: i64 = row
        .trim()
        .parse()
        .with_context(|| format!("bad row in move '{token}'"))?;
    let col: i64 = col
        .trim()
        .parse()
        .with_context(|| format!("bad column in move '{token}'"))?;
    Ok(engine.board().checked_pos(row, col)?)
}

fn print_result(result: &GameResult) {
    let line: Vec<String> = result.winning_line.iter().map(Pos::to_string).collect();
    println!("{} wins: {}", color_name(result.winner), line.join(" "));
}

fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Nobody",
    }
}
