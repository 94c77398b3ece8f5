//! maze-race: watch two minimax players race through a maze.
//!
//! Prints one line per move and the outcome on stdout. Diagnostics go to
//! stderr through `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use maze_race::{
    apply_in_place, mazes, play, DriverOptions, GameState, Grid, Heuristics, HistoryPenalty, Minimax,
    ParallelMinimax, ParallelOptions, Perspective, RaceEvaluator, Random, SearchOptions, Strategy,
    WallCheck,
};

#[derive(Parser)]
#[command(name = "maze-race")]
#[command(version, about = "Two-piece maze race played by minimax search", long_about = None)]
struct Cli {
    /// Maze file (X walls, . rooms, | passages, A and B pieces). Defaults to the stock maze.
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Search depth in plies for both sides.
    #[arg(long, default_value_t = 3, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    depth: usize,

    /// Stop with an error after this many turns.
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,

    /// Search root moves in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (defaults to the number of CPUs).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Who plays B.
    #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
    opponent: Opponent,

    /// Seed for the random opponent.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PerspectiveArg::Parity)]
    perspective: PerspectiveArg,

    #[arg(long, value_enum, default_value_t = WallCheckArg::Nearest)]
    wall_check: WallCheckArg,

    #[arg(long, value_enum, default_value_t = HistoryPenaltyArg::Constant)]
    history_penalty: HistoryPenaltyArg,

    /// Print the board after every move.
    #[arg(long)]
    show_board: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PerspectiveArg {
    Parity,
    BySide,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum WallCheckArg {
    Nearest,
    Farthest,
    Every,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HistoryPenaltyArg {
    Constant,
    Membership,
}

impl Cli {
    fn heuristics(&self) -> Heuristics {
        Heuristics::new()
            .with_perspective(match self.perspective {
                PerspectiveArg::Parity => Perspective::Parity,
                PerspectiveArg::BySide => Perspective::BySide,
            })
            .with_wall_check(match self.wall_check {
                WallCheckArg::Nearest => WallCheck::Nearest,
                WallCheckArg::Farthest => WallCheck::Farthest,
                WallCheckArg::Every => WallCheck::Every,
            })
            .with_history_penalty(match self.history_penalty {
                HistoryPenaltyArg::Constant => HistoryPenalty::Constant,
                HistoryPenaltyArg::Membership => HistoryPenalty::Membership,
            })
    }

    fn grid(&self) -> Result<Grid> {
        match &self.maze {
            Some(path) => {
                mazes::load(path).with_context(|| format!("failed to load maze {}", path.display()))
            }
            None => mazes::classic().context("stock maze is invalid"),
        }
    }

    fn searcher(&self) -> Result<Box<dyn Strategy>> {
        let eval = RaceEvaluator::new(self.heuristics());
        let opts = SearchOptions::new().with_max_depth(self.depth);
        if self.parallel {
            let mut par_opts = ParallelOptions::new();
            if let Some(threads) = self.threads {
                par_opts = par_opts.with_num_threads(threads);
            }
            Ok(Box::new(ParallelMinimax::new(eval, opts, par_opts)?))
        } else {
            Ok(Box::new(Minimax::new(eval, opts)))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let grid = cli.grid()?;
    let mut a = cli.searcher()?;
    let mut b: Box<dyn Strategy> = match cli.opponent {
        Opponent::Minimax => cli.searcher()?,
        Opponent::Random => match cli.seed {
            Some(seed) => Box::new(Random::seeded(seed)),
            None => Box::new(Random::new()),
        },
    };

    let mut board = grid.clone();
    let mut state = GameState::new(grid);
    let opts = DriverOptions::new().with_max_turns(cli.max_turns);
    let report = play(&mut state, a.as_mut(), b.as_mut(), opts, |turn| {
        println!("{}", turn);
        if cli.show_board {
            apply_in_place(&mut board, turn.to, turn.side);
            println!("{}", board);
        }
    })?;
    if let Some(side) = report.forfeit {
        println!("{} has no legal move", side);
    }
    println!("{}", report.outcome);
    Ok(())
}
