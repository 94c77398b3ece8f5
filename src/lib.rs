//! A two-piece race through a grid maze, played on both sides by fixed-depth
//! minimax search.
//!
//! The pieces start in opposite corners and each tries to reach the other's
//! start room, or to land on the other piece. Positions are scored by a static
//! [`RaceEvaluator`]; the [`Minimax`] engine searches every line to a fixed
//! depth and the [`driver`] plays the chosen moves on the live grid.

pub mod driver;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod interface;
pub mod mazes;
pub mod rules;
pub mod strategies;

pub use driver::{play, self_play, DriverOptions, GameReport, GameState, TurnRecord};
pub use error::{Error, Result};
pub use grid::{Cell, Coord, Grid};
pub use heuristic::{Heuristics, HistoryPenalty, Perspective, RaceEvaluator, WallCheck};
pub use interface::{Evaluation, Evaluator, Move, Outcome, Side, Strategy, BEST_EVAL, WORST_EVAL};
pub use rules::{apply, apply_in_place, is_terminal, legal_moves, winner};
pub use strategies::minimax::{Minimax, SearchOptions};
pub use strategies::parallel::{ParallelMinimax, ParallelOptions};
pub use strategies::random::Random;
