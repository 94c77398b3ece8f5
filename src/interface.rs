//! The common structures and traits.

use std::fmt::{Display, Formatter, Result};
use std::ops::Not;

use crate::grid::{Cell, Coord, Grid};

/// A static score of a grid position. Higher values favor side A, the
/// maximizing side.
pub type Evaluation = i32;

/// Stands in for positive infinity: the starting bound of a minimizing node.
pub const BEST_EVAL: Evaluation = i32::MAX;
/// Stands in for negative infinity: the starting bound of a maximizing node.
pub const WORST_EVAL: Evaluation = -BEST_EVAL;

/// A move is the destination room of the side's single piece.
pub type Move = Coord;

/// One of the two racing pieces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts top-left at (1, 1) and maximizes.
    A,
    /// Starts bottom-right at (R-2, C-2) and minimizes.
    B,
}

impl Side {
    /// The side searched at a node with the given `maximizing` flag.
    pub fn from_maximizing(maximizing: bool) -> Side {
        if maximizing {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::A
    }

    pub fn opponent(self) -> Side {
        !self
    }

    /// The cell value marking this side's piece.
    pub fn piece(self) -> Cell {
        match self {
            Side::A => Cell::OccupiedByA,
            Side::B => Cell::OccupiedByB,
        }
    }
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(match *self {
            Side::A => "A",
            Side::B => "B",
        })
    }
}

/// The result of playing a game until it finishes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    AWins,
    BWins,
    /// Never produced by the terminal rules; kept so reports have a value for
    /// a finished game with no winner.
    Draw,
}

impl Outcome {
    /// The outcome in which `side` wins.
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::A => Outcome::AWins,
            Side::B => Outcome::BWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::AWins => Some(Side::A),
            Outcome::BWins => Some(Side::B),
            Outcome::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(match *self {
            Outcome::AWins => "A_wins",
            Outcome::BWins => "B_wins",
            Outcome::Draw => "Draw",
        })
    }
}

/// Evaluates grid positions at the leaves of a search.
pub trait Evaluator {
    /// Score `grid` statically.
    ///
    /// `maximizing` is the flag of the search node that reached the leaf, and
    /// `history` is the read-only list of moves played on the live grid so far.
    fn evaluate(&self, grid: &Grid, maximizing: bool, history: &[Move]) -> Evaluation;
}

/// Defines a method of choosing a move for a side.
pub trait Strategy {
    /// Pick the destination for `side`'s piece, or `None` when it has no
    /// legal move. `history` is a snapshot of the moves played so far.
    fn choose_move(&mut self, grid: &Grid, side: Side, history: &[Move]) -> Option<Move>;
}
