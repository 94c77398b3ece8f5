//! Static evaluation of race positions.
//!
//! The score is built from the Manhattan distance between the pieces, a small
//! penalty for standing next to a wall, flat penalties for a piece still in
//! its start room and for repeating moves, and (for A) a signed goal term.
//!
//! Three knobs select between the historical behaviour of this engine and a
//! corrected reading of each term; the defaults reproduce the historical
//! games move for move.

use crate::grid::{Cell, Coord, Grid};
use crate::interface::{Evaluation, Evaluator, Move, Side};

const BASE: Evaluation = 100;
const DISTANCE_WEIGHT: Evaluation = 100;
const GOAL_WEIGHT: Evaluation = 10;
const NEAR_WALL_PENALTY: Evaluation = 10;
const START_PENALTY: Evaluation = 100;
const TRIED_MOVE_PENALTY: Evaluation = 100;

const UP: [usize; 2] = [1, 3];
const DOWN: [usize; 3] = [1, 3, 5];
const LEFT: [usize; 1] = [1];
const RIGHT: [usize; 3] = [1, 3, 5];

/// Which formula scores a leaf.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Perspective {
    /// Every leaf is scored with B's formula, whichever side is searching.
    /// The historical engine compared the `maximizing` flag against A's
    /// piece symbol, a test that never holds.
    #[default]
    Parity,
    /// A's formula at maximizing leaves, B's at minimizing ones.
    BySide,
}

/// Which connector offsets the near-wall test looks at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WallCheck {
    /// Only the adjacent connector in each direction.
    ///
    /// The near-wall rule is usually stated as testing the last listed
    /// offset. The golden game was played by a check of the form
    /// `(a or b) == "X"`, which stops at its first operand because a cell
    /// glyph is never empty, so only the nearest offset was ever compared.
    /// [`WallCheck::Farthest`] gives the last-offset reading.
    #[default]
    Nearest,
    /// Only the last listed offset in each direction.
    Farthest,
    /// Any of the listed offsets.
    Every,
}

/// How the repeated-move penalty is decided.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryPenalty {
    /// Always charged.
    #[default]
    Constant,
    /// Charged when either piece stands on a room already in the history.
    Membership,
}

/// Options for [`RaceEvaluator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Heuristics {
    pub perspective: Perspective,
    pub wall_check: WallCheck,
    pub history_penalty: HistoryPenalty,
}

impl Heuristics {
    /// The historical settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// All three terms corrected.
    pub fn corrected() -> Self {
        Heuristics {
            perspective: Perspective::BySide,
            wall_check: WallCheck::Every,
            history_penalty: HistoryPenalty::Membership,
        }
    }

    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_wall_check(mut self, wall_check: WallCheck) -> Self {
        self.wall_check = wall_check;
        self
    }

    pub fn with_history_penalty(mut self, history_penalty: HistoryPenalty) -> Self {
        self.history_penalty = history_penalty;
        self
    }
}

/// The race's static evaluator.
#[derive(Copy, Clone, Debug, Default)]
pub struct RaceEvaluator {
    heuristics: Heuristics,
}

impl RaceEvaluator {
    pub fn new(heuristics: Heuristics) -> Self {
        RaceEvaluator { heuristics }
    }

    pub fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    fn offsets<'a>(&self, listed: &'a [usize]) -> &'a [usize] {
        match self.heuristics.wall_check {
            WallCheck::Nearest => &listed[..1],
            WallCheck::Farthest => &listed[listed.len() - 1..],
            WallCheck::Every => listed,
        }
    }

    fn near_wall(&self, grid: &Grid, at: Coord) -> bool {
        let (rows, cols) = grid.dimensions();
        // Offsets that fall off the board are not walls.
        let wall = |row: Option<usize>, col: Option<usize>| match (row, col) {
            (Some(row), Some(col)) => grid.try_get(row, col) == Some(Cell::Wall),
            _ => false,
        };
        (at.row > 1 && self.offsets(&UP).iter().any(|&o| wall(at.row.checked_sub(o), Some(at.col))))
            || (at.row + 1 < rows
                && self.offsets(&DOWN).iter().any(|&o| wall(Some(at.row + o), Some(at.col))))
            || (at.col > 1
                && self.offsets(&LEFT).iter().any(|&o| wall(Some(at.row), at.col.checked_sub(o))))
            || (at.col + 1 < cols
                && self.offsets(&RIGHT).iter().any(|&o| wall(Some(at.row), Some(at.col + o))))
    }

    fn tried_move(&self, a: Coord, b: Coord, history: &[Move]) -> bool {
        match self.heuristics.history_penalty {
            HistoryPenalty::Constant => true,
            HistoryPenalty::Membership => history.contains(&a) || history.contains(&b),
        }
    }
}

impl Evaluator for RaceEvaluator {
    fn evaluate(&self, grid: &Grid, maximizing: bool, history: &[Move]) -> Evaluation {
        // Always rescan; a missing piece is treated as sitting at its start.
        let a = grid.position(Side::A).unwrap_or_else(|| grid.start(Side::A));
        let b = grid.position(Side::B).unwrap_or_else(|| grid.start(Side::B));
        let favor_a = match self.heuristics.perspective {
            Perspective::Parity => false,
            Perspective::BySide => maximizing,
        };
        let checked_at = match self.heuristics.perspective {
            Perspective::Parity => a,
            Perspective::BySide if favor_a => a,
            Perspective::BySide => b,
        };

        let distance = a.distance(b) as Evaluation;
        let wall_penalty = if self.near_wall(grid, checked_at) { NEAR_WALL_PENALTY } else { 0 };
        let start_penalty = if grid.holds(grid.start(Side::A), Side::A)
            || grid.holds(grid.start(Side::B), Side::B)
        {
            START_PENALTY
        } else {
            0
        };
        let tried_penalty = if self.tried_move(a, b, history) { TRIED_MOVE_PENALTY } else { 0 };
        let penalties = wall_penalty + start_penalty + tried_penalty;

        if favor_a {
            let goal = grid.goal(Side::A);
            let closeness = (a.row as Evaluation - goal.row as Evaluation)
                + (a.col as Evaluation - goal.col as Evaluation);
            BASE + DISTANCE_WEIGHT * distance - penalties + GOAL_WEIGHT * closeness
        } else {
            -BASE - DISTANCE_WEIGHT * distance - penalties
        }
    }
}
