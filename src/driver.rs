//! Playing whole games.
//!
//! The driver owns the live grid. Strategies only ever see it by shared
//! reference together with a snapshot of the move history, and the driver
//! alone applies the chosen moves.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::heuristic::{Heuristics, RaceEvaluator};
use crate::interface::{Move, Outcome, Side, Strategy};
use crate::rules::{apply_in_place, is_terminal, legal_moves, winner};
use crate::strategies::minimax::{Minimax, SearchOptions};

/// Options for [`play`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverOptions {
    /// Give up with [`Error::TurnLimit`] after this many turns.
    pub max_turns: Option<usize>,
}

impl DriverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

/// The live game: the real grid, the side to move, and every move played.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    to_move: Side,
    history: Vec<Move>,
}

impl GameState {
    /// A fresh game on `grid` with A to move.
    pub fn new(grid: Grid) -> GameState {
        GameState { grid, to_move: Side::A, history: Vec::new() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        is_terminal(&self.grid)
    }

    /// Play `mv` for the side to move and pass the turn.
    pub fn apply(&mut self, mv: Move) {
        apply_in_place(&mut self.grid, mv, self.to_move);
        self.history.push(mv);
        self.to_move = !self.to_move;
    }
}

/// One move of a finished or running game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// Zero-based.
    pub turn: usize,
    pub side: Side,
    pub to: Move,
}

impl Display for TurnRecord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} moves to: {}", self.side, self.to)
    }
}

#[derive(Clone, Debug)]
pub struct GameReport {
    pub outcome: Outcome,
    pub turns: Vec<TurnRecord>,
    /// Set when the game ended because this side had no legal move.
    pub forfeit: Option<Side>,
    pub grid: Grid,
}

impl GameReport {
    pub fn moves(&self) -> impl Iterator<Item = (Side, Move)> + '_ {
        self.turns.iter().map(|t| (t.side, t.to))
    }
}

/// Play `state` to the end, asking `a` and `b` for moves in turn.
///
/// A side with no legal move loses on the spot. A strategy that returns no
/// move while legal moves exist stops the game with
/// [`Error::NoMoveChosen`]. `on_turn` sees every move right after it is
/// applied.
pub fn play<F>(
    state: &mut GameState, a: &mut dyn Strategy, b: &mut dyn Strategy, opts: DriverOptions,
    mut on_turn: F,
) -> Result<GameReport>
where
    F: FnMut(&TurnRecord),
{
    let mut strategies: [&mut dyn Strategy; 2] = [a, b];
    let mut turns = Vec::new();
    let mut forfeit = None;
    while !state.is_over() {
        if opts.max_turns.map_or(false, |max| turns.len() >= max) {
            tracing::warn!(turns = turns.len(), "turn limit reached");
            return Err(Error::TurnLimit { turns: turns.len() });
        }
        let side = state.to_move;
        let strategy = &mut strategies[match side {
            Side::A => 0,
            Side::B => 1,
        }];
        let Some(to) = strategy.choose_move(&state.grid, side, &state.history) else {
            if !legal_moves(&state.grid, side).is_empty() {
                tracing::warn!(%side, turn = turns.len(), "strategy chose no move");
                return Err(Error::NoMoveChosen { side });
            }
            tracing::warn!(%side, turn = turns.len(), "no legal move, forfeiting");
            forfeit = Some(side);
            break;
        };
        state.apply(to);
        let record = TurnRecord { turn: turns.len(), side, to };
        tracing::info!(turn = record.turn, %side, to = %to, "move applied");
        on_turn(&record);
        turns.push(record);
    }

    let outcome = match forfeit {
        Some(side) => Outcome::win_for(!side),
        None => winner(&state.grid),
    };
    tracing::info!(%outcome, turns = turns.len(), "game over");
    Ok(GameReport { outcome, turns, forfeit, grid: state.grid.clone() })
}

/// Both sides searched by [`Minimax`] with the same options.
pub fn self_play<F>(
    grid: Grid, search: SearchOptions, heuristics: Heuristics, opts: DriverOptions, on_turn: F,
) -> Result<GameReport>
where
    F: FnMut(&TurnRecord),
{
    let mut a = Minimax::new(RaceEvaluator::new(heuristics), search);
    let mut b = Minimax::new(RaceEvaluator::new(heuristics), search);
    play(&mut GameState::new(grid), &mut a, &mut b, opts, on_turn)
}
