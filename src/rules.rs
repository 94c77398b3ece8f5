//! The rules of the race: who has won, where a piece may go, and what a
//! move does to the board.

use crate::grid::{Cell, Grid};
use crate::interface::{Move, Outcome, Side};

/// Directions are tried in this order; search tie-breaks depend on it.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn decided(grid: &Grid) -> Option<Outcome> {
    let a_goal = grid.goal(Side::A);
    let b_goal = grid.goal(Side::B);
    // A captured piece is gone from the board.
    if grid.position(Side::B).is_none() || grid.holds(a_goal, Side::A) {
        return Some(Outcome::AWins);
    }
    if grid.position(Side::A).is_none() || grid.holds(b_goal, Side::B) {
        return Some(Outcome::BWins);
    }
    None
}

/// Whether the game on `grid` is over.
pub fn is_terminal(grid: &Grid) -> bool {
    decided(grid).is_some()
}

/// Who won on `grid`. A's conditions are checked first, so a board that
/// satisfies both sides' conditions goes to A. `Draw` is reported for a board
/// that is not finished.
pub fn winner(grid: &Grid) -> Outcome {
    decided(grid).unwrap_or(Outcome::Draw)
}

/// Every destination `side` can reach in one step, in generation order:
/// rooms row-major, then up, down, left, right from each room.
pub fn legal_moves(grid: &Grid, side: Side) -> Vec<Move> {
    let (rows, cols) = grid.dimensions();
    let mut moves = Vec::with_capacity(4);
    for room in grid.rooms().filter(|r| grid.holds(*r, side)) {
        for &(dr, dc) in DIRECTIONS.iter() {
            let (Some(row), Some(col)) =
                (room.row.checked_add_signed(2 * dr), room.col.checked_add_signed(2 * dc))
            else {
                continue;
            };
            if row >= rows || col >= cols {
                continue;
            }
            let connector = grid.get(room.row.wrapping_add_signed(dr), room.col.wrapping_add_signed(dc));
            if connector != Cell::Wall {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// Move `side`'s piece to `mv` on a copy of `grid`. The argument is untouched.
pub fn apply(grid: &Grid, mv: Move, side: Side) -> Grid {
    let mut next = grid.clone();
    apply_in_place(&mut next, mv, side);
    next
}

/// Move `side`'s piece to `mv` on `grid` itself. Whatever stood on the
/// destination is overwritten, so landing on the opponent captures it.
pub fn apply_in_place(grid: &mut Grid, mv: Move, side: Side) {
    let (rows, cols) = grid.dimensions();
    let piece = side.piece();
    for row in 0..rows {
        for col in 0..cols {
            if grid.get(row, col) == piece {
                grid.set(row, col, Cell::Open);
            }
        }
    }
    grid.set(mv.row, mv.col, piece);
}
