//! The maze board.
//!
//! A grid alternates rooms and connectors. Rooms sit at odd row and odd
//! column indices and may hold a piece; every other cell is a connector (or
//! filler) that is either a wall or an open passage between two rooms.
//!
//! ```text
//! XXXXXXX
//! XA|.X.X      A at (1, 1) may step right to (1, 3);
//! X|XX|XX      the wall at (1, 4) blocks (1, 3) -> (1, 5).
//! X.|.|BX
//! XXXXXXX
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::interface::Side;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open,
    OccupiedByA,
    OccupiedByB,
}

impl Cell {
    /// The side whose piece is on this cell, if any.
    pub fn occupant(self) -> Option<Side> {
        match self {
            Cell::OccupiedByA => Some(Side::A),
            Cell::OccupiedByB => Some(Side::B),
            Cell::Wall | Cell::Open => None,
        }
    }

    fn from_glyph(c: char) -> Option<Cell> {
        match c {
            'X' | '#' => Some(Cell::Wall),
            '.' | '|' | '-' | ' ' => Some(Cell::Open),
            'A' | 'R' => Some(Cell::OccupiedByA),
            'B' | 'G' => Some(Cell::OccupiedByB),
            _ => None,
        }
    }
}

/// A `(row, col)` index into a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Manhattan distance between two coordinates.
    pub fn distance(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord { row, col }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Whether `(row, col)` is a room index.
pub fn is_room(row: usize, col: usize) -> bool {
    row % 2 == 1 && col % 2 == 1
}

/// A rectangular maze with odd dimensions.
///
/// Construction through [`Grid::from_cells`] or [`str::parse`] validates the
/// layout: both pieces present exactly once, on rooms, and no walled rooms.
/// [`Grid::set`] afterwards writes unchecked, which lets callers build
/// positions the rules must still cope with (a captured piece, for one).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells, validating the layout.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Grid> {
        let expected = rows.first().ok_or(Error::EmptyGrid)?.len();
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != expected {
                return Err(Error::RaggedRow { row, expected, got: line.len() });
            }
            cells.extend_from_slice(line);
        }
        let grid = Grid { rows: rows.len(), cols: expected, cells };
        grid.validate()?;
        Ok(grid)
    }

    fn validate(&self) -> Result<()> {
        let (rows, cols) = self.dimensions();
        if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(Error::BadDimensions { rows, cols });
        }
        for row in 0..rows {
            for col in 0..cols {
                let cell = self.get(row, col);
                if is_room(row, col) {
                    if cell == Cell::Wall {
                        return Err(Error::WalledRoom { row, col });
                    }
                } else if let Some(side) = cell.occupant() {
                    return Err(Error::PieceOffRoom { side, row, col });
                }
            }
        }
        for side in [Side::A, Side::B] {
            match self.count(side.piece()) {
                0 => return Err(Error::MissingPiece { side }),
                1 => {}
                count => return Err(Error::DuplicatePiece { side, count }),
            }
        }
        Ok(())
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If the index is outside the grid. Use [`Grid::try_get`] for a fallible lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "({}, {}) out of bounds", row, col);
        self.cells[row * self.cols + col]
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If the index is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.rows && col < self.cols, "({}, {}) out of bounds", row, col);
        self.cells[row * self.cols + col] = cell;
    }

    /// Like [`Grid::set`] but reports an out-of-range index as an error.
    pub fn try_set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            let (rows, cols) = self.dimensions();
            return Err(Error::OutOfBounds { row, col, rows, cols });
        }
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    /// Row-major scan for the first cell equal to `cell`.
    pub fn find(&self, cell: Cell) -> Option<Coord> {
        self.cells.iter().position(|&c| c == cell).map(|i| Coord::new(i / self.cols, i % self.cols))
    }

    /// Where `side`'s piece currently is.
    pub fn position(&self, side: Side) -> Option<Coord> {
        self.find(side.piece())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// The room `side` starts the game in.
    pub fn start(&self, side: Side) -> Coord {
        match side {
            Side::A => Coord::new(1, 1),
            Side::B => Coord::new(self.rows - 2, self.cols - 2),
        }
    }

    /// The room `side` races towards: the opponent's start.
    pub fn goal(&self, side: Side) -> Coord {
        self.start(side.opponent())
    }

    /// Whether `side`'s piece is standing on `at`.
    pub fn holds(&self, at: Coord, side: Side) -> bool {
        self.try_get(at.row, at.col) == Some(side.piece())
    }

    /// Room coordinates in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..self.rows)
            .step_by(2)
            .flat_map(move |row| (1..self.cols).step_by(2).map(move |col| Coord::new(row, col)))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, character)| {
                    Cell::from_glyph(character).ok_or(Error::UnknownCell { character, row, col })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(cells);
        }
        Grid::from_cells(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let glyph = match self.get(row, col) {
                    Cell::Wall => 'X',
                    Cell::Open if is_room(row, col) => '.',
                    Cell::Open => '|',
                    Cell::OccupiedByA => 'A',
                    Cell::OccupiedByB => 'B',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "
XXXXXXX
XA|.X.X
X|XX|XX
X.|.|BX
XXXXXXX
";

    #[test]
    fn parses_and_renders() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.dimensions(), (5, 7));
        assert_eq!(grid.get(1, 1), Cell::OccupiedByA);
        assert_eq!(grid.get(1, 2), Cell::Open);
        assert_eq!(grid.get(1, 4), Cell::Wall);
        assert_eq!(grid.position(Side::B), Some(Coord::new(3, 5)));
        assert_eq!(grid.to_string().trim(), SMALL.trim());
    }

    #[test]
    fn start_and_goal_rooms() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.start(Side::A), Coord::new(1, 1));
        assert_eq!(grid.start(Side::B), Coord::new(3, 5));
        assert_eq!(grid.goal(Side::A), grid.start(Side::B));
        assert_eq!(grid.goal(Side::B), grid.start(Side::A));
    }

    #[test]
    fn clone_is_independent() {
        let grid: Grid = SMALL.parse().unwrap();
        let mut copy = grid.clone();
        copy.set(1, 3, Cell::OccupiedByA);
        copy.set(1, 1, Cell::Open);
        assert_eq!(grid.get(1, 1), Cell::OccupiedByA);
        assert_eq!(grid.get(1, 3), Cell::Open);
    }

    #[test]
    fn rooms_are_row_major() {
        let grid: Grid = SMALL.parse().unwrap();
        let rooms: Vec<_> = grid.rooms().map(|c| (c.row, c.col)).collect();
        assert_eq!(rooms, vec![(1, 1), (1, 3), (1, 5), (3, 1), (3, 3), (3, 5)]);
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(matches!("".parse::<Grid>(), Err(Error::EmptyGrid)));
        assert!(matches!(
            "XXXX\nXA.X\nX.BX\nXXXX".parse::<Grid>(),
            Err(Error::BadDimensions { rows: 4, cols: 4 })
        ));
        assert!(matches!(
            "XXXXX\nXA|BX\nXXXX".parse::<Grid>(),
            Err(Error::RaggedRow { row: 2, expected: 5, got: 4 })
        ));
        assert!(matches!(
            "XXXXX\nXA?BX\nXXXXX".parse::<Grid>(),
            Err(Error::UnknownCell { character: '?', row: 1, col: 2 })
        ));
        assert!(matches!(
            "XXXXX\nXABXX\nXXXXX".parse::<Grid>(),
            Err(Error::PieceOffRoom { side: Side::B, row: 1, col: 2 })
        ));
        assert!(matches!(
            "XXXXX\nXA|.X\nXXXXX".parse::<Grid>(),
            Err(Error::MissingPiece { side: Side::B })
        ));
        assert!(matches!(
            "XXXXXXX\nXA|A|BX\nXXXXXXX".parse::<Grid>(),
            Err(Error::DuplicatePiece { side: Side::A, count: 2 })
        ));
        assert!(matches!(
            "XXXXXXX\nXA|X|BX\nXXXXXXX".parse::<Grid>(),
            Err(Error::WalledRoom { row: 1, col: 3 })
        ));
    }

    #[test]
    fn checked_access() {
        let mut grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.try_get(5, 0), None);
        assert_eq!(grid.try_get(0, 7), None);
        assert!(matches!(grid.try_set(9, 9, Cell::Open), Err(Error::OutOfBounds { .. })));
        assert!(grid.try_set(1, 3, Cell::Open).is_ok());
    }
}
