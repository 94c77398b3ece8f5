//! Stock mazes.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// The 11x21 maze the race is usually played on: A starts at (1, 1) and B at
/// (9, 19).
pub const CLASSIC: &str = include_str!("../mazes/classic.txt");

/// Parse [`CLASSIC`].
pub fn classic() -> Result<Grid> {
    CLASSIC.parse()
}

/// Read and parse a maze file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read maze {}", path.display()),
        source,
    })?;
    text.parse()
}
