use std::fmt::{Display, Formatter};

use ndarray::Array2;
use rand::Rng;

use crate::cell::Cell;
use crate::location::Location;

/// A fully populated square letter grid.
///
/// Built by a [`Generator`](crate::Generator); once sealed, every cell holds
/// exactly one uppercase letter and the grid is never mutated again.
#[derive(Debug)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Freezes a working cell grid, filling every still-empty cell with a
    /// uniformly random uppercase letter. Must only run once all placements
    /// are complete.
    pub(crate) fn seal<R: Rng>(working: &Array2<Cell>, rng: &mut R) -> Self {
        let cells = working.map(|cell| match cell.letter() {
            Some(letter) => letter,
            None => (b'A' + rng.gen_range(0..26)) as char,
        });
        Self { cells }
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// The letter at `location`, or `None` outside the grid.
    pub fn letter(&self, location: Location) -> Option<char> {
        self.cells.get(location.as_index()).copied()
    }

    /// The grid as one `String` per row, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells.rows().into_iter().map(|row| row.iter().collect()).collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            out.extend(row.iter());
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
