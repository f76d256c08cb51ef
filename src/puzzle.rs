use crate::direction::Direction;
use crate::grid::Grid;
use crate::placement::{SelectedCell, WordPlacement};

/// A generated puzzle: the sealed letter grid plus the placement record of
/// every hidden word. The grid is never mutated after generation; play only
/// flips `found` flags on placements.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<WordPlacement>,
}

impl Puzzle {
    pub(crate) fn new(grid: Grid, placements: Vec<WordPlacement>) -> Self {
        Self { grid, placements }
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placement records for every hidden word, in placement order.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Checks a straight-line drag selection against the unfound words.
    ///
    /// A placement matches read forward (dragged from its anchor to its end,
    /// same direction) or in reverse (end to anchor, inverted direction).
    /// The first match is marked found and returned; everything else is a
    /// silent `None` — a miss is a normal play event, not an error.
    /// Already-found words never re-match, and a failed scan mutates nothing.
    ///
    /// The selection is assumed to lie on one straight line; the gesture
    /// layer enforces that upstream.
    pub fn check_selection(&mut self, selection: &[SelectedCell]) -> Option<&WordPlacement> {
        let (first, last) = match (selection.first(), selection.last()) {
            (Some(first), Some(last)) if selection.len() >= 2 => (*first, *last),
            _ => return None,
        };

        let selected: String = selection.iter().map(|cell| cell.letter).collect();
        let direction = Direction::from_deltas(
            last.location.0 as isize - first.location.0 as isize,
            last.location.1 as isize - first.location.1 as isize,
        )?;

        let hit = self.placements.iter().position(|placement| {
            if placement.found {
                return false;
            }

            let forward = selected == placement.word
                && first.location == placement.anchor
                && direction == placement.direction;
            let reverse = || {
                let reversed: String = placement.word.chars().rev().collect();
                selected == reversed
                    && last.location == placement.anchor
                    && direction == placement.direction.invert()
            };

            forward || reverse()
        })?;

        self.placements[hit].found = true;
        Some(&self.placements[hit])
    }

    /// True once every hidden word has been found.
    pub fn is_complete(&self) -> bool {
        self.placements.iter().all(|placement| placement.found)
    }
}
