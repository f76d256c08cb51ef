use crate::direction::Direction;
use crate::location::Location;

/// One word's anchored position in a generated grid: the cell its first
/// letter occupies and the direction it reads in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordPlacement {
    pub(crate) word: String,
    pub(crate) anchor: Location,
    pub(crate) direction: Direction,
    pub(crate) found: bool,
}

impl WordPlacement {
    pub(crate) fn new(word: String, anchor: Location, direction: Direction) -> Self {
        Self { word, anchor, direction, found: false }
    }

    /// The placed word, uppercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cell holding the word's first letter.
    pub fn anchor(&self) -> Location {
        self.anchor
    }

    /// The direction the word reads in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the player has already found this word.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// The cell holding the word's last letter.
    pub fn end(&self) -> Location {
        self.anchor.project(self.direction, self.len() - 1)
    }

    /// Every cell the word covers, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Location> {
        let anchor = self.anchor;
        let direction = self.direction;
        (0..self.len()).map(move |step| anchor.project(direction, step))
    }

    fn len(&self) -> usize {
        self.word.chars().count()
    }
}

/// One cell of a player's drag selection, carrying the letter it showed.
/// Ephemeral; produced by the gesture-handling layer for each completed drag.
#[derive(Clone, Copy, Debug)]
pub struct SelectedCell {
    /// Where the selected cell sits on the grid.
    pub location: Location,
    /// The letter rendered in that cell.
    pub letter: char,
}
