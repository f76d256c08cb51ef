use std::cmp::Reverse;
use std::error::Error;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::warn;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::VariantArray;

use crate::cell::Cell;
use crate::config::{PuzzleConfig, MIN_GRID_SIZE};
use crate::direction::Direction;
use crate::grid::Grid;
use crate::location::Location;
use crate::placement::WordPlacement;
use crate::puzzle::Puzzle;

/// Ways one generation attempt can fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenerateError {
    /// No usable words remained after defensive filtering. Fatal to the
    /// attempt; surface it to the caller.
    EmptyWordList,
    /// A word fit nowhere on the grid, even after the exhaustive sweep.
    /// Recoverable via [`Generator::fallback`].
    Unplaceable {
        /// The word that could not be placed.
        word: String,
    },
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::EmptyWordList => write!(f, "no usable words to place"),
            GenerateError::Unplaceable { word } => {
                write!(f, "\"{word}\" does not fit anywhere on the grid")
            }
        }
    }
}

impl Error for GenerateError {}

// Staggered down the main diagonal reading rightward, the longest of these
// ends at column 6, so the whole set fits any grid of side MIN_GRID_SIZE.
pub(crate) const FALLBACK_WORDS: [&str; 4] = ["LANTERN", "SCROLL", "PAGE", "INK"];

/// Places words into a letter grid. Owns the single random source used for a
/// generation pass, seeded from the configuration when reproducibility is
/// wanted.
pub struct Generator {
    config: PuzzleConfig,
    rng: StdRng,
}

impl Generator {
    /// Builds a generator over a sanitized copy of `config`: a grid side
    /// below [`MIN_GRID_SIZE`] is raised to it, and an empty direction set
    /// becomes the full eight directions. Both repairs are logged, not
    /// surfaced.
    pub fn new(mut config: PuzzleConfig) -> Self {
        if config.grid_size < MIN_GRID_SIZE {
            warn!(
                "grid size {} below minimum, raising to {}",
                config.grid_size, MIN_GRID_SIZE
            );
            config.grid_size = MIN_GRID_SIZE;
        }

        if config.directions.is_empty() {
            warn!("empty direction set, substituting all eight");
            config.directions = Direction::VARIANTS.to_vec();
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// The sanitized configuration this generator runs with.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generates a puzzle containing every word in `words` exactly once,
    /// with all remaining cells filled randomly.
    ///
    /// The input is expected to already satisfy the caller contract (see
    /// [`PuzzleConfig::prepare_words`]); empty strings are still dropped and
    /// the rest uppercased defensively. Words are placed longest first, since
    /// long words have the fewest valid slots left as the grid fills.
    pub fn generate(&mut self, words: &[String]) -> Result<Puzzle, GenerateError> {
        let words = words
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| word.to_uppercase())
            .sorted_by_key(|word| Reverse(word.chars().count()))
            .collect_vec();

        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }

        let size = self.config.grid_size;
        let mut working = Array2::from_shape_simple_fn((size, size), Cell::default);
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            let slot = self
                .random_slot(&working, &word)
                .or_else(|| self.sweep_slot(&working, &word));

            match slot {
                Some((anchor, direction)) => {
                    write_word(&mut working, &word, anchor, direction);
                    placements.push(WordPlacement::new(word, anchor, direction));
                }
                None => return Err(GenerateError::Unplaceable { word }),
            }
        }

        let grid = Grid::seal(&working, &mut self.rng);
        Ok(Puzzle::new(grid, placements))
    }

    /// [`generate`](Self::generate), with unplaceable words downgraded to
    /// the fallback puzzle so the player still receives a playable board.
    /// An empty word list still surfaces as an error.
    pub fn generate_or_fallback(&mut self, words: &[String]) -> Result<Puzzle, GenerateError> {
        match self.generate(words) {
            Ok(puzzle) => Ok(puzzle),
            Err(GenerateError::Unplaceable { word }) => {
                warn!("\"{word}\" fit nowhere, substituting the fallback puzzle");
                Ok(self.fallback())
            }
            Err(err) => Err(err),
        }
    }

    /// Builds the guaranteed fallback puzzle: a small fixed vocabulary at
    /// fixed anchors staggered down the main diagonal. Infallible for every
    /// sanitized grid size.
    pub fn fallback(&mut self) -> Puzzle {
        let size = self.config.grid_size;
        let mut working = Array2::from_shape_simple_fn((size, size), Cell::default);
        let mut placements = Vec::with_capacity(FALLBACK_WORDS.len());

        for (row, word) in FALLBACK_WORDS.iter().enumerate() {
            let anchor = Location(row, row);
            if can_place(&working, word, anchor, Direction::RIGHT) {
                write_word(&mut working, word, anchor, Direction::RIGHT);
                placements.push(WordPlacement::new((*word).to_owned(), anchor, Direction::RIGHT));
            }
        }

        let grid = Grid::seal(&working, &mut self.rng);
        Puzzle::new(grid, placements)
    }

    // Phase 1: random anchor and direction candidates, up to the configured
    // attempt budget.
    fn random_slot(&mut self, working: &Array2<Cell>, word: &str) -> Option<(Location, Direction)> {
        let size = self.config.grid_size;

        for _ in 0..self.config.phase1_attempts {
            let anchor = Location(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            let choice = self.rng.gen_range(0..self.config.directions.len());
            let direction = self.config.directions[choice];
            if can_place(working, word, anchor, direction) {
                return Some((anchor, direction));
            }
        }

        None
    }

    // Phase 2: row-major sweep over every cell and configured direction, in
    // declaration order. Finds a slot whenever one exists at all.
    fn sweep_slot(&self, working: &Array2<Cell>, word: &str) -> Option<(Location, Direction)> {
        let size = self.config.grid_size;

        (0..size)
            .cartesian_product(0..size)
            .map(|(y, x)| Location(x, y))
            .cartesian_product(self.config.directions.iter().copied())
            .find(|&(anchor, direction)| can_place(working, word, anchor, direction))
    }
}

/// True when `word` fits with its first letter at `anchor` reading along
/// `direction`: the whole path stays on the grid, and every covered cell is
/// either empty or already holds the matching letter (a legitimate crossing).
pub(crate) fn can_place(
    working: &Array2<Cell>,
    word: &str,
    anchor: Location,
    direction: Direction,
) -> bool {
    let len = word.chars().count();
    if len == 0 {
        return false;
    }

    // paths that leave the grid, including ones wrapped past the top or left
    // edge, fail this end-cell check
    let end = anchor.project(direction, len - 1);
    if working.get(end.as_index()).is_none() {
        return false;
    }

    let mut location = anchor;
    for letter in word.chars() {
        match working.get(location.as_index()) {
            None => return false,
            Some(Cell::Letter(existing)) if *existing != letter => return false,
            _ => {}
        }
        location = direction.attempt_from(location);
    }

    true
}

/// Writes `word` along `direction` starting at `anchor`.
///
/// Caller contract: the slot must have been accepted by [`can_place`] first.
/// This performs no bounds or conflict checks of its own.
pub(crate) fn write_word(
    working: &mut Array2<Cell>,
    word: &str,
    anchor: Location,
    direction: Direction,
) {
    let mut location = anchor;
    for letter in word.chars() {
        working[location.as_index()] = Cell::Letter(letter);
        location = direction.attempt_from(location);
    }
}
