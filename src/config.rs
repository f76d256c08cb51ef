use itertools::Itertools;
use log::warn;
use strum::VariantArray;

use crate::direction::Direction;

/// Smallest supported grid side. The fallback vocabulary is chosen to fit at
/// this size and above, so a sanitized configuration never yields an
/// unwinnable board.
pub const MIN_GRID_SIZE: usize = 8;

/// Tuning knobs for one puzzle generation pass. Read-only once handed to a
/// [`Generator`](crate::Generator).
#[derive(Clone, Debug)]
pub struct PuzzleConfig {
    /// Side length of the square grid. Values below [`MIN_GRID_SIZE`] are
    /// raised to it.
    pub grid_size: usize,
    /// Shortest word admitted by [`prepare_words`](Self::prepare_words).
    pub min_word_length: usize,
    /// Longest word admitted by [`prepare_words`](Self::prepare_words).
    pub max_word_length: usize,
    /// Cap on the number of words in one puzzle.
    pub max_words: usize,
    /// Directions placement may use. An empty set is replaced with all eight.
    pub directions: Vec<Direction>,
    /// Random candidates tried per word before the systematic sweep takes
    /// over. An empirical default; tune it rather than derive it.
    pub phase1_attempts: usize,
    /// Fixes the random source so a run can be reproduced.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            min_word_length: 3,
            max_word_length: 10,
            max_words: 10,
            directions: Direction::VARIANTS.to_vec(),
            phase1_attempts: 100,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Builds a direction set from raw `(dx, dy)` vectors as a loader
    /// supplies them. Non-unit and zero vectors are dropped with a warning;
    /// if nothing usable remains, the full eight-direction set is
    /// substituted.
    pub fn directions_from_deltas(deltas: &[(isize, isize)]) -> Vec<Direction> {
        let directions = deltas
            .iter()
            .filter_map(|&(dx, dy)| {
                if dx.abs() > 1 || dy.abs() > 1 {
                    warn!("dropping non-unit direction vector ({dx}, {dy})");
                    return None;
                }
                let direction = Direction::from_deltas(dx, dy);
                if direction.is_none() {
                    warn!("dropping degenerate direction vector (0, 0)");
                }
                direction
            })
            .unique()
            .collect_vec();

        if directions.is_empty() {
            warn!("no usable direction vectors supplied, substituting all eight");
            Direction::VARIANTS.to_vec()
        } else {
            directions
        }
    }

    /// Applies the caller-side word contract: uppercase, length within
    /// `min_word_length..=max_word_length`, de-duplicated, truncated to
    /// `max_words`.
    pub fn prepare_words<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| {
                (self.min_word_length..=self.max_word_length).contains(&word.chars().count())
            })
            .unique()
            .take(self.max_words)
            .collect_vec()
    }
}
