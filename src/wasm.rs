//! Browser bindings. The surrounding game runs in the browser; this module
//! exposes the engine to it as a single handle class.

use wasm_bindgen::prelude::*;

use crate::config::PuzzleConfig;
use crate::direction::Direction;
use crate::generator::Generator;
use crate::location::Location;
use crate::placement::SelectedCell;
use crate::puzzle::Puzzle;

/// A generated puzzle held for JS: grid access, drag checking, win state.
#[wasm_bindgen]
pub struct PuzzleHandle {
    puzzle: Puzzle,
}

#[wasm_bindgen]
impl PuzzleHandle {
    /// Generates a puzzle from a JS array of word strings. Non-string array
    /// entries are ignored. Words that fit nowhere take the fallback path so
    /// the player always receives a playable board; an empty word list
    /// throws.
    #[wasm_bindgen(constructor)]
    pub fn new(words: js_sys::Array, grid_size: usize, seed: Option<u64>) -> Result<PuzzleHandle, JsValue> {
        let raw: Vec<String> = words.iter().filter_map(|value| value.as_string()).collect();

        let config = PuzzleConfig { grid_size, seed, ..PuzzleConfig::default() };
        let words = config.prepare_words(&raw);

        let mut generator = Generator::new(config);
        let puzzle = generator
            .generate_or_fallback(&words)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(PuzzleHandle { puzzle })
    }

    /// The grid as one string per row, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.puzzle.grid().rows()
    }

    /// Every hidden word, in placement order.
    pub fn words(&self) -> Vec<String> {
        self.puzzle
            .placements()
            .iter()
            .map(|placement| placement.word().to_owned())
            .collect()
    }

    /// The hidden words the player has not found yet.
    pub fn remaining_words(&self) -> Vec<String> {
        self.puzzle
            .placements()
            .iter()
            .filter(|placement| !placement.is_found())
            .map(|placement| placement.word().to_owned())
            .collect()
    }

    /// Checks the straight line dragged from `(start_x, start_y)` to
    /// `(end_x, end_y)`. A browser drag knows only its endpoints, so the
    /// intermediate letters are read back off the grid here. Returns the
    /// matched word, or `undefined` on any miss (including a non-straight or
    /// out-of-bounds drag).
    pub fn check_drag(
        &mut self,
        start_x: usize,
        start_y: usize,
        end_x: usize,
        end_y: usize,
    ) -> Option<String> {
        let run_x = end_x as isize - start_x as isize;
        let run_y = end_y as isize - start_y as isize;
        if run_x != 0 && run_y != 0 && run_x.abs() != run_y.abs() {
            return None;
        }

        let direction = Direction::from_deltas(run_x, run_y)?;
        let steps = run_x.unsigned_abs().max(run_y.unsigned_abs());

        let mut selection = Vec::with_capacity(steps + 1);
        let mut location = Location(start_x, start_y);
        for _ in 0..=steps {
            let letter = self.puzzle.grid().letter(location)?;
            selection.push(SelectedCell { location, letter });
            location = direction.attempt_from(location);
        }

        self.puzzle
            .check_selection(&selection)
            .map(|placement| placement.word().to_owned())
    }

    /// True once every hidden word has been found.
    pub fn is_complete(&self) -> bool {
        self.puzzle.is_complete()
    }
}
