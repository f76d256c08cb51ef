#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use crate::cell::Cell;
    use crate::generator::{can_place, write_word, FALLBACK_WORDS};
    use crate::{
        Direction, GenerateError, Generator, Grid, Location, Puzzle, PuzzleConfig, SelectedCell,
        MIN_GRID_SIZE,
    };

    fn seeded(seed: u64) -> Generator {
        Generator::new(PuzzleConfig { seed: Some(seed), ..PuzzleConfig::default() })
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_owned()).collect()
    }

    fn selection_for(puzzle: &Puzzle, placement_index: usize) -> Vec<SelectedCell> {
        let placement = &puzzle.placements()[placement_index];
        placement
            .cells()
            .map(|location| SelectedCell {
                location,
                letter: puzzle.grid().letter(location).unwrap(),
            })
            .collect()
    }

    fn assert_reads_back(puzzle: &Puzzle) {
        for placement in puzzle.placements() {
            let read: String = placement
                .cells()
                .map(|location| puzzle.grid().letter(location).unwrap())
                .collect();
            assert_eq!(read, placement.word());
        }
    }

    fn assert_fully_filled(grid: &Grid) {
        for y in 0..grid.size() {
            for x in 0..grid.size() {
                assert!(grid.letter(Location(x, y)).unwrap().is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn generate_places_every_word() {
        let mut generator = seeded(7);
        let puzzle = generator.generate(&owned(&["CAT", "DOG"])).unwrap();

        assert_eq!(puzzle.placements().len(), 2);
        assert!(puzzle.placements().iter().all(|placement| !placement.is_found()));
        assert_reads_back(&puzzle);
        assert_fully_filled(puzzle.grid());
    }

    #[test]
    fn placements_survive_many_seeds() {
        for seed in 0..10 {
            let mut generator = seeded(seed);
            let puzzle = generator
                .generate(&owned(&["CAT", "DOG", "SUN", "MAP", "INK"]))
                .unwrap();

            assert_eq!(puzzle.placements().len(), 5);
            assert_reads_back(&puzzle);
            assert_fully_filled(puzzle.grid());
        }
    }

    #[test]
    fn equal_seeds_reproduce() {
        let words = owned(&["CAT", "DOG", "SUN"]);
        let first = seeded(99).generate(&words).unwrap();
        let second = seeded(99).generate(&words).unwrap();

        assert_eq!(first.grid().rows(), second.grid().rows());
        assert_eq!(first.placements(), second.placements());
    }

    #[test]
    fn crossing_words_share_their_letter() {
        let mut working = Array2::from_shape_simple_fn((10, 10), Cell::default);
        write_word(&mut working, "CAT", Location(0, 0), Direction::RIGHT);

        // ARM crosses CAT at the shared A
        assert!(can_place(&working, "ARM", Location(1, 0), Direction::DOWN));
        // BAT conflicts with CAT at the anchor
        assert!(!can_place(&working, "BAT", Location(0, 0), Direction::RIGHT));

        write_word(&mut working, "ARM", Location(1, 0), Direction::DOWN);
        assert_eq!(working[Location(1, 0).as_index()], Cell::Letter('A'));
    }

    #[test]
    fn end_cell_bound_is_exclusive() {
        let working = Array2::from_shape_simple_fn((10, 10), Cell::default);

        // end cell would land on column 10 of a 10-wide grid
        assert!(!can_place(&working, "HELLO", Location(6, 0), Direction::RIGHT));
        assert!(can_place(&working, "HELLO", Location(5, 0), Direction::RIGHT));
        // wraps past the top edge
        assert!(!can_place(&working, "HELLO", Location(0, 3), Direction::UP));
    }

    #[test]
    fn sweep_places_when_random_budget_is_zero() {
        let mut generator = Generator::new(PuzzleConfig {
            grid_size: 8,
            phase1_attempts: 0,
            seed: Some(0),
            ..PuzzleConfig::default()
        });
        let puzzle = generator.generate(&owned(&["HELLO"])).unwrap();

        // first sweep slot: top-left cell, first fitting direction in
        // declaration order (UP leaves the grid, DOWN fits)
        assert_eq!(puzzle.placements()[0].anchor(), Location(0, 0));
        assert_eq!(puzzle.placements()[0].direction(), Direction::DOWN);
        assert_reads_back(&puzzle);
    }

    #[test]
    fn unplaceable_word_reports_then_falls_back() {
        let words = owned(&["SUPERCALIFRAGILISTIC"]);

        let mut generator = Generator::new(PuzzleConfig {
            grid_size: 8,
            seed: Some(1),
            ..PuzzleConfig::default()
        });
        assert_eq!(
            generator.generate(&words).unwrap_err(),
            GenerateError::Unplaceable { word: "SUPERCALIFRAGILISTIC".to_owned() }
        );

        let puzzle = generator.generate_or_fallback(&words).unwrap();
        let placed: Vec<&str> = puzzle.placements().iter().map(|p| p.word()).collect();
        assert_eq!(placed, FALLBACK_WORDS);
        assert_reads_back(&puzzle);
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let mut generator = seeded(2);

        assert_eq!(generator.generate(&[]).unwrap_err(), GenerateError::EmptyWordList);
        assert_eq!(generator.generate(&[String::new()]).unwrap_err(), GenerateError::EmptyWordList);
        assert_eq!(generator.generate_or_fallback(&[]).unwrap_err(), GenerateError::EmptyWordList);
    }

    #[test]
    fn fallback_grid_is_valid_at_any_size() {
        for size in [MIN_GRID_SIZE, 10, 13] {
            let mut generator = Generator::new(PuzzleConfig {
                grid_size: size,
                seed: Some(3),
                ..PuzzleConfig::default()
            });
            let puzzle = generator.fallback();

            assert!(puzzle.placements().len() >= 3);
            assert_reads_back(&puzzle);
            assert_fully_filled(puzzle.grid());

            // fixed anchors stagger the vocabulary down the diagonal
            let rows = puzzle.grid().rows();
            assert!(rows[0].starts_with("LANTERN"));
            assert_eq!(&rows[1][1..7], "SCROLL");
        }
    }

    #[test]
    fn grid_size_clamped_to_minimum() {
        let generator = Generator::new(PuzzleConfig { grid_size: 5, ..PuzzleConfig::default() });
        assert_eq!(generator.config().grid_size, MIN_GRID_SIZE);
    }

    #[test]
    fn matcher_finds_forward_read() {
        let mut generator = seeded(11);
        let mut puzzle = generator.generate(&owned(&["CAT"])).unwrap();

        let selection = selection_for(&puzzle, 0);
        let hit = puzzle.check_selection(&selection).unwrap();
        assert_eq!(hit.word(), "CAT");

        assert!(puzzle.placements()[0].is_found());
        assert!(puzzle.is_complete());
    }

    #[test]
    fn matcher_finds_reverse_read() {
        let mut generator = seeded(12);
        let mut puzzle = generator.generate(&owned(&["DOG"])).unwrap();

        let mut selection = selection_for(&puzzle, 0);
        selection.reverse();
        let hit = puzzle.check_selection(&selection).unwrap();
        assert_eq!(hit.word(), "DOG");

        assert!(puzzle.is_complete());
    }

    #[test]
    fn found_words_do_not_rematch() {
        let mut generator = seeded(13);
        let mut puzzle = generator.generate(&owned(&["CAT"])).unwrap();

        let selection = selection_for(&puzzle, 0);
        assert!(puzzle.check_selection(&selection).is_some());
        assert!(puzzle.check_selection(&selection).is_none());
        assert!(puzzle.is_complete());
    }

    #[test]
    fn mismatched_selection_is_silent() {
        let mut generator = seeded(14);
        let mut puzzle = generator.generate(&owned(&["CAT", "DOG"])).unwrap();

        let selection: Vec<SelectedCell> = (0..3)
            .map(|x| SelectedCell { location: Location(x, 7), letter: 'Q' })
            .collect();

        assert!(puzzle.check_selection(&selection).is_none());
        assert!(puzzle.placements().iter().all(|placement| !placement.is_found()));
    }

    #[test]
    fn degenerate_selections_are_ignored() {
        let mut generator = seeded(15);
        let mut puzzle = generator.generate(&owned(&["CAT"])).unwrap();

        assert!(puzzle.check_selection(&[]).is_none());
        let lone = SelectedCell { location: Location(0, 0), letter: 'C' };
        assert!(puzzle.check_selection(&[lone]).is_none());
    }

    #[test]
    fn zero_vector_is_never_a_direction() {
        assert_eq!(Direction::from_deltas(0, 0), None);
        // sign-normalization: any straight-line delta resolves to a heading
        assert_eq!(Direction::from_deltas(3, -3), Some(Direction::UPRIGHT));
        assert_eq!(Direction::from_deltas(0, 5), Some(Direction::DOWN));
    }

    #[test]
    fn direction_set_is_sanitized() {
        assert_eq!(
            PuzzleConfig::directions_from_deltas(&[(0, 1), (2, 0), (0, 0)]),
            vec![Direction::DOWN]
        );
        // nothing usable: substitute the full set
        assert_eq!(PuzzleConfig::directions_from_deltas(&[(5, 5), (0, 0)]).len(), 8);

        let generator = Generator::new(PuzzleConfig {
            directions: Vec::new(),
            ..PuzzleConfig::default()
        });
        assert_eq!(generator.config().directions.len(), 8);
    }

    #[test]
    fn prepare_words_applies_caller_contract() {
        let config = PuzzleConfig::default();

        let words = config.prepare_words(&["cat", "CAT", "ox", "extraordinarily", " dog "]);
        assert_eq!(words, vec!["CAT", "DOG"]);

        let many: Vec<String> = (0..15).map(|i| format!("WORD{i:02}")).collect();
        assert_eq!(config.prepare_words(&many).len(), config.max_words);
    }
}
