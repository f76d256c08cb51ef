use kethaneum::{Generator, PuzzleConfig, SelectedCell};

// Generates a puzzle, prints it, then replays every placement through the
// matcher (alternating forward and reverse reads) as a whole-engine smoke
// run. Pass a seed as the first argument to reproduce a board.
fn main() {
    env_logger::init();

    let seed: Option<u64> = std::env::args().nth(1).and_then(|arg| arg.parse().ok());
    let config = PuzzleConfig { seed, ..PuzzleConfig::default() };

    let raw = ["archive", "lantern", "scroll", "codex", "quill", "cipher", "binding"];
    let words = config.prepare_words(&raw);

    let mut generator = Generator::new(config);
    let mut puzzle = generator
        .generate_or_fallback(&words)
        .expect("word list is nonempty");

    println!("{}", puzzle.grid());
    for placement in puzzle.placements() {
        let (anchor, end) = (placement.anchor(), placement.end());
        println!(
            "{} from ({}, {}) to ({}, {}) heading {:?}",
            placement.word(),
            anchor.0,
            anchor.1,
            end.0,
            end.1,
            placement.direction()
        );
    }

    let paths: Vec<Vec<SelectedCell>> = puzzle
        .placements()
        .iter()
        .map(|placement| {
            placement
                .cells()
                .map(|location| SelectedCell {
                    location,
                    letter: puzzle.grid().letter(location).expect("placements stay on the grid"),
                })
                .collect()
        })
        .collect();

    for (index, mut path) in paths.into_iter().enumerate() {
        if index % 2 == 1 {
            path.reverse();
        }
        let hit = puzzle
            .check_selection(&path)
            .expect("replayed placements always match");
        println!("found {}", hit.word());
    }

    assert!(puzzle.is_complete());
    println!("all words found");
}
