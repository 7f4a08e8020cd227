//! Parses and solves the shared grid fixtures under `tests/fixtures/`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use isthmus_core::{Coord, GridError, IsthmusSolver, ParseError, parse_grid};

fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    std::fs::read_to_string(&path).expect("read fixture")
}

fn peaks_of(name: &str) -> Vec<Coord> {
    let grid = parse_grid(&fixture(name)).expect("fixture parses");
    let solver = IsthmusSolver::new(&grid).expect("fixture solves");
    solver.peaks().iter().collect()
}

#[test]
fn reference_text_and_json_agree() {
    let expected = vec![Coord::new(0, 4), Coord::new(6, 4)];
    assert_eq!(peaks_of("reference.txt"), expected);
    assert_eq!(peaks_of("reference.json"), expected);
}

#[test]
fn single_column_fixture() {
    assert_eq!(
        peaks_of("single-column.txt"),
        vec![Coord::new(0, 1), Coord::new(1, 1)]
    );
}

#[test]
fn all_sea_fixture_has_no_peaks() {
    assert!(peaks_of("all-sea.txt").is_empty());
}

#[test]
fn land_seed_fixture_is_permissive() {
    assert_eq!(peaks_of("land-seed.txt").len(), 3);
}

#[test]
fn ragged_fixture_is_rejected() {
    let err = parse_grid(&fixture("ragged.txt")).expect_err("ragged");
    assert_eq!(
        err,
        ParseError::Grid(GridError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn negative_fixture_is_rejected() {
    let err = parse_grid(&fixture("negative.txt")).expect_err("negative");
    assert!(
        matches!(err, ParseError::InvalidValue { line: 2, .. }),
        "unexpected error: {err}"
    );
}
