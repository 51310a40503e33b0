//! Integration test: both carvers produce perfect mazes.
//!
//! For every grid size, the carved wall graph must be a spanning tree:
//! symmetric walls, `W*H - 1` open edges, every cell reachable from the
//! origin.

use mazewright_carve::{Algorithm, Carver, DepthFirst, FrontierCarver, FrontierOrder};
use mazewright_grid::Grid;
use mazewright_test_utils::{assert_perfect_maze, carved, seeded_rng, RecordingSink};
use proptest::prelude::*;

fn all_carvers() -> Vec<Box<dyn Carver>> {
    vec![
        Algorithm::DepthFirst.carver(),
        Algorithm::Frontier(FrontierOrder::Fifo).carver(),
        Algorithm::Frontier(FrontierOrder::Random).carver(),
    ]
}

#[test]
fn one_by_one_for_every_carver() {
    for carver in all_carvers() {
        let (grid, outcome) = carved(carver.as_ref(), 1, 1, 0);
        assert_eq!(grid.open_edge_count(), 0, "{}", carver.name());
        assert_perfect_maze(&grid, outcome.origin);
    }
}

#[test]
fn two_by_two_for_every_carver() {
    for carver in all_carvers() {
        let (grid, outcome) = carved(carver.as_ref(), 2, 2, 9);
        assert_eq!(grid.open_edge_count(), 3, "{}", carver.name());
        assert_eq!(grid.reachable_from(outcome.origin).unwrap(), 4);
    }
}

#[test]
fn long_corridors() {
    for carver in all_carvers() {
        let (grid, outcome) = carved(carver.as_ref(), 64, 1, 5);
        assert_perfect_maze(&grid, outcome.origin);
        let (grid, outcome) = carved(carver.as_ref(), 1, 64, 5);
        assert_perfect_maze(&grid, outcome.origin);
    }
}

#[test]
fn depth_first_and_frontier_differ_on_same_seed() {
    let (a, _) = carved(&DepthFirst, 12, 12, 3);
    let (b, _) = carved(&FrontierCarver::new(FrontierOrder::Fifo), 12, 12, 3);
    assert_eq!(a.open_edge_count(), b.open_edge_count());
    assert_ne!(a, b);
}

#[test]
fn carving_reuses_a_dirty_grid() {
    let mut grid = Grid::new(10, 10).unwrap();
    let mut rng = seeded_rng(1);
    let mut sink = RecordingSink::default();
    let first = DepthFirst.carve(&mut grid, &mut rng, &mut sink).unwrap();
    assert_perfect_maze(&grid, first.origin);

    let second = FrontierCarver::new(FrontierOrder::Random)
        .carve(&mut grid, &mut rng, &mut sink)
        .unwrap();
    assert_perfect_maze(&grid, second.origin);
    assert_eq!(grid.exit(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn depth_first_is_perfect(width in 1u32..20, height in 1u32..20, seed in any::<u64>()) {
        let (grid, outcome) = carved(&DepthFirst, width, height, seed);
        assert_perfect_maze(&grid, outcome.origin);
        prop_assert_eq!(grid.cells().iter().filter(|c| c.is_origin()).count(), 1);
        prop_assert_eq!(grid.cells().iter().filter(|c| c.is_exit()).count(), 1);
        prop_assert!(grid.cells().iter().all(|c| c.distance().is_some()));
    }

    #[test]
    fn frontier_is_perfect(
        width in 1u32..20,
        height in 1u32..20,
        seed in any::<u64>(),
        random in any::<bool>(),
    ) {
        let order = if random { FrontierOrder::Random } else { FrontierOrder::Fifo };
        let (grid, outcome) = carved(&FrontierCarver::new(order), width, height, seed);
        assert_perfect_maze(&grid, outcome.origin);
    }

    #[test]
    fn progress_never_decreases(width in 1u32..12, height in 1u32..12, seed in any::<u64>()) {
        for carver in all_carvers() {
            let mut grid = Grid::new(width, height).unwrap();
            let mut rng = seeded_rng(seed);
            let mut sink = RecordingSink::default();
            carver.carve(&mut grid, &mut rng, &mut sink).unwrap();
            prop_assert!(sink.is_monotonic());
            prop_assert_eq!(sink.last(), Some(100));
        }
    }
}
