//! Property-based checks for the grid model and the learner.

use proptest::prelude::*;

use gridq::grid::{GOAL_REWARD, OBSTACLE_REWARD, STEP_REWARD};
use gridq::{Action, ActionIndexing, Cell, GridWorld, PathReport, QLearningConfig, QLearningSolver};

/// Random grid up to 6x6 with the top-left cell forced free, plus a sample cell.
fn grid_and_cell() -> impl Strategy<Value = (Vec<Vec<bool>>, Cell)> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(h, w)| {
        (
            prop::collection::vec(prop::collection::vec(any::<bool>(), w), h),
            0..h,
            0..w,
        )
            .prop_map(|(mut rows, r, c)| {
                rows[0][0] = false;
                (rows, Cell::new(r, c))
            })
    })
}

proptest! {
    #[test]
    fn neighbors_are_in_bounds_and_free((rows, cell) in grid_and_cell()) {
        let origin = Cell::new(0, 0);
        let world = GridWorld::from_rows(&rows, origin, origin).unwrap();
        let neighbors = world.neighbors(cell);
        prop_assert!(neighbors.len() <= 4);
        for n in neighbors {
            prop_assert!(world.in_bounds(n));
            prop_assert!(!world.is_obstacle(n));
            prop_assert!(n.is_adjacent(cell));
        }
    }

    #[test]
    fn rewards_by_cell_kind((rows, cell) in grid_and_cell()) {
        let origin = Cell::new(0, 0);
        let world = GridWorld::from_rows(&rows, origin, origin).unwrap();
        prop_assert_eq!(world.reward(origin), GOAL_REWARD);
        if cell != origin {
            let expected = if rows[cell.row][cell.col] { OBSTACLE_REWARD } else { STEP_REWARD };
            prop_assert_eq!(world.reward(cell), expected);
        }
    }

    #[test]
    fn resolution_never_lands_on_obstacle(
        (rows, cell) in grid_and_cell(),
        action_index in 0usize..6,
    ) {
        let origin = Cell::new(0, 0);
        let world = GridWorld::from_rows(&rows, origin, origin).unwrap();
        for indexing in [ActionIndexing::Canonical, ActionIndexing::FilteredNeighbor] {
            let next = world.resolve(cell, action_index, indexing);
            prop_assert!(next == cell || world.is_free(next));
        }
        if let Some(action) = Action::from_index(action_index) {
            let next = world.step(cell, action);
            prop_assert!(next == cell || next.is_adjacent(cell));
        }
    }

    #[test]
    fn update_touches_exactly_one_entry(
        (rows, cell) in grid_and_cell(),
        action_index in 0usize..4,
        reward in -1.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let origin = Cell::new(0, 0);
        let world = GridWorld::from_rows(&rows, origin, origin).unwrap();
        let mut solver = QLearningSolver::new(world, QLearningConfig::default().with_seed(seed)).unwrap();
        let before = solver.q_table().clone();
        prop_assert!(solver.update(cell, action_index, reward, origin).is_ok());
        for (c, row) in solver.q_table().iter() {
            for (a, q) in row.iter().enumerate() {
                if c != cell || a != action_index {
                    prop_assert_eq!(*q, before.value(c, a));
                }
            }
        }
    }

    #[test]
    fn greedy_selection_without_exploration(
        values in prop::array::uniform4(-1.0f64..1.0),
        seed in any::<u64>(),
    ) {
        let rows = vec![vec![false; 2]; 2];
        let world = GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        let config = QLearningConfig { epsilon: 0.0, ..QLearningConfig::default() }.with_seed(seed);
        let mut solver = QLearningSolver::new(world, config).unwrap();
        let cell = Cell::new(0, 0);
        for (a, v) in values.iter().enumerate() {
            solver.update(cell, a, *v / 0.1, Cell::new(1, 1)).unwrap();
        }
        let greedy = solver.greedy_action(cell);
        for _ in 0..10 {
            prop_assert_eq!(solver.select_action(cell), greedy);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn extracted_paths_are_valid_or_reported((rows, cell) in grid_and_cell(), seed in any::<u64>()) {
        let origin = Cell::new(0, 0);
        prop_assume!(!rows[cell.row][cell.col]);
        let world = GridWorld::from_rows(&rows, origin, cell).unwrap();
        let config = QLearningConfig {
            max_steps_per_episode: Some(500),
            ..QLearningConfig::default()
        }
        .with_seed(seed);
        let mut solver = QLearningSolver::new(world, config).unwrap();
        prop_assert!(solver.train(50).is_ok());
        if let Ok(path) = solver.extract_path() {
            prop_assert!(PathReport::is_valid(solver.world(), &path));
        }
    }
}
