//! Exact shortest-path baseline.
//!
//! Builds an undirected graph over the free cells and runs A* with the
//! Manhattan heuristic. Used to check reachability before training and to
//! score learned paths.

use petgraph::algo::astar;
use petgraph::graphmap::UnGraphMap;

use super::error::PlanningError;
use super::PathPlanner;
use crate::grid::{Action, Cell, GridWorld};

/// Shortest-path planner over the 4-connected free cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathPlanner;

impl ShortestPathPlanner {
    /// Creates the baseline planner.
    pub fn new() -> Self {
        Self
    }

    /// Graph with one node per free cell and one edge per adjacent free pair.
    pub fn graph(world: &GridWorld) -> UnGraphMap<Cell, ()> {
        let mut graph = UnGraphMap::new();
        for cell in world.matrix().free_cells() {
            graph.add_node(cell);
            // East and south suffice: every other pair is added from its partner.
            for action in [Action::East, Action::South] {
                if let Some(next) = world.target(cell, action).filter(|c| world.is_free(*c)) {
                    graph.add_edge(cell, next, ());
                }
            }
        }
        graph
    }

    /// Shortest start-to-goal path, inclusive of both ends.
    pub fn shortest_path(world: &GridWorld) -> Option<Vec<Cell>> {
        let graph = Self::graph(world);
        let goal = world.goal();
        astar(
            &graph,
            world.start(),
            |c| c == goal,
            |_| 1usize,
            |c| c.manhattan_distance(goal),
        )
        .map(|(_, path)| path)
    }

    /// Number of moves on the shortest path, if the goal is reachable.
    pub fn shortest_path_len(world: &GridWorld) -> Option<usize> {
        Self::shortest_path(world).map(|p| p.len() - 1)
    }

    /// Returns true if the goal can be reached from the start.
    pub fn is_reachable(world: &GridWorld) -> bool {
        Self::shortest_path(world).is_some()
    }
}

impl PathPlanner for ShortestPathPlanner {
    fn plan(&mut self, world: &GridWorld) -> Result<Vec<Cell>, PlanningError> {
        Self::shortest_path(world).ok_or(PlanningError::PathNotFound {
            start: world.start(),
            goal: world.goal(),
            steps: 0,
        })
    }

    fn name(&self) -> &str {
        "shortest_path"
    }
}
