use super::config::{QLearningConfig, DEFAULT_EPISODES};
use super::solver::QLearningSolver;
use crate::algorithms::error::PlanningError;
use crate::algorithms::PathPlanner;
use crate::grid::{Cell, GridWorld};

/// [`PathPlanner`] that trains a fresh [`QLearningSolver`] for every request.
#[derive(Debug, Clone)]
pub struct QLearningPlanner {
    config: QLearningConfig,
    episodes: usize,
}

impl QLearningPlanner {
    /// Creates a planner that trains for `episodes` episodes per request.
    pub fn new(config: QLearningConfig, episodes: usize) -> Self {
        Self { config, episodes }
    }

    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    pub fn episodes(&self) -> usize {
        self.episodes
    }
}

impl Default for QLearningPlanner {
    fn default() -> Self {
        Self::new(QLearningConfig::default(), DEFAULT_EPISODES)
    }
}

impl PathPlanner for QLearningPlanner {
    fn plan(&mut self, world: &GridWorld) -> Result<Vec<Cell>, PlanningError> {
        let mut solver = QLearningSolver::new(world.clone(), self.config.clone())?;
        solver.train(self.episodes)?;
        solver.extract_path()
    }

    fn name(&self) -> &str {
        "q_learning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OccupancyMatrix;

    #[test]
    fn plans_corridor() {
        let world = GridWorld::new(
            OccupancyMatrix::open(1, 4).unwrap(),
            Cell::new(0, 0),
            Cell::new(0, 3),
        )
        .unwrap();
        let mut planner = QLearningPlanner::new(QLearningConfig::default().with_seed(2), 200);
        let path = planner.plan(&world).unwrap();
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3)
            ]
        );
        assert_eq!(planner.name(), "q_learning");
    }

    #[test]
    fn invalid_config_surfaces_as_validation_error() {
        let world = GridWorld::new(
            OccupancyMatrix::open(1, 2).unwrap(),
            Cell::new(0, 0),
            Cell::new(0, 1),
        )
        .unwrap();
        let cfg = QLearningConfig {
            epsilon: 2.0,
            ..QLearningConfig::default()
        };
        let err = QLearningPlanner::new(cfg, 10).plan(&world).unwrap_err();
        assert!(matches!(err, PlanningError::Validation(_)));
    }

    #[test]
    fn default_planner_uses_default_episodes() {
        assert_eq!(QLearningPlanner::default().episodes(), DEFAULT_EPISODES);
    }
}
