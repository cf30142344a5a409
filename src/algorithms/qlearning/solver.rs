//! Tabular Q-learning solver.
//!
//! Learns action values for a single [`GridWorld`] with one-step temporal
//! difference updates, then reads a route off the greedy policy.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::QLearningConfig;
use super::metrics::{EpisodeOutcome, TrainingStats};
use super::q_table::QTable;
use crate::algorithms::baseline::ShortestPathPlanner;
use crate::algorithms::error::PlanningError;
use crate::grid::{Cell, GridWorld, ValidationError, ACTION_COUNT};

/// Q-learning solver bound to one world.
///
/// # Lifecycle
///
/// 1. Call [`QLearningSolver::new`] with a world and configuration.
/// 2. Call [`QLearningSolver::train`] one or more times.
/// 3. Call [`QLearningSolver::extract_path`] to read the learned route.
///
/// The Q-table is not synchronised; a solver may be moved to another thread
/// but must not be driven from two threads at once.
#[derive(Debug)]
pub struct QLearningSolver {
    world: GridWorld,
    config: QLearningConfig,
    q_table: QTable,
    rng: StdRng,
    episodes_trained: usize,
}

impl QLearningSolver {
    /// Creates a solver with a zero-initialised Q-table.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a hyperparameter is out of range.
    pub fn new(world: GridWorld, config: QLearningConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            q_table: QTable::for_world(&world),
            world,
            config,
            rng,
            episodes_trained: 0,
        })
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Action values at `cell`, or `None` outside the grid.
    pub fn q_values(&self, cell: Cell) -> Option<&[f64; ACTION_COUNT]> {
        self.q_table.get(cell)
    }

    /// Total episodes run across all calls to [`Self::train`].
    pub fn episodes_trained(&self) -> usize {
        self.episodes_trained
    }

    /// Greedy action index at `cell`, ties broken by the lowest index.
    pub fn greedy_action(&self, cell: Cell) -> usize {
        self.q_table.best_action(cell)
    }

    /// ε-greedy action selection.
    ///
    /// With probability ε returns a uniformly random index in `0..4`,
    /// otherwise the greedy index.
    pub fn select_action(&mut self, cell: Cell) -> usize {
        if self.rng.gen::<f64>() < self.config.epsilon {
            self.rng.gen_range(0..ACTION_COUNT)
        } else {
            self.greedy_action(cell)
        }
    }

    /// One-step Q-learning update.
    ///
    /// `Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]`
    ///
    /// # Errors
    ///
    /// [`PlanningError::InvalidTransition`] when `cell` or `next_cell` lies
    /// outside the grid or `action_index >= 4`. The table is left untouched.
    pub fn update(
        &mut self,
        cell: Cell,
        action_index: usize,
        reward: f64,
        next_cell: Cell,
    ) -> Result<(), PlanningError> {
        let invalid = PlanningError::InvalidTransition {
            cell,
            action_index,
            next_cell,
        };
        if action_index >= ACTION_COUNT || !self.world.in_bounds(next_cell) {
            return Err(invalid);
        }
        let best_next = self.q_table.max_value(next_cell);
        let alpha = self.config.alpha;
        let gamma = self.config.gamma;
        let row = self.q_table.get_mut(cell).ok_or(invalid)?;
        let current = row[action_index];
        row[action_index] = current + alpha * (reward + gamma * best_next - current);
        Ok(())
    }

    /// Runs `episodes` training episodes from the start cell.
    ///
    /// Each episode ends when the agent enters the goal or after the
    /// configured step cap, whichever comes first.
    ///
    /// # Errors
    ///
    /// Propagates [`PlanningError::InvalidTransition`] from [`Self::update`].
    /// Moves are resolved inside the grid, so this does not happen in
    /// practice.
    pub fn train(&mut self, episodes: usize) -> Result<TrainingStats, PlanningError> {
        if !ShortestPathPlanner::is_reachable(&self.world) {
            warn!(
                "Goal {} is unreachable from {}; every episode will hit the step cap",
                self.world.goal(),
                self.world.start()
            );
        }

        let limit = self.config.episode_step_limit(&self.world);
        let mut stats = TrainingStats::default();
        for episode in 0..episodes {
            let (outcome, steps) = self.run_episode(limit)?;
            if outcome == EpisodeOutcome::ExceededLimit {
                debug!(
                    "Episode {} abandoned after {} steps without reaching {}",
                    self.episodes_trained + episode,
                    steps,
                    self.world.goal()
                );
            }
            stats.record(outcome, steps);
        }
        self.episodes_trained += episodes;

        info!(
            "Trained {} episodes: {} reached goal, {} truncated, {:.2} mean steps",
            stats.episodes,
            stats.reached_goal,
            stats.truncated,
            stats.mean_steps()
        );
        Ok(stats)
    }

    fn run_episode(&mut self, limit: usize) -> Result<(EpisodeOutcome, usize), PlanningError> {
        let goal = self.world.goal();
        let indexing = self.config.action_indexing;
        let mut state = self.world.start();
        let mut steps = 0;

        while state != goal {
            if steps >= limit {
                return Ok((EpisodeOutcome::ExceededLimit, steps));
            }
            let action = self.select_action(state);
            let next = self.world.resolve(state, action, indexing);
            let reward = self.world.reward(next);
            self.update(state, action, reward, next)?;
            state = next;
            steps += 1;
        }

        Ok((EpisodeOutcome::ReachedGoal, steps))
    }

    /// Follows the greedy policy from start to goal.
    ///
    /// The returned path starts with the start cell and ends with the goal.
    /// The Q-table is left untouched, so repeated calls agree.
    ///
    /// # Errors
    ///
    /// [`PlanningError::PathNotFound`] when the rollout revisits a cell (the
    /// greedy policy is deterministic, so it would loop forever) or exceeds
    /// the configured step cap.
    pub fn extract_path(&self) -> Result<Vec<Cell>, PlanningError> {
        let start = self.world.start();
        let goal = self.world.goal();
        let limit = self.config.path_step_limit(&self.world);
        let indexing = self.config.action_indexing;

        let mut state = start;
        let mut path = vec![start];
        let mut visited = HashSet::from([start]);

        while state != goal {
            let steps = path.len() - 1;
            if steps >= limit {
                debug!("Greedy rollout exceeded {} steps", limit);
                return Err(PlanningError::PathNotFound { start, goal, steps });
            }
            let next = self
                .world
                .resolve(state, self.greedy_action(state), indexing);
            if !visited.insert(next) {
                debug!("Greedy rollout loops at {} after {} steps", next, steps);
                return Err(PlanningError::PathNotFound {
                    start,
                    goal,
                    steps: steps + 1,
                });
            }
            path.push(next);
            state = next;
        }

        debug!("Extracted path of {} cells", path.len());
        Ok(path)
    }
}
