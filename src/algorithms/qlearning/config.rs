//! Hyperparameters for the Q-learning solver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{ActionIndexing, GridWorld, ValidationError};

/// Default learning rate α.
pub const DEFAULT_ALPHA: f64 = 0.1;
/// Default discount factor γ.
pub const DEFAULT_GAMMA: f64 = 0.9;
/// Default exploration rate ε.
pub const DEFAULT_EPSILON: f64 = 0.2;
/// Default number of training episodes.
pub const DEFAULT_EPISODES: usize = 1000;

/// Configuration for a [`super::QLearningSolver`].
///
/// All values are fixed for the lifetime of a solver; there is no decay
/// schedule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QLearningConfig {
    /// Learning rate α, in `(0, 1]`.
    pub alpha: f64,
    /// Discount factor γ, in `[0, 1)`.
    pub gamma: f64,
    /// Probability ε of a uniformly random action during training, in `[0, 1]`.
    pub epsilon: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Step cap per training episode. `None` uses the world's default limit.
    pub max_steps_per_episode: Option<usize>,
    /// Step cap for greedy path extraction. `None` uses the world's default limit.
    pub max_path_steps: Option<usize>,
    /// How action indices map to moves.
    pub action_indexing: ActionIndexing,
}

impl QLearningConfig {
    /// Returns a copy with a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy using the given action indexing.
    pub fn with_indexing(mut self, indexing: ActionIndexing) -> Self {
        self.action_indexing = indexing;
        self
    }

    /// Checks every hyperparameter against its admissible range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ValidationError::InvalidHyperparameter {
                name: "alpha",
                value: self.alpha,
                expected: "(0, 1]",
            });
        }
        if !(self.gamma >= 0.0 && self.gamma < 1.0) {
            return Err(ValidationError::InvalidHyperparameter {
                name: "gamma",
                value: self.gamma,
                expected: "[0, 1)",
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ValidationError::InvalidHyperparameter {
                name: "epsilon",
                value: self.epsilon,
                expected: "[0, 1]",
            });
        }
        if self.max_steps_per_episode == Some(0) {
            return Err(ValidationError::ZeroStepLimit {
                name: "max_steps_per_episode",
            });
        }
        if self.max_path_steps == Some(0) {
            return Err(ValidationError::ZeroStepLimit {
                name: "max_path_steps",
            });
        }
        Ok(())
    }

    /// Effective step cap for one training episode in `world`.
    pub fn episode_step_limit(&self, world: &GridWorld) -> usize {
        self.max_steps_per_episode
            .unwrap_or_else(|| world.default_step_limit())
    }

    /// Effective step cap for path extraction in `world`.
    pub fn path_step_limit(&self, world: &GridWorld) -> usize {
        self.max_path_steps
            .unwrap_or_else(|| world.default_step_limit())
    }
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            gamma: DEFAULT_GAMMA,
            epsilon: DEFAULT_EPSILON,
            seed: None,
            max_steps_per_episode: None,
            max_path_steps: None,
            action_indexing: ActionIndexing::Canonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, OccupancyMatrix, STEP_LIMIT_FACTOR};

    #[test]
    fn default_config_is_valid() {
        let cfg = QLearningConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.alpha, 0.1);
        assert_eq!(cfg.gamma, 0.9);
        assert_eq!(cfg.epsilon, 0.2);
        assert_eq!(cfg.action_indexing, ActionIndexing::Canonical);
    }

    #[test]
    fn alpha_bounds() {
        for alpha in [0.0, -0.5, 1.5, f64::NAN] {
            let cfg = QLearningConfig {
                alpha,
                ..QLearningConfig::default()
            };
            assert!(
                matches!(
                    cfg.validate(),
                    Err(ValidationError::InvalidHyperparameter { name: "alpha", .. })
                ),
                "alpha {} accepted",
                alpha
            );
        }
        let cfg = QLearningConfig {
            alpha: 1.0,
            ..QLearningConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn gamma_bounds() {
        let cfg = QLearningConfig {
            gamma: 1.0,
            ..QLearningConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ValidationError::InvalidHyperparameter { name: "gamma", .. })
        ));
        let cfg = QLearningConfig {
            gamma: 0.0,
            ..QLearningConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn epsilon_bounds() {
        for epsilon in [0.0, 1.0] {
            let cfg = QLearningConfig {
                epsilon,
                ..QLearningConfig::default()
            };
            assert!(cfg.validate().is_ok());
        }
        let cfg = QLearningConfig {
            epsilon: 1.01,
            ..QLearningConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_step_limits_rejected() {
        let cfg = QLearningConfig {
            max_path_steps: Some(0),
            ..QLearningConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::ZeroStepLimit {
                name: "max_path_steps"
            })
        );
    }

    #[test]
    fn step_limits_default_to_world_size() {
        let world = GridWorld::new(
            OccupancyMatrix::open(2, 3).unwrap(),
            Cell::new(0, 0),
            Cell::new(1, 2),
        )
        .unwrap();
        let cfg = QLearningConfig::default();
        assert_eq!(cfg.episode_step_limit(&world), 6 * STEP_LIMIT_FACTOR);

        let cfg = QLearningConfig {
            max_steps_per_episode: Some(12),
            ..cfg
        };
        assert_eq!(cfg.episode_step_limit(&world), 12);
        assert_eq!(cfg.path_step_limit(&world), 6 * STEP_LIMIT_FACTOR);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fills_missing_fields() {
        let cfg: QLearningConfig =
            serde_json::from_str(r#"{"epsilon": 0.05, "action_indexing": "filtered_neighbor"}"#)
                .unwrap();
        assert_eq!(cfg.epsilon, 0.05);
        assert_eq!(cfg.alpha, DEFAULT_ALPHA);
        assert_eq!(cfg.action_indexing, ActionIndexing::FilteredNeighbor);
    }

    #[test]
    fn builders() {
        let cfg = QLearningConfig::default()
            .with_seed(7)
            .with_indexing(ActionIndexing::FilteredNeighbor);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.action_indexing, ActionIndexing::FilteredNeighbor);
    }
}
