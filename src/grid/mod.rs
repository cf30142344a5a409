//! Grid environment model.
//!
//! Holds everything the learner needs to know about the world: the occupancy
//! matrix, the four actions, the transition rule, and the reward function.

pub mod error;
pub mod matrix;
pub mod types;
pub mod world;

pub use error::{Endpoint, ValidationError};
pub use matrix::OccupancyMatrix;
pub use types::{Action, ActionIndexing, Cell, ACTION_COUNT};
pub use world::{GridWorld, GOAL_REWARD, OBSTACLE_REWARD, STEP_LIMIT_FACTOR, STEP_REWARD};
