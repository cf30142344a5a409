//! Training statistics.

use std::fmt;

/// Terminal state of one training episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The agent entered the goal cell.
    ReachedGoal,
    /// The episode hit its step cap and was abandoned.
    ExceededLimit,
}

/// Aggregated statistics for one call to [`super::QLearningSolver::train`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingStats {
    /// Number of episodes run.
    pub episodes: usize,
    /// Episodes that ended at the goal.
    pub reached_goal: usize,
    /// Episodes abandoned at the step cap.
    pub truncated: usize,
    /// Transitions taken across all episodes. Each one is a Q-table update.
    pub total_steps: usize,
}

impl TrainingStats {
    /// Folds one finished episode into the totals.
    pub fn record(&mut self, outcome: EpisodeOutcome, steps: usize) {
        self.episodes += 1;
        self.total_steps += steps;
        match outcome {
            EpisodeOutcome::ReachedGoal => self.reached_goal += 1,
            EpisodeOutcome::ExceededLimit => self.truncated += 1,
        }
    }

    /// Mean number of steps per episode, `0.0` when nothing ran.
    pub fn mean_steps(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.episodes as f64
        }
    }

    /// Percentage of episodes that reached the goal.
    pub fn success_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.reached_goal as f64 / self.episodes as f64 * 100.0
        }
    }
}

impl fmt::Display for TrainingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Training Stats ({} episodes) ===", self.episodes)?;
        writeln!(f, "  Reached goal:        {}", self.reached_goal)?;
        writeln!(f, "  Truncated:           {}", self.truncated)?;
        writeln!(f, "  Success rate:        {:.1}%", self.success_rate())?;
        writeln!(f, "  Total updates:       {}", self.total_steps)?;
        writeln!(f, "  Mean steps/episode:  {:.2}", self.mean_steps())
    }
}
