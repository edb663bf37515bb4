use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::clusterer::error::ClusterError;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// What the update step does with a centroid that received no points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Leave the centroid where it was for this iteration
    #[default]
    Keep,
    /// Abort clustering with `ClusterError::EmptyCluster`
    Fail,
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmeansConfig {
    pub max_iterations: usize,
    /// Largest coordinate change still counted as converged; 0.0 means exact equality
    pub tolerance: f64,
    pub empty_cluster: EmptyClusterPolicy,
}

impl KmeansConfig {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: 0.0,
            empty_cluster: EmptyClusterPolicy::Keep,
        }
    }

    /// Set the iteration cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the empty cluster policy
    pub fn empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.max_iterations == 0 {
            return Err(ClusterError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidConfig(format!(
                "tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self::new()
    }
}
