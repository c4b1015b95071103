//! # FitOptions
//!
//! The `FitOptions` struct represents the configuration of a fitting run:
//! the stagnation policy (`min_delta`, `n_tolerance`) layered on top of the
//! optimizer configuration it drives.
//!
//! ## Example
//!
//! ```rust
//! use swarmfit::fit::options::FitOptions;
//! use swarmfit::swarm::config::OptimizerConfig;
//!
//! let options = FitOptions::builder()
//!     .min_delta(1e-6)
//!     .n_tolerance(25)
//!     .optimizer(OptimizerConfig::builder().n_particles(50).build())
//!     .build();
//!
//! assert_eq!(options.get_n_tolerance(), 25);
//! ```

use crate::swarm::config::OptimizerConfig;

/// Configuration of a fitting run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitOptions {
    min_delta: f64,
    n_tolerance: usize,
    optimizer: OptimizerConfig,
}

impl FitOptions {
    pub fn new(min_delta: f64, n_tolerance: usize, optimizer: OptimizerConfig) -> Self {
        Self {
            min_delta,
            n_tolerance,
            optimizer,
        }
    }

    /// Minimum loss improvement for a step to count as progress.
    pub fn get_min_delta(&self) -> f64 {
        self.min_delta
    }

    /// Number of consecutive non-improving steps tolerated before the run
    /// is suspended.
    pub fn get_n_tolerance(&self) -> usize {
        self.n_tolerance
    }

    pub fn get_optimizer(&self) -> &OptimizerConfig {
        &self.optimizer
    }

    /// Returns a builder for creating a `FitOptions` instance.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            min_delta: 100.0,
            n_tolerance: 10,
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// Builder for `FitOptions`.
///
/// Provides a fluent interface for constructing `FitOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    min_delta: Option<f64>,
    n_tolerance: Option<usize>,
    optimizer: Option<OptimizerConfig>,
}

impl FitOptionsBuilder {
    /// Sets the minimum loss improvement.
    pub fn min_delta(mut self, value: f64) -> Self {
        self.min_delta = Some(value);
        self
    }

    /// Sets the stagnation tolerance.
    pub fn n_tolerance(mut self, value: usize) -> Self {
        self.n_tolerance = Some(value);
        self
    }

    /// Sets the optimizer configuration.
    pub fn optimizer(mut self, value: OptimizerConfig) -> Self {
        self.optimizer = Some(value);
        self
    }

    /// Builds the `FitOptions` instance, falling back to the defaults for
    /// unset fields.
    pub fn build(self) -> FitOptions {
        let defaults = FitOptions::default();
        FitOptions {
            min_delta: self.min_delta.unwrap_or(defaults.min_delta),
            n_tolerance: self.n_tolerance.unwrap_or(defaults.n_tolerance),
            optimizer: self.optimizer.unwrap_or(defaults.optimizer),
        }
    }
}
