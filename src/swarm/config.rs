//! # Optimizer configuration
//!
//! `SwarmConfig` holds the coefficients of the velocity-update rule shared
//! by every particle; `OptimizerConfig` holds the run-level knobs (seed,
//! step budget, particle count) around it. Both are immutable for the
//! duration of a run.
//!
//! ## Example
//!
//! ```rust
//! use swarmfit::swarm::config::OptimizerConfig;
//!
//! let config = OptimizerConfig::builder()
//!     .seed(42)
//!     .max_steps(200)
//!     .n_particles(50)
//!     .inertia(0.5)
//!     .build();
//!
//! assert_eq!(config.get_max_steps(), 200);
//! ```

/// Coefficients of the per-dimension velocity-update rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    inertia: f64,
    cognitive: f64,
    social: f64,
}

impl SwarmConfig {
    pub fn new(inertia: f64, cognitive: f64, social: f64) -> Self {
        Self {
            inertia,
            cognitive,
            social,
        }
    }

    /// Inertia weight `w`, applied to the previous velocity.
    pub fn get_inertia(&self) -> f64 {
        self.inertia
    }

    /// Cognitive coefficient, weighting the pull towards the particle's own
    /// best position.
    pub fn get_cognitive(&self) -> f64 {
        self.cognitive
    }

    /// Social coefficient, weighting the pull towards the swarm's global
    /// best position.
    pub fn get_social(&self) -> f64 {
        self.social
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            inertia: 0.4,
            cognitive: 0.3,
            social: 0.8,
        }
    }
}

/// Configuration of a full optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    seed: u64,
    max_steps: usize,
    n_particles: usize,
    swarm: SwarmConfig,
}

impl OptimizerConfig {
    pub fn new(seed: u64, max_steps: usize, n_particles: usize, swarm: SwarmConfig) -> Self {
        Self {
            seed,
            max_steps,
            n_particles,
            swarm,
        }
    }

    /// Seed of the engine's position-sampling generator. A fixed seed makes
    /// swarm initialization reproducible; particle trajectories stay
    /// entropy-driven.
    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    /// Step budget of the run.
    pub fn get_max_steps(&self) -> usize {
        self.max_steps
    }

    /// Number of particles in the swarm.
    pub fn get_n_particles(&self) -> usize {
        self.n_particles
    }

    pub fn get_swarm(&self) -> &SwarmConfig {
        &self.swarm
    }

    /// Returns a builder for creating an `OptimizerConfig` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swarmfit::swarm::config::OptimizerConfig;
    ///
    /// let config = OptimizerConfig::builder()
    ///     .n_particles(20)
    ///     .max_steps(50)
    ///     .build();
    /// ```
    pub fn builder() -> OptimizerConfigBuilder {
        OptimizerConfigBuilder::default()
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            seed: 13,
            max_steps: 100,
            n_particles: 100,
            swarm: SwarmConfig::default(),
        }
    }
}

/// Builder for `OptimizerConfig`.
///
/// Provides a fluent interface for constructing `OptimizerConfig` instances.
#[derive(Debug, Clone, Default)]
pub struct OptimizerConfigBuilder {
    seed: Option<u64>,
    max_steps: Option<usize>,
    n_particles: Option<usize>,
    inertia: Option<f64>,
    cognitive: Option<f64>,
    social: Option<f64>,
}

impl OptimizerConfigBuilder {
    /// Sets the seed for initial-position sampling.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Sets the step budget.
    pub fn max_steps(mut self, value: usize) -> Self {
        self.max_steps = Some(value);
        self
    }

    /// Sets the particle count.
    pub fn n_particles(mut self, value: usize) -> Self {
        self.n_particles = Some(value);
        self
    }

    /// Sets the inertia weight.
    pub fn inertia(mut self, value: f64) -> Self {
        self.inertia = Some(value);
        self
    }

    /// Sets the cognitive coefficient.
    pub fn cognitive(mut self, value: f64) -> Self {
        self.cognitive = Some(value);
        self
    }

    /// Sets the social coefficient.
    pub fn social(mut self, value: f64) -> Self {
        self.social = Some(value);
        self
    }

    /// Builds the `OptimizerConfig` instance, falling back to the defaults
    /// for unset fields.
    pub fn build(self) -> OptimizerConfig {
        let defaults = OptimizerConfig::default();
        OptimizerConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            max_steps: self.max_steps.unwrap_or(defaults.max_steps),
            n_particles: self.n_particles.unwrap_or(defaults.n_particles),
            swarm: SwarmConfig {
                inertia: self.inertia.unwrap_or(defaults.swarm.inertia),
                cognitive: self.cognitive.unwrap_or(defaults.swarm.cognitive),
                social: self.social.unwrap_or(defaults.swarm.social),
            },
        }
    }
}
