//! # Swarm/Optimizer Engine
//!
//! The engine owns the particle population and the single shared global-best
//! position, and drives one optimization step at a time. The outer loop over
//! particles is strictly sequential, which gives a total order on global-best
//! reads and writes; the only parallelism is the per-particle fork-join over
//! dimensions inside the velocity update. Stepping the particles concurrently
//! instead would require explicit synchronization around the global best.

use tracing::{debug, info, trace};

use crate::error::{Result, SwarmError};
use crate::objective::{Objective, ObjectiveContext};
use crate::rng::RandomNumberGenerator;

use super::config::OptimizerConfig;
use super::particle::Particle;

/// Drives a swarm of particles over a bounded search space, maximizing the
/// wrapped objective.
pub struct Optimizer<O: Objective> {
    context: ObjectiveContext<O>,
    config: OptimizerConfig,
    particles: Vec<Particle>,
    global_best: Vec<f64>,
    steps_taken: usize,
}

impl<O: Objective> Optimizer<O> {
    /// Creates the engine and its swarm.
    ///
    /// Initial positions are sampled uniformly within each dimension's
    /// domain from a single generator seeded with the configured seed, one
    /// particle after another, so initialization is reproducible for a
    /// fixed seed. The global best starts as the all-zero vector and is updated
    /// greedily while each particle is generated, so it can improve before
    /// any particle ever steps. The zero vector is a comparison baseline,
    /// not a sampled point: it persists as the winner if no particle ever
    /// scores above it.
    ///
    /// # Errors
    ///
    /// Returns `SwarmError::Configuration` if the particle count or step
    /// budget is zero, and propagates evaluation failures from scoring the
    /// initial positions.
    pub fn new(context: ObjectiveContext<O>, config: OptimizerConfig) -> Result<Self> {
        if config.get_n_particles() == 0 {
            return Err(SwarmError::Configuration(
                "Particle count cannot be zero".to_string(),
            ));
        }

        if config.get_max_steps() == 0 {
            return Err(SwarmError::Configuration(
                "Step budget cannot be zero".to_string(),
            ));
        }

        let mut rng = RandomNumberGenerator::from_seed(config.get_seed());
        let mut global_best = vec![0.0; context.arity()];
        let mut particles = Vec::with_capacity(config.get_n_particles());

        for _ in 0..config.get_n_particles() {
            let position: Vec<f64> = context
                .domains()
                .iter()
                .map(|domain| rng.uniform(domain.low, domain.high))
                .collect();

            if context.evaluate(&position)? > context.evaluate(&global_best)? {
                global_best.copy_from_slice(&position);
            }

            particles.push(Particle::new(
                position,
                context.domains(),
                RandomNumberGenerator::new(),
            ));
        }

        debug!("Swarm initialized, initial global best: {:?}", global_best);

        Ok(Self {
            context,
            config,
            particles,
            global_best,
            steps_taken: 0,
        })
    }

    /// Advances every particle exactly once, in a fixed sequential order,
    /// and returns the current global best.
    ///
    /// Once the step budget is exhausted further calls are no-ops that
    /// simply return the current global best; stagnation-based termination
    /// lives in the convergence driver, not here.
    pub fn step(&mut self) -> Result<Vec<f64>> {
        if self.steps_taken < self.config.get_max_steps() {
            for particle in &mut self.particles {
                particle.step(&self.context, self.config.get_swarm(), &mut self.global_best)?;
            }

            self.steps_taken += 1;
            trace!(
                "Step {} complete, global best: {:?}",
                self.steps_taken,
                self.global_best
            );
        }

        Ok(self.global_best.clone())
    }

    /// Steps the swarm until the configured budget is exhausted and returns
    /// the best position found.
    pub fn run_to_budget(&mut self) -> Result<Vec<f64>> {
        while self.steps_taken < self.config.get_max_steps() {
            self.step()?;
        }

        info!("Best found: {:?}", self.global_best);
        Ok(self.global_best.clone())
    }

    /// The best-scoring position observed by any particle so far.
    pub fn global_best(&self) -> &[f64] {
        &self.global_best
    }

    /// The number of steps executed so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }
}
