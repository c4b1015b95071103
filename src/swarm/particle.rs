//! # Particle
//!
//! A particle owns one candidate solution: its position in the search space,
//! its velocity, its personal best position, and a private entropy-seeded
//! random number generator for the velocity-update coefficients. It
//! alternates between idle and stepping until the run ends.

use crate::error::{Result, SwarmError};
use crate::objective::{Domain, Objective, ObjectiveContext};
use crate::parallel::dimension_reduce;
use crate::rng::RandomNumberGenerator;

use super::config::SwarmConfig;

/// One agent of the swarm, holding a candidate solution, its momentum, and
/// its own best-seen solution.
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    personal_best: Vec<f64>,
    rng: RandomNumberGenerator,
}

impl Particle {
    /// Creates a particle at `init_position`.
    ///
    /// The initial velocity is sampled per dimension uniformly from
    /// `[low - high, high - low)`: a symmetric span sized to the domain
    /// width, independent of the domain's absolute location.
    pub fn new(
        init_position: Vec<f64>,
        domains: &[Domain],
        mut rng: RandomNumberGenerator,
    ) -> Self {
        let velocity = domains
            .iter()
            .map(|domain| rng.uniform(domain.low - domain.high, domain.high - domain.low))
            .collect();

        Self {
            personal_best: init_position.clone(),
            position: init_position,
            velocity,
            rng,
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn personal_best(&self) -> &[f64] {
        &self.personal_best
    }

    /// Performs one step in the optimization procedure: recomputes the
    /// velocity, applies it to the position, mirrors out-of-domain
    /// components back, and updates the personal and shared global best
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns `SwarmError::DimensionMismatch` if the particle's state does
    /// not match the context arity.
    pub fn step<O: Objective>(
        &mut self,
        context: &ObjectiveContext<O>,
        swarm: &SwarmConfig,
        global_best: &mut Vec<f64>,
    ) -> Result<()> {
        self.update_velocity(context, swarm, global_best)?;

        for (x, v) in self.position.iter_mut().zip(&self.velocity) {
            *x += v;
        }

        for (x, domain) in self.position.iter_mut().zip(context.domains()) {
            *x = reflect(*x, domain);
        }

        let current = context.evaluate(&self.position)?;
        let personal = context.evaluate(&self.personal_best)?;
        let global = context.evaluate(global_best)?;

        if current > personal {
            self.personal_best.copy_from_slice(&self.position);

            if current > global {
                global_best.copy_from_slice(&self.position);
            }
        }

        Ok(())
    }

    /// Recomputes the velocity per dimension:
    /// `v'_i = w·v_i + r1_i·c_cog·(pbest_i − x_i) + r2_i·c_soc·(gbest_i − x_i)`.
    ///
    /// The vector operation is forked across its dimensions through one
    /// dimension-reduce call per step.
    fn update_velocity<O: Objective>(
        &mut self,
        context: &ObjectiveContext<O>,
        swarm: &SwarmConfig,
        global_best: &[f64],
    ) -> Result<()> {
        let arity = context.arity();
        if self.position.len() != arity {
            return Err(SwarmError::DimensionMismatch(format!(
                "Particle state holds {} dimensions, objective expects {}",
                self.position.len(),
                arity
            )));
        }

        // One independent draw per dimension for each coefficient; a single
        // scalar per step would collapse every trajectory onto one random
        // line.
        let r_cognitive: Vec<f64> = self.rng.fetch_uniform(0.0, 1.0, arity).into();
        let r_social: Vec<f64> = self.rng.fetch_uniform(0.0, 1.0, arity).into();

        let inertia = swarm.get_inertia();
        let cognitive = swarm.get_cognitive();
        let social = swarm.get_social();

        let inputs = [
            self.velocity.as_slice(),
            self.position.as_slice(),
            self.personal_best.as_slice(),
            global_best,
        ];

        self.velocity = dimension_reduce(inputs, arity, |i, [velocity, position, personal, global]| {
            inertia * velocity
                + r_cognitive[i] * cognitive * (personal - position)
                + r_social[i] * social * (global - position)
        })?;

        Ok(())
    }
}

/// Mirrors an out-of-domain component back across the violated bound.
///
/// Applied once, not iterated: a velocity larger than the domain width can
/// leave the corrected value outside `[low, high]`.
fn reflect(value: f64, domain: &Domain) -> f64 {
    if value < domain.low {
        return 2.0 * domain.low - value;
    }

    if value > domain.high {
        return 2.0 * domain.high - value;
    }

    value
}
