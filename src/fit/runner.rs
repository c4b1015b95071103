//! # Convergence driver
//!
//! `FitRunner` wraps the optimizer engine into a terminating fitting
//! procedure: it maximizes the negated loss and stops either when the step
//! budget is exhausted or when the loss has stagnated for long enough.
//! Stagnation-triggered early stopping is normal termination, not an error.

use std::sync::Arc;

use tracing::info;

use crate::data::Dataset;
use crate::error::{Result, SwarmError};
use crate::objective::ObjectiveContext;
use crate::swarm::Optimizer;

use super::evaluator::Evaluator;
use super::model::FitModel;
use super::options::FitOptions;

/// Represents the result of a fitting run: the parameter vector produced by
/// the last executed step and its associated loss.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    /// The fitted parameter vector.
    pub params: Vec<f64>,
    /// The loss of `params` over the dataset.
    pub loss: f64,
    /// Number of optimization steps actually executed.
    pub steps: usize,
    /// Whether the run was suspended on stagnation before exhausting its
    /// step budget.
    pub stopped_early: bool,
}

/// Fits a model's parameters to a dataset by driving the swarm optimizer
/// over the negated evaluator loss.
pub struct FitRunner<M: FitModel, E: Evaluator> {
    model: Arc<M>,
    evaluator: E,
    data: Dataset,
}

impl<M: FitModel, E: Evaluator> FitRunner<M, E> {
    /// Creates a new `FitRunner` from its three collaborators.
    pub fn new(model: Arc<M>, evaluator: E, data: Dataset) -> Self {
        Self {
            model,
            evaluator,
            data,
        }
    }

    /// Returns a builder for assembling a `FitRunner` piece by piece.
    pub fn builder() -> FitRunnerBuilder<M, E> {
        FitRunnerBuilder::default()
    }

    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Runs the fitting procedure.
    ///
    /// The loop executes at most `max_steps` optimization steps. Before
    /// every step except the first, the stagnation counter accumulated so
    /// far is checked against `n_tolerance`; once it reaches the tolerance
    /// the run is suspended without stepping again. A step counts as
    /// progress when it improves the best loss seen so far by more than
    /// `min_delta`; the best loss starts at infinity, so the first step
    /// always registers as improvement. The reported suspension index
    /// equals the number of completed steps.
    ///
    /// # Returns
    ///
    /// The parameter vector produced by the last executed step, its loss,
    /// and how the run ended.
    ///
    /// # Errors
    ///
    /// Returns `SwarmError::Configuration` for a negative or non-finite
    /// `min_delta`, and propagates evaluation failures.
    pub fn fit(&self, options: &FitOptions) -> Result<FitOutcome> {
        let min_delta = options.get_min_delta();
        if !min_delta.is_finite() || min_delta < 0.0 {
            return Err(SwarmError::Configuration(format!(
                "min_delta must be nonnegative and finite, received {}",
                min_delta
            )));
        }

        let objective = |params: &[f64]| -> Result<f64> {
            Ok(-self.evaluator.evaluate(&self.data, params)?)
        };

        let domains = self.model.param_domains();
        let arity = domains.len();
        let context = ObjectiveContext::new(objective, arity, domains)?;
        let mut optimizer = Optimizer::new(context, options.get_optimizer().clone())?;

        let max_steps = options.get_optimizer().get_max_steps();
        let n_tolerance = options.get_n_tolerance();

        let mut best_loss = f64::INFINITY;
        let mut current_loss = f64::INFINITY;
        let mut stagnation_counter = 0usize;
        let mut params = Vec::new();
        let mut executed = 0usize;
        let mut stopped_early = false;

        for step in 0..max_steps {
            // The counter carried over from the previous iteration decides
            // whether to step again; it never fires before the first step,
            // so `step` doubles as the completed-step count when it does.
            if step > 0 && stagnation_counter >= n_tolerance {
                info!("Optimization suspended at step {}", step);
                stopped_early = true;
                break;
            }

            params = optimizer.step()?;
            current_loss = self.evaluator.evaluate(&self.data, &params)?;
            executed += 1;

            if best_loss - current_loss > min_delta {
                best_loss = current_loss;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
        }

        info!("Final error: {}", current_loss);
        info!("Acquired parameters: {:?}", params);

        Ok(FitOutcome {
            params,
            loss: current_loss,
            steps: executed,
            stopped_early,
        })
    }
}

/// Builder for `FitRunner`.
///
/// `build` fails with `SwarmError::NotInitialized` when any collaborator is
/// missing; a fitting run never starts half-assembled.
pub struct FitRunnerBuilder<M: FitModel, E: Evaluator> {
    model: Option<Arc<M>>,
    evaluator: Option<E>,
    data: Option<Dataset>,
}

impl<M: FitModel, E: Evaluator> Default for FitRunnerBuilder<M, E> {
    fn default() -> Self {
        Self {
            model: None,
            evaluator: None,
            data: None,
        }
    }
}

impl<M: FitModel, E: Evaluator> FitRunnerBuilder<M, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: Arc<M>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn evaluator(mut self, evaluator: E) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn data(mut self, data: Dataset) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> Result<FitRunner<M, E>> {
        let model = self.model.ok_or_else(|| {
            SwarmError::NotInitialized("Model not specified".to_string())
        })?;

        let evaluator = self.evaluator.ok_or_else(|| {
            SwarmError::NotInitialized("Evaluator not specified".to_string())
        })?;

        let data = self.data.ok_or_else(|| {
            SwarmError::NotInitialized("Dataset not specified".to_string())
        })?;

        Ok(FitRunner::new(model, evaluator, data))
    }
}
