//! # Evaluators
//!
//! An evaluator scores a candidate parameter vector against a dataset with a
//! nonnegative loss. The convergence driver consumes one evaluation per loss
//! computation; the swarm itself only ever sees the negated loss through the
//! objective context.

use std::sync::Arc;

use rayon::prelude::*;

use crate::data::Dataset;
use crate::error::{Result, SwarmError};

use super::model::FitModel;

/// Minimum number of dataset rows to sum in parallel.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Trait for loss functions over a dataset.
pub trait Evaluator: Send + Sync {
    /// Computes the nonnegative loss of `params` over `data`.
    fn evaluate(&self, data: &Dataset, params: &[f64]) -> Result<f64>;
}

/// Mean squared error of a model's predictions against the dataset targets.
///
/// Rows are summed in parallel once the dataset is large enough for the
/// fork to pay off, sequentially below that.
#[derive(Debug, Clone)]
pub struct MseEvaluator<M: FitModel> {
    model: Arc<M>,
    parallel_threshold: usize,
}

impl<M: FitModel> MseEvaluator<M> {
    pub fn new(model: Arc<M>) -> Self {
        Self {
            model,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Overrides the minimum number of rows evaluated in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl<M: FitModel> Evaluator for MseEvaluator<M> {
    fn evaluate(&self, data: &Dataset, params: &[f64]) -> Result<f64> {
        if data.is_empty() {
            return Err(SwarmError::EmptyDataset);
        }

        let sum_squared_error = if data.len() >= self.parallel_threshold {
            data.par_iter()
                .map(|point| -> Result<f64> {
                    let error = self.model.predict(&point.predictors, params)? - point.target;
                    Ok(error * error)
                })
                .try_reduce(|| 0.0, |a, b| Ok(a + b))?
        } else {
            let mut sum = 0.0;
            for point in data {
                let error = self.model.predict(&point.predictors, params)? - point.target;
                sum += error * error;
            }
            sum
        };

        Ok(sum_squared_error / data.len() as f64)
    }
}
