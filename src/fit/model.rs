//! # Prediction models
//!
//! The `FitModel` trait is the closed interface the convergence driver fits
//! against: a model names its parameter domains and predicts a scalar from
//! one row of predictors and a candidate parameter vector.

use std::fmt::Debug;

use crate::error::{Result, SwarmError};
use crate::objective::Domain;

/// Trait for parametric prediction models.
pub trait FitModel: Debug + Send + Sync {
    /// Human-readable identifier used in diagnostics.
    fn slug(&self) -> &'static str;

    /// Expected dimensionality of one row of predictors.
    fn input_dims(&self) -> usize;

    /// Number of free parameters.
    fn param_dims(&self) -> usize;

    /// Search domain of each parameter, ordered; length equals
    /// [`param_dims`](FitModel::param_dims).
    fn param_domains(&self) -> Vec<Domain>;

    /// Predicts the target value for one row of predictors under the given
    /// parameter vector.
    ///
    /// # Errors
    ///
    /// Returns `SwarmError::DimensionMismatch` if either vector's length
    /// does not match the model's expectations.
    fn predict(&self, predictors: &[f64], params: &[f64]) -> Result<f64>;
}

fn validate_dims(slug: &str, kind: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(SwarmError::DimensionMismatch(format!(
            "[{}] invalid {} vector size. Expected {}, received {}",
            slug, kind, expected, actual
        )));
    }

    Ok(())
}

/// Affine model: the prediction is the dot product of the predictors,
/// extended with a constant bias term, and the parameter vector.
#[derive(Debug, Clone)]
pub struct LinearModel {
    input_dims: usize,
}

impl LinearModel {
    const PARAM_DOMAIN: Domain = Domain { low: -10.0, high: 10.0 };

    pub fn new(input_dims: usize) -> Self {
        Self { input_dims }
    }
}

impl FitModel for LinearModel {
    fn slug(&self) -> &'static str {
        "linear model"
    }

    fn input_dims(&self) -> usize {
        self.input_dims
    }

    fn param_dims(&self) -> usize {
        self.input_dims + 1
    }

    fn param_domains(&self) -> Vec<Domain> {
        vec![Self::PARAM_DOMAIN; self.param_dims()]
    }

    fn predict(&self, predictors: &[f64], params: &[f64]) -> Result<f64> {
        validate_dims(self.slug(), "input", predictors.len(), self.input_dims())?;
        validate_dims(self.slug(), "parameter", params.len(), self.param_dims())?;

        let affine: f64 = predictors.iter().zip(params).map(|(x, theta)| x * theta).sum();
        Ok(affine + params[self.input_dims])
    }
}

/// Sinusoidal model: one `a·sin(b·x + c)` term per predictor plus a shared
/// bias, `3·input_dims + 1` parameters in total.
#[derive(Debug, Clone)]
pub struct SineModel {
    input_dims: usize,
}

impl SineModel {
    const PARAM_DOMAIN: Domain = Domain { low: -30.0, high: 30.0 };

    pub fn new(input_dims: usize) -> Self {
        Self { input_dims }
    }
}

impl FitModel for SineModel {
    fn slug(&self) -> &'static str {
        "sine model"
    }

    fn input_dims(&self) -> usize {
        self.input_dims
    }

    fn param_dims(&self) -> usize {
        3 * self.input_dims + 1
    }

    fn param_domains(&self) -> Vec<Domain> {
        vec![Self::PARAM_DOMAIN; self.param_dims()]
    }

    fn predict(&self, predictors: &[f64], params: &[f64]) -> Result<f64> {
        validate_dims(self.slug(), "input", predictors.len(), self.input_dims())?;
        validate_dims(self.slug(), "parameter", params.len(), self.param_dims())?;

        let mut sum = 0.0;
        for (i, x) in predictors.iter().enumerate() {
            let amplitude = params[3 * i];
            let frequency = params[3 * i + 1];
            let phase = params[3 * i + 2];
            sum += amplitude * (frequency * x + phase).sin();
        }

        Ok(sum + params[3 * self.input_dims])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_predict() {
        let model = LinearModel::new(2);

        // 1*2 + 2*3 + bias 4
        let prediction = model.predict(&[1.0, 2.0], &[2.0, 3.0, 4.0]).unwrap();
        assert_eq!(prediction, 12.0);
    }

    #[test]
    fn test_linear_rejects_bad_dims() {
        let model = LinearModel::new(2);

        let result = model.predict(&[1.0], &[2.0, 3.0, 4.0]);
        assert!(matches!(result, Err(SwarmError::DimensionMismatch(_))));

        let result = model.predict(&[1.0, 2.0], &[2.0, 3.0]);
        assert!(matches!(result, Err(SwarmError::DimensionMismatch(_))));
    }

    #[test]
    fn test_linear_domains_cover_bias() {
        let model = LinearModel::new(3);
        let domains = model.param_domains();

        assert_eq!(domains.len(), 4);
        assert!(domains.iter().all(|d| d.low == -10.0 && d.high == 10.0));
    }

    #[test]
    fn test_sine_predict() {
        let model = SineModel::new(1);

        // a·sin(b·x + c) + bias with b = 0: a·sin(c) + bias
        let prediction = model
            .predict(&[5.0], &[2.0, 0.0, std::f64::consts::FRAC_PI_2, 1.0])
            .unwrap();
        assert!((prediction - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_param_count() {
        let model = SineModel::new(2);
        assert_eq!(model.param_dims(), 7);
        assert_eq!(model.param_domains().len(), 7);

        let result = model.predict(&[0.0, 0.0], &[0.0; 6]);
        assert!(matches!(result, Err(SwarmError::DimensionMismatch(_))));
    }
}
