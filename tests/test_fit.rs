use std::sync::Arc;

use swarmfit::data::{DataPoint, Dataset};
use swarmfit::error::SwarmError;
use swarmfit::fit::{
    FitOptions, FitRunner, FitRunnerBuilder, LinearModel, MseEvaluator,
};
use swarmfit::swarm::config::OptimizerConfig;

fn toy_dataset() -> Dataset {
    vec![
        DataPoint { predictors: vec![1.0], target: 2.0 },
        DataPoint { predictors: vec![2.0], target: 4.0 },
    ]
}

fn toy_runner() -> FitRunner<LinearModel, MseEvaluator<LinearModel>> {
    let model = Arc::new(LinearModel::new(1));
    let evaluator = MseEvaluator::new(Arc::clone(&model));

    FitRunner::builder()
        .model(model)
        .evaluator(evaluator)
        .data(toy_dataset())
        .build()
        .unwrap()
}

#[test]
fn test_recovers_linear_relationship() {
    let runner = toy_runner();

    let options = FitOptions::builder()
        .min_delta(0.0)
        .n_tolerance(300)
        .optimizer(
            OptimizerConfig::builder()
                .seed(13)
                .max_steps(300)
                .n_particles(60)
                .build(),
        )
        .build();

    let outcome = runner.fit(&options).unwrap();

    // The dataset is y = 2x exactly: slope 2, intercept 0.
    assert!((outcome.params[0] - 2.0).abs() < 0.25);
    assert!(outcome.params[1].abs() < 0.25);
    assert!(outcome.loss < 0.05);
}

#[test]
fn test_zero_tolerance_executes_exactly_one_step() {
    let runner = toy_runner();

    let options = FitOptions::builder()
        .min_delta(0.0)
        .n_tolerance(0)
        .optimizer(
            OptimizerConfig::builder()
                .seed(13)
                .max_steps(50)
                .n_particles(10)
                .build(),
        )
        .build();

    let outcome = runner.fit(&options).unwrap();

    assert_eq!(outcome.steps, 1);
    assert!(outcome.stopped_early);
    assert_eq!(outcome.params.len(), 2);
}

#[test]
fn test_stagnation_stop_is_not_an_error() {
    let runner = toy_runner();

    // An absurdly large min_delta makes every step after the first count as
    // stagnation.
    let options = FitOptions::builder()
        .min_delta(1e12)
        .n_tolerance(3)
        .optimizer(
            OptimizerConfig::builder()
                .seed(7)
                .max_steps(50)
                .n_particles(10)
                .build(),
        )
        .build();

    let outcome = runner.fit(&options).unwrap();

    assert!(outcome.stopped_early);
    assert!(outcome.steps < 50);
}

#[test]
fn test_negative_min_delta_is_rejected() {
    let runner = toy_runner();
    let options = FitOptions::builder().min_delta(-1.0).build();

    let result = runner.fit(&options);
    assert!(matches!(result, Err(SwarmError::Configuration(_))));
}

#[test]
fn test_builder_requires_model() {
    let model = Arc::new(LinearModel::new(1));
    let result = FitRunnerBuilder::<LinearModel, MseEvaluator<LinearModel>>::new()
        .evaluator(MseEvaluator::new(model))
        .data(toy_dataset())
        .build();

    assert!(matches!(result, Err(SwarmError::NotInitialized(_))));
}

#[test]
fn test_builder_requires_evaluator() {
    let result = FitRunnerBuilder::<LinearModel, MseEvaluator<LinearModel>>::new()
        .model(Arc::new(LinearModel::new(1)))
        .data(toy_dataset())
        .build();

    assert!(matches!(result, Err(SwarmError::NotInitialized(_))));
}

#[test]
fn test_builder_requires_data() {
    let model = Arc::new(LinearModel::new(1));
    let result = FitRunnerBuilder::new()
        .model(Arc::clone(&model))
        .evaluator(MseEvaluator::new(model))
        .build();

    assert!(matches!(result, Err(SwarmError::NotInitialized(_))));
}
