use std::env;
use std::process;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use swarmfit::data::{load_dataset, save_predictions};
use swarmfit::error::Result;
use swarmfit::fit::{FitModel, FitOptions, FitRunner, LinearModel, MseEvaluator, SineModel};

fn print_usage() {
    eprintln!("Usage: swarmfit <model: linear|sine> <data_file> <predictions_file>");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Invalid number of arguments");
        print_usage();
        process::exit(1);
    }

    let model_type = args[1].as_str();
    if !matches!(model_type, "linear" | "sine") {
        eprintln!("Specified model type is not supported");
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run(model_type, &args[2], &args[3]) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(model_type: &str, input_file: &str, output_file: &str) -> Result<()> {
    let data = load_dataset(input_file)?;
    let input_dims = data[0].predictors.len();

    match model_type {
        "linear" => fit_and_export(LinearModel::new(input_dims), data, output_file),
        _ => fit_and_export(SineModel::new(input_dims), data, output_file),
    }
}

fn fit_and_export<M: FitModel>(
    model: M,
    data: swarmfit::data::Dataset,
    output_file: &str,
) -> Result<()> {
    let model = Arc::new(model);
    let evaluator = MseEvaluator::new(Arc::clone(&model));

    let runner = FitRunner::builder()
        .model(Arc::clone(&model))
        .evaluator(evaluator)
        .data(data)
        .build()?;

    let outcome = runner.fit(&FitOptions::default())?;
    info!(
        "Fitted {} in {} steps, final error {}",
        model.slug(),
        outcome.steps,
        outcome.loss
    );

    let predictions = runner
        .data()
        .iter()
        .map(|point| model.predict(&point.predictors, &outcome.params))
        .collect::<Result<Vec<f64>>>()?;

    save_predictions(output_file, runner.data(), &predictions)
}
