pub mod evaluator;
pub mod model;
pub mod options;
pub mod runner;

pub use evaluator::{Evaluator, MseEvaluator};
pub use model::{FitModel, LinearModel, SineModel};
pub use options::{FitOptions, FitOptionsBuilder};
pub use runner::{FitOutcome, FitRunner, FitRunnerBuilder};
