pub mod config;
pub mod optimizer;
pub mod particle;

pub use config::{OptimizerConfig, OptimizerConfigBuilder, SwarmConfig};
pub use optimizer::Optimizer;
pub use particle::Particle;
