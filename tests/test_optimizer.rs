use swarmfit::error::Result;
use swarmfit::objective::{Domain, ObjectiveContext};
use swarmfit::swarm::config::OptimizerConfig;
use swarmfit::swarm::Optimizer;

fn shifted_parabola(position: &[f64]) -> Result<f64> {
    Ok(-(position[0] - 3.0).powi(2))
}

fn negative_sphere(position: &[f64]) -> Result<f64> {
    Ok(-position.iter().map(|x| x * x).sum::<f64>())
}

#[test]
fn test_finds_parabola_maximum() {
    let domains = vec![Domain::new(-10.0, 10.0).unwrap()];
    let context = ObjectiveContext::new(shifted_parabola, 1, domains).unwrap();

    let config = OptimizerConfig::builder()
        .seed(13)
        .max_steps(50)
        .n_particles(20)
        .build();

    let mut optimizer = Optimizer::new(context, config).unwrap();
    let best = optimizer.run_to_budget().unwrap();

    assert!((best[0] - 3.0).abs() < 0.1);
    assert!(shifted_parabola(&best).unwrap().abs() < 0.05);
}

#[test]
fn test_global_best_score_is_monotone() {
    let domains = vec![Domain::new(-5.0, 5.0).unwrap(); 3];
    let context = ObjectiveContext::new(negative_sphere, 3, domains).unwrap();

    let config = OptimizerConfig::builder()
        .seed(99)
        .max_steps(30)
        .n_particles(10)
        .build();

    let mut optimizer = Optimizer::new(context, config).unwrap();
    let mut best_score = negative_sphere(optimizer.global_best()).unwrap();

    for _ in 0..30 {
        let best = optimizer.step().unwrap();
        let score = negative_sphere(&best).unwrap();
        assert!(score >= best_score);
        best_score = score;
    }
}

#[test]
fn test_exhausted_budget_freezes_the_result() {
    let domains = vec![Domain::new(-5.0, 5.0).unwrap(); 2];
    let context = ObjectiveContext::new(negative_sphere, 2, domains).unwrap();

    let config = OptimizerConfig::builder()
        .seed(1)
        .max_steps(4)
        .n_particles(6)
        .build();

    let mut optimizer = Optimizer::new(context, config).unwrap();
    for _ in 0..4 {
        optimizer.step().unwrap();
    }

    let frozen = optimizer.global_best().to_vec();
    for _ in 0..3 {
        assert_eq!(optimizer.step().unwrap(), frozen);
    }
    assert_eq!(optimizer.steps_taken(), 4);
}

#[test]
fn test_fixed_seed_reproduces_initialization() {
    let build = || {
        let domains = vec![Domain::new(-2.0, 8.0).unwrap(); 4];
        let context = ObjectiveContext::new(negative_sphere, 4, domains).unwrap();
        let config = OptimizerConfig::builder()
            .seed(42)
            .max_steps(10)
            .n_particles(15)
            .build();
        Optimizer::new(context, config).unwrap()
    };

    assert_eq!(build().global_best(), build().global_best());
}
