use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use swarmfit::parallel::{dimension_reduce, dimension_reduce_with_tasks};

// The same shape of op the particle velocity update uses, with fixed
// coefficients so runs are comparable.
fn velocity_rule(i: usize, args: [f64; 4]) -> f64 {
    let r = (i % 97) as f64 / 97.0;
    0.4 * args[0] + r * 0.3 * (args[2] - args[1]) + r * 0.8 * (args[3] - args[1])
}

fn make_inputs(dim: usize) -> [Vec<f64>; 4] {
    [
        (0..dim).map(|i| (i as f64).sin()).collect(),
        (0..dim).map(|i| (i as f64).cos()).collect(),
        (0..dim).map(|i| i as f64 * 0.5).collect(),
        (0..dim).map(|i| -(i as f64) * 0.25).collect(),
    ]
}

fn bench_dimension_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimension_reduce");

    for dim in [4, 64, 1024, 16384] {
        let [velocity, position, personal, global] = make_inputs(dim);
        let inputs = [
            velocity.as_slice(),
            position.as_slice(),
            personal.as_slice(),
            global.as_slice(),
        ];

        group.bench_with_input(BenchmarkId::new("sequential", dim), &dim, |b, &dim| {
            b.iter(|| {
                dimension_reduce_with_tasks(black_box(inputs), dim, 1, velocity_rule)
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("forked", dim), &dim, |b, &dim| {
            b.iter(|| dimension_reduce(black_box(inputs), dim, velocity_rule).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dimension_reduce);
criterion_main!(benches);
