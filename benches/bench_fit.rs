use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linclass::estimators::{Fit, LogisticRegression, Perceptron};
use linclass::helpers::test_helpers::generate_separable_data;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("online_fit");
    group.sample_size(10);

    for n_samples in [100, 1000] {
        for n_features in [2, 20] {
            let dataset = generate_separable_data(n_samples, n_features, 0.5, 0);
            let config = (n_samples, n_features);
            let config_string = format!("{}, {}", n_samples, n_features);

            let perceptron = Perceptron::params().max_steps(5000);
            group.bench_with_input(
                BenchmarkId::new("perceptron", &config_string),
                &config,
                |b, _| {
                    let mut rng = StdRng::seed_from_u64(0);
                    b.iter(|| perceptron.fit_with_rng(&dataset, &mut rng).unwrap())
                },
            );

            let logistic = LogisticRegression::params().max_steps(5000).eps(1e-4);
            group.bench_with_input(
                BenchmarkId::new("logistic", &config_string),
                &config,
                |b, _| {
                    let mut rng = StdRng::seed_from_u64(0);
                    b.iter(|| logistic.fit_with_rng(&dataset, &mut rng).unwrap())
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
