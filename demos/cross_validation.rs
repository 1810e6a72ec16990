//! Leave-one-out cross-validation of both classifiers.
//!
//! Usage: `cargo run --example cross_validation [path/to/data.libsvm]`
//!
//! Without a path, a separable two-feature dataset is generated. Set
//! `RUST_LOG=linclass=debug` to follow the folds.

use linclass::activations::Activation;
use linclass::datasets::{libsvm::load_libsvm, DenseDataset};
use linclass::estimators::{Fit, LinearClassifier, LogisticRegression, Perceptron};
use linclass::helpers::test_helpers::generate_separable_data;
use linclass::model_selection::cross_validate;
use linclass::solver::LearningRate;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn report<A: Activation<f64>>(name: &str, scores: &Array1<f64>, clf: &LinearClassifier<f64, A>) {
    println!("{}", name);
    println!(
        "  leave-one-out accuracy: {:.4}",
        scores.mean().unwrap_or(f64::NAN)
    );
    println!("  weights: {}", clf.weights());
    println!("  normalization coefficients: {}", clf.norm_coefs());

    let c = clf.unscaled_coefficients();
    if c.len() == 3 && c[2] != 0. {
        println!(
            "  decision boundary: x1 = {:.4} + {:.4} * x0",
            -c[0] / c[2],
            -c[1] / c[2]
        );
    }
}

fn main() -> linclass::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linclass=info".into()),
        )
        .init();

    let dataset: DenseDataset<f64> = match std::env::args().nth(1) {
        Some(path) => load_libsvm(path)?,
        None => generate_separable_data(40, 2, 0.5, 0),
    };
    println!(
        "Dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let mut rng = StdRng::seed_from_u64(42);
    let n_samples = dataset.n_samples();

    let perceptron = Perceptron::params()
        .learning_rate_schedule(LearningRate::inverse_scaling(10000., 1000.))
        .max_steps(10000)
        .error_criterion(0.);
    let scores = cross_validate(&perceptron, &dataset, n_samples, &mut rng)?;
    let clf = perceptron.fit_with_rng(&dataset, &mut rng)?;
    report("Perceptron", &scores, &clf);

    let logistic = LogisticRegression::params()
        .learning_rate_schedule(LearningRate::inverse_scaling(1000., 100.))
        .max_steps(20000)
        .eps(1e-4);
    let scores = cross_validate(&logistic, &dataset, n_samples, &mut rng)?;
    let clf = logistic.fit_with_rng(&dataset, &mut rng)?;
    report("Logistic regression", &scores, &clf);
    println!("  training loss: {:.4}", clf.loss(&dataset)?);

    Ok(())
}
