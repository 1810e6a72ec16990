#[cfg(test)]
mod tests;

/// This module contains small numerical routines shared by the solver and the
/// estimators.
pub mod helpers {
    use crate::Float;
    use ndarray::{s, Array2, ArrayBase, ArrayView1, Data, Ix1, Ix2};

    /// The logistic function `1 / (1 + exp(-x))`.
    pub fn sigmoid<F: Float>(x: F) -> F {
        F::one() / (F::one() + (-x).exp())
    }

    /// Returns a copy of `X` with a leading column of ones accounting for the
    /// intercept term.
    pub fn with_intercept<F: Float, D: Data<Elem = F>>(X: &ArrayBase<D, Ix2>) -> Array2<F> {
        let (n_samples, n_features) = X.dim();
        let mut X_full = Array2::<F>::ones((n_samples, n_features + 1));
        X_full.slice_mut(s![.., 1..]).assign(X);
        X_full
    }

    /// Euclidean norm of a vector.
    pub fn norm_l2<F: Float>(x: ArrayView1<F>) -> F {
        x.dot(&x).sqrt()
    }

    /// Number of positions where a prediction differs from its label.
    pub fn count_mismatches<F, S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> usize
    where
        F: Float,
        S1: Data<Elem = F>,
        S2: Data<Elem = F>,
    {
        y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(y, y_hat)| y != y_hat)
            .count()
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::datasets::{DatasetBase, DenseDataset};
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Generates a linearly separable binary dataset: two Gaussian clouds
    /// centred at `+margin` and `-margin` along the first feature. Points are
    /// labeled 1 when the first feature is positive and 0 otherwise, so that
    /// the hyperplane `x_0 = 0` separates the classes with the given margin.
    pub fn generate_separable_data(
        n_samples: usize,
        n_features: usize,
        margin: f64,
        seed: u64,
    ) -> DenseDataset<f64> {
        let noise = fill_random_vector(n_samples * n_features, seed);
        let mut X = Array2::from_shape_vec((n_samples, n_features), noise).unwrap();
        let mut y = Array1::<f64>::zeros(n_samples);
        for (i, mut row) in X.rows_mut().into_iter().enumerate() {
            if i % 2 == 0 {
                row[0] = row[0].abs() + margin;
                y[i] = 1.;
            } else {
                row[0] = -row[0].abs() - margin;
            }
        }
        DatasetBase::from((X, y))
    }
}
