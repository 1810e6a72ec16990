use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::datasets::{DatasetBase, DenseDataset};
use crate::error::{ClassifierError, Result};
use crate::estimators::{Fit, Predict};
use crate::helpers::helpers::count_mismatches;
use crate::Float;


/// Shuffles the indices `0..n_samples` and splits them into `k` contiguous
/// groups of `n_samples / k` indices, the last group taking the remainder.
///
/// Requires `2 <= k <= n_samples`.
pub fn k_fold_indices<R: Rng + ?Sized>(
    n_samples: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>> {
    if k < 2 || k > n_samples {
        return Err(ClassifierError::InvalidFolds(k));
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);

    let fold_size = n_samples / k;
    let folds = (0..k)
        .map(|fold| {
            let start = fold * fold_size;
            let end = if fold == k - 1 {
                n_samples
            } else {
                start + fold_size
            };
            indices[start..end].to_vec()
        })
        .collect();
    Ok(folds)
}

/// Estimates the accuracy of a classifier by k-fold cross-validation.
///
/// For every fold, a fresh model is fitted with `params` on the other `k - 1`
/// folds and scored on the held-out one as
/// `1 - misclassified / held_out_size`. The held-out rows are rescaled with
/// the normalization coefficients of the training folds by the fitted model.
/// Returns one score per fold, in fold order. `k == n_samples` performs
/// leave-one-out cross-validation.
pub fn cross_validate<F, D, S, P, R>(
    params: &P,
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    k: usize,
    rng: &mut R,
) -> Result<Array1<F>>
where
    F: Float,
    D: Data<Elem = F>,
    S: Data<Elem = F>,
    P: Fit<Array2<F>, Array1<F>, ClassifierError>,
    P::Object: Predict<F>,
    R: Rng + ?Sized,
{
    dataset.check_consistency()?;
    let n_samples = dataset.n_samples();
    let folds = k_fold_indices(n_samples, k, &mut *rng)?;

    let mut scores = Array1::<F>::zeros(k);
    for (fold, test_indices) in folds.iter().enumerate() {
        let train_indices: Vec<usize> = folds
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != fold)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();

        let train: DenseDataset<F> = dataset.select(&train_indices);
        let test: DenseDataset<F> = dataset.select(test_indices);

        let model = params.fit_with_rng(&train, &mut *rng)?;
        let y_pred = model.predict(test.design_matrix())?;
        let n_errors = count_mismatches(test.targets(), &y_pred);

        scores[fold] = F::one() - F::cast(n_errors) / F::cast(test_indices.len());
        tracing::debug!(
            fold,
            n_train = train_indices.len(),
            n_test = test_indices.len(),
            score = %scores[fold],
            "cross-validation fold"
        );
    }
    Ok(scores)
}
