use ndarray::{Array1, ArrayBase, Data, Ix2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use crate::error::Result;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of design matrix and targets). Training draws samples at random: the source
/// of randomness is supplied by the caller in [`Fit::fit_with_rng`], while
/// [`Fit::fit`] seeds a fresh generator from the operating system.
pub trait Fit<DM: DesignMatrix, T: Targets, E: std::error::Error> {
    type Object;

    fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &DatasetBase<DM, T>,
        rng: &mut R,
    ) -> std::result::Result<Self::Object, E>;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> std::result::Result<Self::Object, E> {
        let mut rng = SmallRng::from_entropy();
        self.fit_with_rng(dataset, &mut rng)
    }
}

/// Predict trait
///
/// Maps every row of a design matrix to a label in `{0, 1}`.
pub trait Predict<F> {
    fn predict<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array1<F>>;
}
