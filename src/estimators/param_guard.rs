use rand::Rng;

use super::traits::Fit;
use crate::datasets::{DatasetBase, DesignMatrix, Targets};

/// Unvalidated hyperparameters
///
/// Builders implement this trait to expose their validated counterpart. A
/// builder whose validated set implements [`Fit`] is itself fittable: the
/// validation runs first and its error is forwarded to the caller.
///
/// `check_ref` and `check` must accept and reject the same values.
pub trait ParamGuard {
    type Checked;
    type Error: std::error::Error;

    /// Validates the hyperparameters in place.
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates the hyperparameters and hands out the validated set.
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Panics on invalid hyperparameters.
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

impl<DM, T, E, P> Fit<DM, T, E> for P
where
    DM: DesignMatrix,
    T: Targets,
    P: ParamGuard,
    P::Checked: Fit<DM, T, E>,
    E: std::error::Error + From<P::Error>,
{
    type Object = <P::Checked as Fit<DM, T, E>>::Object;

    fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &DatasetBase<DM, T>,
        rng: &mut R,
    ) -> Result<Self::Object, E> {
        self.check_ref()?.fit_with_rng(dataset, rng)
    }
}
