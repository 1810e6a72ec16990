use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix2};
use ndarray_stats::QuantileExt;

use crate::error::{ClassifierError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// Max-abs scaler
///
/// Rescales every column of a design matrix by its maximum absolute value so
/// that all entries lie in `[-1, 1]`. The scales are recorded at fit time and
/// reused to map new rows into the same coordinate frame.
///
/// A column that is identically zero has no meaningful scale. It is left
/// unscaled (its recorded scale is 1) unless the scaler is strict, in which
/// case fitting fails with [`ClassifierError::DegenerateColumn`].
#[derive(Debug, Clone, PartialEq)]
pub struct MaxAbsScaler<F: Float> {
    scales: Array1<F>,
}

impl<F: Float> MaxAbsScaler<F> {
    /// Computes the per-column scales of `X`.
    pub fn fit<D: Data<Elem = F>>(X: &ArrayBase<D, Ix2>, strict: bool) -> Result<Self> {
        if X.nrows() == 0 {
            return Err(ClassifierError::EmptyDataset);
        }
        let scales = X
            .axis_iter(Axis(1))
            .enumerate()
            .map(|(j, Xj)| column_scale(Xj, j, strict))
            .collect::<Result<Vec<F>>>()?;
        Ok(MaxAbsScaler {
            scales: Array1::from_vec(scales),
        })
    }

    /// Fits the scaler and returns the rescaled copy of `X` along with it.
    pub fn fit_transform<D: Data<Elem = F>>(
        X: &ArrayBase<D, Ix2>,
        strict: bool,
    ) -> Result<(Self, Array2<F>)> {
        let scaler = Self::fit(X, strict)?;
        let X_scaled = scaler.transform(X)?;
        Ok((scaler, X_scaled))
    }

    /// Divides each column of `X` by its recorded scale.
    pub fn transform<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        if X.ncols() != self.scales.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.scales.len(),
                found: X.ncols(),
            });
        }
        Ok(X / &self.scales)
    }

    /// This method is a getter for the per-column scales.
    pub fn scales(&self) -> ArrayView1<'_, F> {
        self.scales.view()
    }
}

fn column_scale<F: Float>(Xj: ArrayView1<F>, j: usize, strict: bool) -> Result<F> {
    let abs = Xj.mapv(|x| x.abs());
    let scale = *abs.max().map_err(|_| {
        ClassifierError::NumericalInstability(format!("column {} contains NaN values", j))
    })?;
    if !scale.is_finite() {
        return Err(ClassifierError::NumericalInstability(format!(
            "column {} contains infinite values",
            j
        )));
    }
    if scale == F::zero() {
        if strict {
            return Err(ClassifierError::DegenerateColumn(j));
        }
        tracing::debug!(column = j, "all-zero column left unscaled");
        return Ok(F::one());
    }
    Ok(scale)
}
