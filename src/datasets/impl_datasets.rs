use super::{DatasetBase, DenseDataset, DesignMatrix, Targets};
use crate::error::{ClassifierError, Result};
use crate::Float;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};

/// This implementation block provides a method for the creation of datasets
/// from dense matrices.
impl<F: Float, D: Data<Elem = F>, S: Data<Elem = F>> From<(ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)>
    for DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    fn from(data: (ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)) -> Self {
        DatasetBase {
            design_matrix: data.0,
            targets: data.1,
        }
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<DM: DesignMatrix, T: Targets> DatasetBase<DM, T> {
    /// This method instantiates a new dataset from a design matrix and targets.
    pub fn new(design_matrix: DM, targets: T) -> DatasetBase<DM, T> {
        DatasetBase {
            design_matrix,
            targets,
        }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> &DM {
        &self.design_matrix
    }

    pub fn n_samples(&self) -> usize {
        self.targets.n_samples()
    }

    pub fn n_features(&self) -> usize {
        self.design_matrix.n_features()
    }

    /// Checks that there are as many labels as rows in the design matrix.
    pub fn check_consistency(&self) -> Result<()> {
        let n_rows = self.design_matrix.n_samples();
        let n_labels = self.targets.n_samples();
        if n_rows != n_labels {
            return Err(ClassifierError::DimensionMismatch {
                expected: n_labels,
                found: n_rows,
            });
        }
        Ok(())
    }
}

impl<F: Float, D: Data<Elem = F>, S: Data<Elem = F>>
    DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    /// Builds an owned dataset restricted to the rows listed in `indices`,
    /// in the order they are listed.
    pub fn select(&self, indices: &[usize]) -> DenseDataset<F> {
        DatasetBase {
            design_matrix: self.design_matrix.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
        }
    }
}

impl<F: Float> DenseDataset<F> {
    /// Builds a dataset from row-major feature vectors. Every row must have
    /// the length of the first one and there must be one label per row.
    pub fn from_rows(labels: Vec<F>, rows: Vec<Vec<F>>) -> Result<Self> {
        if labels.len() != rows.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: labels.len(),
                found: rows.len(),
            });
        }
        let n_features = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(rows.len() * n_features);
        for row in rows.iter() {
            if row.len() != n_features {
                return Err(ClassifierError::DimensionMismatch {
                    expected: n_features,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        let design_matrix = Array2::from_shape_vec((rows.len(), n_features), data).map_err(|_| {
            ClassifierError::DimensionMismatch {
                expected: rows.len() * n_features,
                found: rows.len(),
            }
        })?;
        Ok(DatasetBase {
            design_matrix,
            targets: Array1::from_vec(labels),
        })
    }
}
