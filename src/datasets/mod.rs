use ndarray::{Array1, Array2};

#[cfg(test)]
mod tests;

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;
pub mod libsvm;

/// A dataset is a pairing of a design matrix (one row per example) with the
/// labels of the examples.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
    T: Targets,
{
    pub design_matrix: DM,
    pub targets: T,
}

/// A dataset owning a dense design matrix and its labels.
pub type DenseDataset<F> = DatasetBase<Array2<F>, Array1<F>>;

/// This trait provides the shape of a design matrix.
pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

/// This trait provides the number of labels held by a target container.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
}
