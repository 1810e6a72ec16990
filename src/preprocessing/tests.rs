use approx::assert_abs_diff_eq;
use ndarray::{array, Array2, Axis};

use super::MaxAbsScaler;
use crate::error::ClassifierError;
use crate::helpers::test_helpers::assert_array_all_close;

#[test]
fn test_scales_and_transform() {
    let x = array![[1., 2., 0.], [1., 4., -8.], [1., 1., 2.]];
    let (scaler, x_scaled) = MaxAbsScaler::fit_transform(&x, false).unwrap();

    assert_array_all_close(scaler.scales(), array![1., 4., 8.].view(), 1e-12);
    assert_eq!(x_scaled, array![[1., 0.5, 0.], [1., 1., -1.], [1., 0.25, 0.25]]);
}

#[test]
fn test_max_abs_is_one() {
    let x: Array2<f64> = array![[3., -7.5, 0.25], [-12., 2., 0.125], [6., 1., -0.5]];
    let (_, x_scaled) = MaxAbsScaler::fit_transform(&x, false).unwrap();
    for column in x_scaled.axis_iter(Axis(1)) {
        let max_abs = column.iter().fold(0f64, |acc, &v: &f64| acc.max(v.abs()));
        assert_abs_diff_eq!(max_abs, 1.);
    }
}

#[test]
fn test_zero_column_left_unscaled() {
    let x: Array2<f64> = array![[1., 0., 3.], [1., 0., 6.]];
    let (scaler, x_scaled) = MaxAbsScaler::fit_transform(&x, false).unwrap();

    assert_eq!(scaler.scales(), array![1., 1., 6.]);
    assert_eq!(x_scaled, array![[1., 0., 0.5], [1., 0., 1.]]);
    assert!(x_scaled.iter().all(|v: &f64| v.is_finite()));
}

#[test]
fn test_zero_column_strict() {
    let x = array![[1., 0., 3.], [1., 0., 6.]];
    assert!(matches!(
        MaxAbsScaler::fit(&x, true),
        Err(ClassifierError::DegenerateColumn(1))
    ));
}

#[test]
fn test_nan_column() {
    let x = array![[1., f64::NAN], [1., 2.]];
    assert!(matches!(
        MaxAbsScaler::fit(&x, false),
        Err(ClassifierError::NumericalInstability(_))
    ));
}

#[test]
fn test_empty() {
    let x = Array2::<f64>::zeros((0, 3));
    assert!(matches!(
        MaxAbsScaler::fit(&x, false),
        Err(ClassifierError::EmptyDataset)
    ));
}

#[test]
fn test_transform_reuses_training_scales() {
    let x_train = array![[1., 10.], [1., -5.]];
    let scaler = MaxAbsScaler::fit(&x_train, false).unwrap();

    let x_new = array![[1., 20.], [1., 2.5]];
    let x_scaled = scaler.transform(&x_new).unwrap();
    assert_eq!(x_scaled, array![[1., 2.], [1., 0.25]]);

    let x_wrong = array![[1., 2., 3.]];
    assert!(matches!(
        scaler.transform(&x_wrong),
        Err(ClassifierError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));
}
