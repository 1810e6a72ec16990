use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use super::helpers::*;
use super::test_helpers::*;

#[test]
fn sigmoid_works() {
    assert_abs_diff_eq!(sigmoid(0.), 0.5);
    assert_abs_diff_eq!(sigmoid(2.), 0.8807970779778823, epsilon = 1e-12);
    assert_abs_diff_eq!(sigmoid(-2.), 1. - 0.8807970779778823, epsilon = 1e-12);
    assert!(sigmoid(20f64) < 1.);
    assert!(sigmoid(-20f64) > 0.);
    // Saturates to the bounds in double precision.
    assert_eq!(sigmoid(40f64), 1.);
    assert_eq!(sigmoid(-800f64), 0.);
}

#[test]
fn with_intercept_prepends_ones() {
    let x = array![[2., 0.], [4., 5.]];
    let res = with_intercept(&x);
    assert_eq!(res, array![[1., 2., 0.], [1., 4., 5.]]);
}

#[test]
fn with_intercept_on_empty_rows() {
    let x = Array1::<f64>::zeros(0).into_shape((0, 0)).unwrap();
    let res = with_intercept(&x);
    assert_eq!(res.dim(), (0, 1));
}

#[test]
fn norm_l2_works() {
    let x = array![3., -4.];
    assert_abs_diff_eq!(norm_l2(x.view()), 5.);
}

#[test]
fn count_mismatches_works() {
    let y = array![1., 0., 1., 1.];
    let y_hat = array![1., 1., 0., 1.];
    assert_eq!(count_mismatches(&y, &y_hat), 2);
}

#[test]
fn separable_data_is_separated_by_first_feature() {
    let dataset = generate_separable_data(20, 3, 0.5, 0);
    for (row, &label) in dataset.design_matrix().rows().into_iter().zip(dataset.targets()) {
        if label == 1. {
            assert!(row[0] >= 0.5);
        } else {
            assert!(row[0] <= -0.5);
        }
    }
}
