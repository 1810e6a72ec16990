use std::io::Cursor;

use ndarray::array;

use super::libsvm::{load_libsvm, read_libsvm, save_libsvm, write_libsvm};
use super::*;
use crate::error::ClassifierError;

#[test]
fn test_read_libsvm() {
    let text = "1 0:12 1:62 2:-3\n2 0:6 1:41 2:0\n\n2 3:8 7:22 9:2\n";
    let dataset: DenseDataset<f64> = read_libsvm(Cursor::new(text)).unwrap();

    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.n_features(), 3);
    assert_eq!(dataset.targets(), &array![1., 2., 2.]);
    assert_eq!(
        dataset.design_matrix(),
        &array![[12., 62., -3.], [6., 41., 0.], [8., 22., 2.]]
    );
}

#[test]
fn test_round_trip() {
    let dataset =
        DenseDataset::from_rows(vec![2.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

    let mut buffer = Vec::new();
    write_libsvm(&dataset, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "2 0:1 1:2\n1 0:3 1:4\n");

    let loaded: DenseDataset<f64> = read_libsvm(Cursor::new(buffer)).unwrap();
    assert_eq!(loaded.targets(), &array![2.0, 1.0]);
    assert_eq!(loaded.design_matrix(), &array![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn test_round_trip_renumbers_indices() {
    let text = "0.5 4:0.25 9:-1.125\n-3 1:1e-3 2:7\n";
    let dataset: DenseDataset<f64> = read_libsvm(Cursor::new(text)).unwrap();

    let mut buffer = Vec::new();
    write_libsvm(&dataset, &mut buffer).unwrap();
    let reloaded: DenseDataset<f64> = read_libsvm(Cursor::new(buffer)).unwrap();

    assert_eq!(reloaded, dataset);
}

#[test]
fn test_round_trip_on_disk() {
    let dataset = DenseDataset::from_rows(
        vec![1.0, 0.0, 1.0],
        vec![vec![0.1, 2.5], vec![-4.0, 0.0], vec![1e6, 3.25]],
    )
    .unwrap();
    let path = std::env::temp_dir().join(format!("linclass-{}.libsvm", std::process::id()));

    save_libsvm(&dataset, &path).unwrap();
    let loaded: DenseDataset<f64> = load_libsvm(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, dataset);
}

#[test]
fn test_label_only_records() {
    let dataset: DenseDataset<f64> = read_libsvm(Cursor::new("1\n0\n")).unwrap();
    assert_eq!(dataset.n_samples(), 2);
    assert_eq!(dataset.n_features(), 0);
}

#[test]
fn test_malformed_records() {
    let cases = [
        ("1 0:1\nfoo 0:1\n", 2),
        ("1 0:1 1\n", 1),
        ("1 0:1\n0 0:abc\n", 2),
        ("1 a:1\n", 1),
    ];
    for (text, expected_line) in cases {
        match read_libsvm::<f64, _>(Cursor::new(text)) {
            Err(ClassifierError::MalformedRecord { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected a malformed record error, got {:?}", other),
        }
    }
}

#[test]
fn test_ragged_rows() {
    let text = "1 0:1 1:2\n0 0:3\n";
    match read_libsvm::<f64, _>(Cursor::new(text)) {
        Err(ClassifierError::DimensionMismatch { expected, found }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected a dimension mismatch, got {:?}", other),
    }
}

#[test]
fn test_from_rows_label_mismatch() {
    let res = DenseDataset::from_rows(vec![1.0], vec![vec![1.0], vec![2.0]]);
    assert!(matches!(
        res,
        Err(ClassifierError::DimensionMismatch {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn test_check_consistency() {
    let dataset = DenseDataset::from((array![[1., 2.], [3., 4.]], array![1.]));
    assert!(dataset.check_consistency().is_err());

    let dataset = DenseDataset::from((array![[1., 2.], [3., 4.]], array![1., 0.]));
    assert!(dataset.check_consistency().is_ok());
}

#[test]
fn test_select() {
    let dataset = DenseDataset::from((array![[1., 2.], [3., 4.], [5., 6.]], array![0., 1., 2.]));
    let subset = dataset.select(&[2, 0]);
    assert_eq!(subset.design_matrix(), &array![[5., 6.], [1., 2.]]);
    assert_eq!(subset.targets(), &array![2., 0.]);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("linclass-missing-file.libsvm");
    let res = load_libsvm::<f64, _>(&path);
    assert!(matches!(res, Err(ClassifierError::Io(_))));
}

#[test]
fn test_value_overflowing_f32() {
    let text = "1 0:1\n0 0:1e300\n";
    match read_libsvm::<f32, _>(Cursor::new(text)) {
        Err(ClassifierError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a malformed record error, got {:?}", other),
    }

    let dataset: DenseDataset<f64> = read_libsvm(Cursor::new(text)).unwrap();
    assert_eq!(dataset.design_matrix(), &array![[1.], [1e300]]);
}
