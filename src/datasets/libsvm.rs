//! Reading and writing of the sparse LIBSVM text format.
//!
//! Each record spans one line: a label followed by whitespace-separated
//! `index:value` pairs, e.g. `1 0:12 1:62 2:-3`. Values are stored in the
//! order they appear on the line; the indices are only checked for being
//! unsigned integers. When writing, features are renumbered with consecutive
//! 0-based indices.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::{ArrayBase, Data, Ix1, Ix2};

use super::{DatasetBase, DenseDataset};
use crate::error::{ClassifierError, Result};
use crate::Float;

fn parse_value<F: Float>(token: &str, line: usize, what: &str) -> Result<F> {
    let value = token
        .parse::<f64>()
        .map_err(|_| ClassifierError::MalformedRecord {
            line,
            reason: format!("invalid {} `{}`", what, token),
        })?;
    let cast = F::cast(value);
    if value.is_finite() && !cast.is_finite() {
        return Err(ClassifierError::MalformedRecord {
            line,
            reason: format!("{} `{}` overflows the element type", what, token),
        });
    }
    Ok(cast)
}

fn parse_record<F: Float>(record: &str, line: usize) -> Result<(F, Vec<F>)> {
    let mut tokens = record.split_whitespace();
    let label = match tokens.next() {
        Some(token) => parse_value(token, line, "label")?,
        None => {
            return Err(ClassifierError::MalformedRecord {
                line,
                reason: "missing label".to_string(),
            })
        }
    };

    let values = tokens
        .map(|pair| {
            let (index, value) =
                pair.split_once(':')
                    .ok_or_else(|| ClassifierError::MalformedRecord {
                        line,
                        reason: format!("expected `index:value`, found `{}`", pair),
                    })?;
            if index.parse::<usize>().is_err() {
                return Err(ClassifierError::MalformedRecord {
                    line,
                    reason: format!("invalid feature index `{}`", index),
                });
            }
            parse_value(value, line, "feature value")
        })
        .collect::<Result<Vec<F>>>()?;

    Ok((label, values))
}

/// Parses a LIBSVM stream into a dense dataset. Blank lines are skipped.
pub fn read_libsvm<F: Float, R: BufRead>(reader: R) -> Result<DenseDataset<F>> {
    let mut labels = Vec::new();
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (label, values) = parse_record(&line, idx + 1)?;
        labels.push(label);
        rows.push(values);
    }

    DenseDataset::from_rows(labels, rows)
}

/// Loads a LIBSVM file from disk.
pub fn load_libsvm<F: Float, P: AsRef<Path>>(path: P) -> Result<DenseDataset<F>> {
    let file = File::open(path.as_ref())?;
    let dataset = read_libsvm(BufReader::new(file))?;
    tracing::debug!(
        path = %path.as_ref().display(),
        n_samples = dataset.n_samples(),
        n_features = dataset.n_features(),
        "loaded LIBSVM dataset"
    );
    Ok(dataset)
}

/// Writes a dataset in the LIBSVM format with consecutive 0-based indices.
pub fn write_libsvm<F, D, S, W>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    mut writer: W,
) -> Result<()>
where
    F: Float,
    D: Data<Elem = F>,
    S: Data<Elem = F>,
    W: Write,
{
    dataset.check_consistency()?;
    for (label, row) in dataset.targets().iter().zip(dataset.design_matrix().rows()) {
        write!(writer, "{}", label)?;
        for (j, value) in row.iter().enumerate() {
            write!(writer, " {}:{}", j, value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves a dataset to disk in the LIBSVM format.
pub fn save_libsvm<F, D, S, P>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    path: P,
) -> Result<()>
where
    F: Float,
    D: Data<Elem = F>,
    S: Data<Elem = F>,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_libsvm(dataset, BufWriter::new(file))
}
