use thiserror::Error;

/// Simplified `Result` using [`ClassifierError`](crate::ClassifierError) as error type
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Error variants from data loading, hyperparameter validation or model
/// estimation
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A line of a LIBSVM file is not a label followed by `index:value` pairs
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    /// Labels and feature rows disagree in length, or feature rows disagree
    /// with each other
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// An all-zero column was met while normalizing in strict mode
    #[error("column {0} is identically zero and cannot be normalized")]
    DegenerateColumn(usize),
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
    #[error("the dataset has no samples")]
    EmptyDataset,
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("invalid maximum number of steps {0}")]
    InvalidMaxSteps(usize),
    #[error("invalid error criterion {0}")]
    InvalidErrorCriterion(f32),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid number of folds {0}")]
    InvalidFolds(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
