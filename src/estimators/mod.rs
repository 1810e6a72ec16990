
pub mod estimators;
pub mod hyperparams;
pub mod param_guard;
pub mod traits;

pub use estimators::{LinearClassifier, LogisticRegression, Perceptron};
pub use hyperparams::{
    LogisticRegressionParams, LogisticRegressionValidParams, PerceptronParams,
    PerceptronValidParams,
};
pub use param_guard::ParamGuard;
pub use traits::{Fit, Predict};
