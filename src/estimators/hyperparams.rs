use super::param_guard::ParamGuard;
use crate::error::{ClassifierError, Result};
use crate::solver::LearningRate;
use crate::Float;

fn check_learning_rate<F: Float>(learning_rate: &LearningRate<F>) -> Result<()> {
    let is_invalid = |rate: F| !rate.is_finite() || rate <= F::zero();
    let offending = match learning_rate {
        LearningRate::Constant(rate) => Some(*rate).filter(|&rate| is_invalid(rate)),
        LearningRate::InverseScaling { numerator, offset } => {
            [*numerator, *offset].into_iter().find(|&rate| is_invalid(rate))
        }
        // Schedules are only known once evaluated.
        LearningRate::Schedule(_) => None,
    };
    match offending {
        Some(rate) => Err(ClassifierError::InvalidLearningRate(
            rate.to_f32().unwrap_or(f32::NAN),
        )),
        None => Ok(()),
    }
}

/// A verified hyperparameter set ready for the fitting of a perceptron
#[derive(Debug, Clone)]
pub struct PerceptronValidParams<F> {
    learning_rate: LearningRate<F>,
    max_steps: usize,
    error_criterion: F,
    strict_normalization: bool,
    verbose: bool,
}

impl<F: Float> PerceptronValidParams<F> {
    pub fn learning_rate(&self) -> &LearningRate<F> {
        &self.learning_rate
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn error_criterion(&self) -> F {
        self.error_criterion
    }

    pub fn strict_normalization(&self) -> bool {
        self.strict_normalization
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures a perceptron trained online: at every step one sample `(x, y)`
/// is drawn at random and the weights are updated as
/// ```ignore
/// w <- w + learning_rate(t) * (y - step(w^T x)) * x
/// ```
/// until no more than `error_criterion` training samples are misclassified or
/// `max_steps` updates have been performed.
#[derive(Debug, Clone)]
pub struct PerceptronParams<F>(PerceptronValidParams<F>);

impl<F: Float> Default for PerceptronParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a perceptron
impl<F: Float> PerceptronParams<F> {
    /// Create default perceptron hyper parameters
    pub fn new() -> PerceptronParams<F> {
        Self(PerceptronValidParams {
            learning_rate: LearningRate::Constant(F::one()),
            max_steps: 1000,
            error_criterion: F::zero(),
            strict_normalization: false,
            verbose: false,
        })
    }

    /// Set a constant learning rate.
    /// Defaults to `1` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = LearningRate::Constant(learning_rate);
        self
    }

    /// Set a learning rate depending on the step index.
    pub fn learning_rate_schedule(mut self, learning_rate: LearningRate<F>) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the maximum number of single-sample updates.
    /// Defaults to `1000` if not set.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.0.max_steps = max_steps;
        self
    }

    /// Set the number of misclassified training samples below which training
    /// stops.
    /// Defaults to `0` if not set.
    pub fn error_criterion(mut self, error_criterion: F) -> Self {
        self.0.error_criterion = error_criterion;
        self
    }

    /// Fail on all-zero feature columns instead of leaving them unscaled.
    ///
    /// Defaults to `false` if not set.
    pub fn strict_normalization(mut self, strict_normalization: bool) -> Self {
        self.0.strict_normalization = strict_normalization;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for PerceptronParams<F> {
    type Checked = PerceptronValidParams<F>;
    type Error = ClassifierError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_learning_rate(&self.0.learning_rate)?;
        if self.0.max_steps == 0 {
            Err(ClassifierError::InvalidMaxSteps(self.0.max_steps))
        } else if !self.0.error_criterion.is_finite() || self.0.error_criterion < F::zero() {
            Err(ClassifierError::InvalidErrorCriterion(
                self.0.error_criterion.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a logistic
/// regression model
#[derive(Debug, Clone)]
pub struct LogisticRegressionValidParams<F> {
    learning_rate: LearningRate<F>,
    max_steps: usize,
    eps: F,
    strict_normalization: bool,
    verbose: bool,
}

impl<F: Float> LogisticRegressionValidParams<F> {
    pub fn learning_rate(&self) -> &LearningRate<F> {
        &self.learning_rate
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn eps(&self) -> F {
        self.eps
    }

    pub fn strict_normalization(&self) -> bool {
        self.strict_normalization
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures a logistic regression model trained online: at every step one
/// sample `(x, y)` is drawn at random and, with `h = sigmoid(w^T x)`,
/// ```ignore
/// w <- w + learning_rate(t) * (y - h) * h * (1 - h) * x
/// ```
/// until the norm of that update's gradient drops below `eps` or `max_steps`
/// updates have been performed.
#[derive(Debug, Clone)]
pub struct LogisticRegressionParams<F>(LogisticRegressionValidParams<F>);

impl<F: Float> Default for LogisticRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a logistic regression model
impl<F: Float> LogisticRegressionParams<F> {
    /// Create default logistic regression hyper parameters
    pub fn new() -> LogisticRegressionParams<F> {
        Self(LogisticRegressionValidParams {
            learning_rate: LearningRate::Constant(F::one()),
            max_steps: 1000,
            eps: F::cast(0.01),
            strict_normalization: false,
            verbose: false,
        })
    }

    /// Set a constant learning rate.
    /// Defaults to `1` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = LearningRate::Constant(learning_rate);
        self
    }

    /// Set a learning rate depending on the step index.
    pub fn learning_rate_schedule(mut self, learning_rate: LearningRate<F>) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the maximum number of single-sample updates.
    /// Defaults to `1000` if not set.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.0.max_steps = max_steps;
        self
    }

    /// Set the stopping criterion on the norm of the gradient of an update.
    ///
    /// Defaults to `0.01` if not set.
    pub fn eps(mut self, eps: F) -> Self {
        self.0.eps = eps;
        self
    }

    /// Fail on all-zero feature columns instead of leaving them unscaled.
    ///
    /// Defaults to `false` if not set.
    pub fn strict_normalization(mut self, strict_normalization: bool) -> Self {
        self.0.strict_normalization = strict_normalization;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for LogisticRegressionParams<F> {
    type Checked = LogisticRegressionValidParams<F>;
    type Error = ClassifierError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_learning_rate(&self.0.learning_rate)?;
        if self.0.max_steps == 0 {
            Err(ClassifierError::InvalidMaxSteps(self.0.max_steps))
        } else if !self.0.eps.is_finite() || self.0.eps <= F::zero() {
            Err(ClassifierError::InvalidTolerance(
                self.0.eps.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
