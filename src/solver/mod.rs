use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

use crate::activations::Activation;
use crate::error::{ClassifierError, Result};
use crate::helpers::helpers::norm_l2;
use crate::Float;


/// Step size of the online updates as a function of the 0-based step index.
#[derive(Clone)]
pub enum LearningRate<F> {
    Constant(F),
    /// `numerator / (offset + t)`
    InverseScaling { numerator: F, offset: F },
    Schedule(Arc<dyn Fn(usize) -> F + Send + Sync>),
}

impl<F: Float> LearningRate<F> {
    pub fn constant(rate: F) -> Self {
        LearningRate::Constant(rate)
    }

    pub fn inverse_scaling(numerator: F, offset: F) -> Self {
        LearningRate::InverseScaling { numerator, offset }
    }

    pub fn schedule(f: impl Fn(usize) -> F + Send + Sync + 'static) -> Self {
        LearningRate::Schedule(Arc::new(f))
    }

    /// Evaluates the step size at step `t`.
    pub fn rate(&self, t: usize) -> F {
        match self {
            LearningRate::Constant(rate) => *rate,
            LearningRate::InverseScaling { numerator, offset } => {
                *numerator / (*offset + F::cast(t))
            }
            LearningRate::Schedule(f) => f(t),
        }
    }
}

impl<F: Float> From<F> for LearningRate<F> {
    fn from(rate: F) -> Self {
        LearningRate::Constant(rate)
    }
}

impl<F: fmt::Debug> fmt::Debug for LearningRate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningRate::Constant(rate) => f.debug_tuple("Constant").field(rate).finish(),
            LearningRate::InverseScaling { numerator, offset } => f
                .debug_struct("InverseScaling")
                .field("numerator", numerator)
                .field("offset", offset)
                .finish(),
            LearningRate::Schedule(_) => f.write_str("Schedule(<fn>)"),
        }
    }
}

/// This trait decides when the online training loop may stop before
/// exhausting its step budget. It is checked before every update, starting
/// from [`StoppingCriterion::initial_value`].
pub trait StoppingCriterion<F: Float> {
    /// Value of the monitored quantity before any update.
    fn initial_value(&self, n_samples: usize) -> F;

    /// Computes the monitored quantity from the current weights and the
    /// gradient of the last update.
    fn evaluate<A: Activation<F>>(
        &self,
        X: ArrayView2<F>,
        y: ArrayView1<F>,
        w: ArrayView1<F>,
        grad: ArrayView1<F>,
        activation: &A,
    ) -> F;

    fn is_met(&self, value: F) -> bool;
}

/// Misclassification count
///
/// Counts the misclassified training samples under the current weights and
/// stops once that count is at most `max_errors`. Every evaluation scans the
/// whole training set. Before the first update every sample is counted as
/// misclassified, so `max_errors >= n_samples` performs no update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MisclassificationCount<F> {
    max_errors: F,
}

impl<F: Float> MisclassificationCount<F> {
    pub fn new(max_errors: F) -> Self {
        MisclassificationCount { max_errors }
    }
}

impl<F: Float> StoppingCriterion<F> for MisclassificationCount<F> {
    fn initial_value(&self, n_samples: usize) -> F {
        F::cast(n_samples)
    }

    fn evaluate<A: Activation<F>>(
        &self,
        X: ArrayView2<F>,
        y: ArrayView1<F>,
        w: ArrayView1<F>,
        _grad: ArrayView1<F>,
        activation: &A,
    ) -> F {
        let threshold = activation.decision_threshold();
        let n_errors = X
            .dot(&w)
            .iter()
            .zip(y.iter())
            .filter(|(score, y_i)| {
                let label = if activation.activate(**score) >= threshold {
                    F::one()
                } else {
                    F::zero()
                };
                label != **y_i
            })
            .count();
        F::cast(n_errors)
    }

    fn is_met(&self, value: F) -> bool {
        value <= self.max_errors
    }
}

/// Gradient norm
///
/// Stops once the Euclidean norm of the gradient of the last single-sample
/// update falls strictly below `eps`. The norm is infinite before the first
/// update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm<F> {
    eps: F,
}

impl<F: Float> GradientNorm<F> {
    pub fn new(eps: F) -> Self {
        GradientNorm { eps }
    }
}

impl<F: Float> StoppingCriterion<F> for GradientNorm<F> {
    fn initial_value(&self, _n_samples: usize) -> F {
        F::infinity()
    }

    fn evaluate<A: Activation<F>>(
        &self,
        _X: ArrayView2<F>,
        _y: ArrayView1<F>,
        _w: ArrayView1<F>,
        grad: ArrayView1<F>,
        _activation: &A,
    ) -> F {
        norm_l2(grad)
    }

    fn is_met(&self, value: F) -> bool {
        value < self.eps
    }
}

/// Result of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome<F> {
    pub weights: Array1<F>,
    pub n_steps: usize,
    /// Last value of the stopping criterion, its initial value if no step was
    /// taken.
    pub criterion: F,
}

/// Performs one single-sample update in place and returns its gradient
/// `(y - h) * factor(h) * x`.
pub fn update_weights<F: Float, A: Activation<F>>(
    x: ArrayView1<F>,
    y: F,
    w: &mut Array1<F>,
    activation: &A,
    rate: F,
) -> Array1<F> {
    let h = activation.activate(w.dot(&x));
    let grad = &x * ((y - h) * activation.gradient_factor(h));
    w.scaled_add(rate, &grad);
    grad
}

/// Online stochastic gradient training of a linear classifier.
///
/// `X` must already contain the intercept column. The weights start at one;
/// at each step a sample is drawn uniformly with replacement from `rng` and
/// the weights move by `learning_rate(step) * gradient`. Training ends after
/// `max_steps` updates or as soon as `criterion` is met, which is checked
/// before each update.
///
/// The weights are only handed out when training succeeds. Weights that
/// diverge to non-finite values yield a
/// [`ClassifierError::NumericalInstability`].
#[allow(clippy::too_many_arguments)]
pub fn stochastic_gradient_descent<F, A, C, R>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    activation: &A,
    criterion: &C,
    learning_rate: &LearningRate<F>,
    max_steps: usize,
    rng: &mut R,
    verbose: bool,
) -> Result<TrainingOutcome<F>>
where
    F: Float,
    A: Activation<F>,
    C: StoppingCriterion<F>,
    R: Rng + ?Sized,
{
    let (n_samples, n_features) = X.dim();
    if n_samples == 0 {
        return Err(ClassifierError::EmptyDataset);
    }
    if y.len() != n_samples {
        return Err(ClassifierError::DimensionMismatch {
            expected: n_samples,
            found: y.len(),
        });
    }

    let mut w = Array1::<F>::ones(n_features);
    let mut value = criterion.initial_value(n_samples);
    let mut step = 0;

    while step < max_steps && !criterion.is_met(value) {
        let i = rng.gen_range(0..n_samples);
        let grad = update_weights(X.row(i), y[i], &mut w, activation, learning_rate.rate(step));
        step += 1;

        value = criterion.evaluate(X, y, w.view(), grad.view(), activation);
        if verbose {
            tracing::info!(step, criterion = %value, "training step");
        } else {
            tracing::trace!(step, criterion = %value, "training step");
        }
    }

    if w.iter().any(|wj| !wj.is_finite()) {
        return Err(ClassifierError::NumericalInstability(format!(
            "weights diverged after {} steps",
            step
        )));
    }

    tracing::debug!(n_steps = step, criterion = %value, "training finished");
    Ok(TrainingOutcome {
        weights: w,
        n_steps: step,
        criterion: value,
    })
}
