use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix1, Ix2};
use rand::Rng;

use super::hyperparams::{
    LogisticRegressionParams, LogisticRegressionValidParams, PerceptronParams,
    PerceptronValidParams,
};
use super::traits::{Fit, Predict};
use crate::activations::{Activation, HardThreshold, Sigmoid};
use crate::datasets::DatasetBase;
use crate::error::{ClassifierError, Result};
use crate::helpers::helpers::{count_mismatches, with_intercept};
use crate::preprocessing::MaxAbsScaler;
use crate::solver::{
    stochastic_gradient_descent, GradientNorm, LearningRate, MisclassificationCount,
    StoppingCriterion,
};
use crate::Float;

/// A fitted online linear classifier
///
/// The weights live in the normalized coordinate frame computed at fit time:
/// index 0 is the intercept, index `j > 0` multiplies feature `j - 1` divided
/// by `norm_coefs[j]`. Inputs given to the prediction methods are in raw
/// coordinates and are rescaled with the recorded coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier<F: Float, A> {
    weights: Array1<F>,
    scaler: MaxAbsScaler<F>,
    n_steps: usize,
    activation: A,
}

/// The perceptron: hard-threshold activation, trained until the training set
/// is (almost) perfectly classified.
pub type Perceptron<F> = LinearClassifier<F, HardThreshold>;

/// Logistic regression: sigmoid activation, trained until single-sample
/// gradients vanish.
pub type LogisticRegression<F> = LinearClassifier<F, Sigmoid>;

impl<F: Float> LinearClassifier<F, HardThreshold> {
    /// This method instantiates a perceptron with default parameters.
    pub fn params() -> PerceptronParams<F> {
        PerceptronParams::new()
    }
}

impl<F: Float> LinearClassifier<F, Sigmoid> {
    /// This method instantiates a logistic regression model with default
    /// parameters.
    pub fn params() -> LogisticRegressionParams<F> {
        LogisticRegressionParams::new()
    }
}

impl<F: Float, A: Activation<F>> LinearClassifier<F, A> {
    /// This method is a getter for the weight vector, intercept first.
    pub fn weights(&self) -> ArrayView1<'_, F> {
        self.weights.view()
    }

    /// This method is a getter for the normalization coefficients, the
    /// intercept coefficient (always 1) first.
    pub fn norm_coefs(&self) -> ArrayView1<'_, F> {
        self.scaler.scales()
    }

    /// Number of single-sample updates performed during training.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn n_features(&self) -> usize {
        self.weights.len() - 1
    }

    /// The weights expressed in raw feature coordinates: the decision
    /// boundary is `c_0 + sum_j c_j x_j = 0`.
    pub fn unscaled_coefficients(&self) -> Array1<F> {
        &self.weights / &self.scaler.scales()
    }

    fn prepare<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        if X.ncols() != self.n_features() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features(),
                found: X.ncols(),
            });
        }
        self.scaler.transform(&with_intercept(X))
    }

    /// Outputs the activation of every row: `0` or `1` for the perceptron, a
    /// probability in `[0, 1]` for logistic regression. The sigmoid saturates
    /// to exactly 0 or 1 in floating point for large scores, the case
    /// [`LinearClassifier::loss`] reports as non-finite.
    pub fn decision_function<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        let X_full = self.prepare(X)?;
        Ok(X_full.dot(&self.weights).mapv(|score| self.activation.activate(score)))
    }

    /// Sum of the per-sample losses of the activation over a dataset.
    ///
    /// Fails with [`ClassifierError::NumericalInstability`] when the sum is
    /// not finite, which happens for logistic regression once an activation
    /// saturates to exactly 0 or 1.
    pub fn loss<D, S>(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>) -> Result<F>
    where
        D: Data<Elem = F>,
        S: Data<Elem = F>,
    {
        dataset.check_consistency()?;
        let h = self.decision_function(dataset.design_matrix())?;
        let loss = dataset
            .targets()
            .iter()
            .zip(h.iter())
            .map(|(&y_i, &h_i)| self.activation.loss(y_i, h_i))
            .sum::<F>();
        if !loss.is_finite() {
            return Err(ClassifierError::NumericalInstability(format!(
                "loss evaluated to {}",
                loss
            )));
        }
        Ok(loss)
    }

    /// Number of samples of a dataset whose predicted label differs from the
    /// true one.
    pub fn misclassified<D, S>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    ) -> Result<usize>
    where
        D: Data<Elem = F>,
        S: Data<Elem = F>,
    {
        dataset.check_consistency()?;
        let y_pred = self.predict(dataset.design_matrix())?;
        Ok(count_mismatches(dataset.targets(), &y_pred))
    }

    /// Accuracy on a dataset: `1 - misclassified / n_samples`.
    pub fn score<D, S>(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>) -> Result<F>
    where
        D: Data<Elem = F>,
        S: Data<Elem = F>,
    {
        if dataset.n_samples() == 0 {
            return Err(ClassifierError::EmptyDataset);
        }
        let n_errors = self.misclassified(dataset)?;
        Ok(F::one() - F::cast(n_errors) / F::cast(dataset.n_samples()))
    }
}

impl<F: Float, A: Activation<F>> Predict<F> for LinearClassifier<F, A> {
    /// Predicts `1` for rows whose activation reaches the decision threshold
    /// and `0` otherwise.
    fn predict<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        let threshold = self.activation.decision_threshold();
        Ok(self.decision_function(X)?.mapv(|h| {
            if h >= threshold {
                F::one()
            } else {
                F::zero()
            }
        }))
    }
}

/// Shared training routine: prepends the intercept column, normalizes, runs
/// the online solver and packs the result. Nothing is built unless every
/// stage succeeds.
#[allow(clippy::too_many_arguments)]
fn train<F, D, S, A, C, R>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    activation: A,
    criterion: &C,
    learning_rate: &LearningRate<F>,
    max_steps: usize,
    strict_normalization: bool,
    verbose: bool,
    rng: &mut R,
) -> Result<LinearClassifier<F, A>>
where
    F: Float,
    D: Data<Elem = F>,
    S: Data<Elem = F>,
    A: Activation<F>,
    C: StoppingCriterion<F>,
    R: Rng + ?Sized,
{
    dataset.check_consistency()?;
    if dataset.n_samples() == 0 {
        return Err(ClassifierError::EmptyDataset);
    }

    let X = with_intercept(dataset.design_matrix());
    // Column 0 holds the intercept and is never degenerate, report feature indices.
    let (scaler, X) =
        MaxAbsScaler::fit_transform(&X, strict_normalization).map_err(|err| match err {
            ClassifierError::DegenerateColumn(j) => ClassifierError::DegenerateColumn(j - 1),
            err => err,
        })?;

    let outcome = stochastic_gradient_descent(
        X.view(),
        dataset.targets().view(),
        &activation,
        criterion,
        learning_rate,
        max_steps,
        rng,
        verbose,
    )?;

    Ok(LinearClassifier {
        weights: outcome.weights,
        scaler,
        n_steps: outcome.n_steps,
        activation,
    })
}

/// This implements the online training of a perceptron on a dense design
/// matrix.
impl<F: Float, D: Data<Elem = F>, S: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>, ClassifierError> for PerceptronValidParams<F>
{
    type Object = Perceptron<F>;

    fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
        rng: &mut R,
    ) -> Result<Self::Object> {
        let criterion = MisclassificationCount::new(self.error_criterion());
        train(
            dataset,
            HardThreshold,
            &criterion,
            self.learning_rate(),
            self.max_steps(),
            self.strict_normalization(),
            self.verbose(),
            rng,
        )
    }
}

/// This implements the online training of a logistic regression model on a
/// dense design matrix.
impl<F: Float, D: Data<Elem = F>, S: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>, ClassifierError>
    for LogisticRegressionValidParams<F>
{
    type Object = LogisticRegression<F>;

    fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
        rng: &mut R,
    ) -> Result<Self::Object> {
        let criterion = GradientNorm::new(self.eps());
        train(
            dataset,
            Sigmoid,
            &criterion,
            self.learning_rate(),
            self.max_steps(),
            self.strict_normalization(),
            self.verbose(),
            rng,
        )
    }
}
