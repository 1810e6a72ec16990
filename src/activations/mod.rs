use crate::helpers::helpers::sigmoid;
use crate::Float;

#[cfg(test)]
mod tests;

/// This trait provides what distinguishes one online linear classifier from
/// another: how a raw score `w^T x` is turned into an output, how the output
/// scales the gradient of a single-sample update, and how a single sample
/// contributes to the loss.
///
/// A label is predicted as 1 whenever the activation is at least
/// [`Activation::decision_threshold`], 0 otherwise.
pub trait Activation<F: Float> {
    /// Maps a raw score to the classifier output.
    fn activate(&self, score: F) -> F;

    /// Multiplies `(y - h) * x` in the gradient of one sample, given the
    /// output `h` of the classifier on that sample.
    fn gradient_factor(&self, h: F) -> F;

    /// Contribution of one sample with label `y` and output `h` to the loss.
    fn loss(&self, y: F, h: F) -> F;

    fn decision_threshold(&self) -> F {
        F::cast(0.5)
    }
}

/// Hard threshold
///
/// The Heaviside step used by the perceptron: 1 for non-negative scores,
/// 0 otherwise. Its loss is the squared residual.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardThreshold;

impl<F: Float> Activation<F> for HardThreshold {
    fn activate(&self, score: F) -> F {
        if score >= F::zero() {
            F::one()
        } else {
            F::zero()
        }
    }

    fn gradient_factor(&self, _h: F) -> F {
        F::one()
    }

    fn loss(&self, y: F, h: F) -> F {
        (y - h).powi(2)
    }
}

/// Sigmoid
///
/// The logistic function used by logistic regression. Its output lies in
/// `(0, 1)` and its loss is the log-likelihood `y ln h + (1 - y) ln (1 - h)`,
/// which is not finite once the activation saturates to exactly 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sigmoid;

impl<F: Float> Activation<F> for Sigmoid {
    fn activate(&self, score: F) -> F {
        sigmoid(score)
    }

    fn gradient_factor(&self, h: F) -> F {
        h * (F::one() - h)
    }

    fn loss(&self, y: F, h: F) -> F {
        y * h.ln() + (F::one() - y) * (F::one() - h).ln()
    }
}
