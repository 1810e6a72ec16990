#![allow(non_snake_case)]

use std::fmt;
use std::iter::Sum;

use ndarray::ScalarOperand;
use num_traits::{FromPrimitive, NumAssignOps, NumCast};

/// Floating point scalar
///
/// Gathers what the estimators need from an element type, implemented for
/// `f32` and `f64`. Bound modelled on linfa's `Float`.
pub trait Float:
    'static
    + num_traits::Float
    + FromPrimitive
    + NumAssignOps
    + Sum
    + Default
    + Send
    + Sync
    + fmt::Display
    + fmt::Debug
    + ScalarOperand
    + approx::AbsDiffEq
{
    /// Infallible conversion from a primitive number.
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod activations;
pub mod datasets;
pub mod error;
pub mod estimators;
pub mod helpers;
pub mod model_selection;
pub mod preprocessing;
pub mod solver;

pub use error::{ClassifierError, Result};
