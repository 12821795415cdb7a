//! Solvers for scalar equations: finding `x` such that `model(x) = 0`.
//!
//! A scalar [`Model`] maps `x: f64` to a residual `f64`. Solvers in this
//! module drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`chord`]: fixed-endpoint secant iteration on a bracketed interval
//!
//! [`Model`]: chord_core::Model

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod chord;
