//! Target functions for the chord root locator.
//!
//! Each function is a scalar [`Model`](chord_core::Model) whose output is the
//! residual to drive to zero. Swapping the model passed to the locator swaps
//! the whole problem.

mod log_sine;

pub use log_sine::{DomainError, LogSine};
