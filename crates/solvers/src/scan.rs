//! Fixed-step sweep for sign-change brackets.
//!
//! The sweep starts at the interval's lower bound and walks forward in steps
//! of [`ScanConfig::step`] while the left edge of the current sub-interval is
//! below the upper bound. The last sub-interval may extend past the upper
//! bound; it is not clamped.
//!
//! Each grid point is evaluated once, and the right value of one sub-interval
//! is reused as the left value of the next. A sub-interval is reported when
//! the product of its endpoint residuals is strictly negative, so:
//!
//! - a residual of exactly zero on a grid point is not reported
//! - a sub-interval with an endpoint outside the model's domain (or with a
//!   non-finite residual) is skipped
//!
//! The sweep ends early if adding the step no longer moves the grid point,
//! which happens once the step is below the floating-point spacing near `x`.

use log::{debug, trace};
use thiserror::Error;

use chord_core::Model;

use crate::{Interval, equation::evaluate};

/// Default sub-interval width.
pub const DEFAULT_STEP: f64 = 0.16;

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("step must be finite and positive")]
    Step,
}

/// Configuration for the bracket sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    step: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl ScanConfig {
    /// Creates a config with a validated step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite, zero, or negative.
    pub fn new(step: f64) -> Result<Self, ScanError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ScanError::Step);
        }
        Ok(Self { step })
    }

    /// Returns the sub-interval width.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// A sub-interval whose endpoint residuals differ in sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Left grid point.
    pub left: f64,
    /// Right grid point, one step past `left`.
    pub right: f64,
    /// Residual at `left`.
    pub left_residual: f64,
    /// Residual at `right`, opposite in sign to `left_residual`.
    pub right_residual: f64,
}

impl Bracket {
    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Lazily yields the brackets of `interval`, left to right.
pub fn scan<'m, M>(model: &'m M, interval: Interval, config: &ScanConfig) -> Scan<'m, M>
where
    M: Model<Input = f64, Output = f64>,
{
    let x = interval.lower();
    Scan {
        model,
        x,
        end: interval.upper(),
        step: config.step(),
        left: residual_at(model, x),
    }
}

/// Iterator returned by [`scan`].
#[derive(Debug)]
pub struct Scan<'m, M> {
    model: &'m M,
    x: f64,
    end: f64,
    step: f64,
    left: Option<f64>,
}

impl<M> Iterator for Scan<'_, M>
where
    M: Model<Input = f64, Output = f64>,
{
    type Item = Bracket;

    fn next(&mut self) -> Option<Bracket> {
        while self.x < self.end {
            let left = self.x;
            let right = left + self.step;
            if right <= left {
                debug!("scan stalled at {left}: step {} is below the grid spacing", self.step);
                self.x = self.end;
                return None;
            }
            let right_residual = residual_at(self.model, right);
            let left_residual = std::mem::replace(&mut self.left, right_residual);
            self.x = right;

            if let (Some(left_residual), Some(right_residual)) = (left_residual, right_residual)
                && left_residual * right_residual < 0.0
            {
                trace!("sign change on [{left}, {right}]");
                return Some(Bracket {
                    left,
                    right,
                    left_residual,
                    right_residual,
                });
            }
        }
        None
    }
}

fn residual_at<M>(model: &M, x: f64) -> Option<f64>
where
    M: Model<Input = f64, Output = f64>,
{
    match evaluate(model, x) {
        Ok(eval) => Some(eval.residual),
        Err(error) => {
            trace!("skipping grid point: {error}");
            None
        }
    }
}
