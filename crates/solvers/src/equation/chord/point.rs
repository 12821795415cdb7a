use crate::equation::Evaluation;

/// A point with its evaluated residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }
}

impl From<Evaluation> for Point {
    fn from(eval: Evaluation) -> Self {
        Self::new(eval.x, eval.residual)
    }
}
