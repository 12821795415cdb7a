use super::Point;

/// Indicates why the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a chord solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate (the last iterate).
    pub x: f64,

    /// Residual at the root estimate.
    pub residual: f64,

    /// Displacement between the last two iterates.
    pub error: f64,

    /// Last defined ratio of consecutive displacements.
    ///
    /// `None` when the solver stopped after a single iteration, or when every
    /// earlier displacement was exactly zero.
    pub convergence: Option<f64>,

    /// Number of iterations performed.
    pub iters: usize,

    /// Number of model evaluations, including both bracket endpoints.
    pub evals: usize,

    /// The fixed endpoint used by the iteration.
    pub fixed: Point,
}
