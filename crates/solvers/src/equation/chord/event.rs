use super::Point;

/// Iteration event emitted by the chord solver.
///
/// One event is emitted per iteration, after the new iterate is evaluated
/// and before the stopping test runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate and its residual.
    pub point: Point,

    /// Displacement from the previous iterate.
    pub error: f64,

    /// Ratio of this displacement to the previous one, once defined.
    pub convergence: Option<f64>,

    /// The fixed endpoint the chords are drawn from.
    pub fixed: Point,
}
