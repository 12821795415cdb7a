use super::{Event, Point, Solution, Status, bracket::BracketError};

/// Iteration state: the fixed endpoint, the moving iterate, and diagnostics.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    fixed: Point,
    current: Point,
    error: f64,
    convergence: Option<f64>,
    iters: usize,
    evals: usize,
}

impl State {
    /// Creates the initial state from two evaluated endpoints.
    ///
    /// The endpoint with the larger residual magnitude stays fixed and the
    /// other starts the iteration. Ties fix `right`. Which endpoint is fixed
    /// is a heuristic; the iteration is valid for either.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both residuals share a strict sign.
    pub(super) fn new(left: Point, right: Point) -> Result<Self, BracketError> {
        if left.residual * right.residual > 0.0 {
            return Err(BracketError::NoSignChange);
        }

        let (fixed, current) = if left.residual.abs() > right.residual.abs() {
            (left, right)
        } else {
            (right, left)
        };

        Ok(Self {
            fixed,
            current,
            error: f64::INFINITY,
            convergence: None,
            iters: 0,
            evals: 2,
        })
    }

    /// Where the chord through the fixed endpoint and the current iterate
    /// crosses zero.
    ///
    /// Non-finite when both residuals are equal.
    pub(super) fn next_x(&self) -> f64 {
        let Point { x, residual } = self.current;
        x - residual * (self.fixed.x - x) / (self.fixed.residual - residual)
    }

    /// Moves the iterate to a freshly evaluated point.
    pub(super) fn accept(&mut self, point: Point) {
        let error = (point.x - self.current.x).abs();

        if self.iters > 0 && self.error != 0.0 {
            self.convergence = Some(error / self.error);
        }

        self.error = error;
        self.current = point;
        self.iters += 1;
        self.evals += 1;
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn error(&self) -> f64 {
        self.error
    }

    pub(super) fn event(&self) -> Event {
        Event {
            iter: self.iters,
            point: self.current,
            error: self.error,
            convergence: self.convergence,
            fixed: self.fixed,
        }
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            x: self.current.x,
            residual: self.current.residual,
            error: self.error,
            convergence: self.convergence,
            iters: self.iters,
            evals: self.evals,
            fixed: self.fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fixes_larger_residual() {
        let state = State::new(Point::new(0.0, -3.0), Point::new(1.0, 1.0)).expect("bracket");
        assert_relative_eq!(state.fixed.x, 0.0);
        assert_relative_eq!(state.current.x, 1.0);

        let state = State::new(Point::new(0.0, -1.0), Point::new(1.0, 3.0)).expect("bracket");
        assert_relative_eq!(state.fixed.x, 1.0);
        assert_relative_eq!(state.current.x, 0.0);
    }

    #[test]
    fn ties_fix_right() {
        let state = State::new(Point::new(0.0, -2.0), Point::new(1.0, 2.0)).expect("bracket");
        assert_relative_eq!(state.fixed.x, 1.0);
    }

    #[test]
    fn rejects_same_sign() {
        let err = State::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0)).unwrap_err();
        assert_eq!(err, BracketError::NoSignChange);
    }

    #[test]
    fn chord_of_a_line_hits_its_root() {
        // Line through (0, -1) and (2, 3) crosses zero at x = 0.5.
        let state = State::new(Point::new(0.0, -1.0), Point::new(2.0, 3.0)).expect("bracket");
        assert_relative_eq!(state.next_x(), 0.5);
    }

    #[test]
    fn convergence_defined_from_second_iteration() {
        let mut state = State::new(Point::new(0.0, -1.0), Point::new(2.0, 3.0)).expect("bracket");

        state.accept(Point::new(0.5, -0.2));
        assert_relative_eq!(state.error(), 0.5);
        assert!(state.event().convergence.is_none());

        state.accept(Point::new(0.6, -0.01));
        let ratio = state.event().convergence.expect("defined");
        assert_relative_eq!(ratio, 0.2, epsilon = 1e-12);

        let solution = state.into_solution(Status::Converged);
        assert_eq!(solution.iters, 2);
        assert_eq!(solution.evals, 4);
    }

    #[test]
    fn zero_step_keeps_previous_ratio() {
        let mut state = State::new(Point::new(0.0, -1.0), Point::new(2.0, 3.0)).expect("bracket");

        state.accept(Point::new(0.5, 0.0));
        state.accept(Point::new(0.5, 0.0));
        assert_relative_eq!(state.error(), 0.0);
        assert_relative_eq!(state.event().convergence.expect("defined"), 0.0);

        // Previous displacement is zero, so the ratio is left as it was.
        state.accept(Point::new(0.5, 0.0));
        assert_relative_eq!(state.event().convergence.expect("defined"), 0.0);
    }
}
