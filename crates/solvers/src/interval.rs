use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// One or both bounds are non-finite.
    #[error("non-finite bound(s)")]
    NonFinite,
    /// The lower bound is not strictly below the upper bound.
    #[error("lower bound must be less than upper bound")]
    Empty,
}

/// A finite search domain `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Bounds are not reordered: a reversed pair is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite);
        }
        if lower >= upper {
            return Err(IntervalError::Empty);
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_bounds() {
        let interval = Interval::new(-6.0, 2.0).expect("valid interval");
        assert_relative_eq!(interval.lower(), -6.0);
        assert_relative_eq!(interval.upper(), 2.0);
        assert_relative_eq!(interval.width(), 8.0);
    }

    #[test]
    fn rejects_empty_or_reversed() {
        assert_eq!(Interval::new(1.0, 1.0), Err(IntervalError::Empty));
        assert_eq!(Interval::new(2.0, -6.0), Err(IntervalError::Empty));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite)
        );
        assert_eq!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite)
        );
    }
}
