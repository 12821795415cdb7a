use thiserror::Error;

/// Errors that can occur when validating a chord bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Both endpoint residuals have the same strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// Ordered finite bounds for a chord bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        let [left, right] = bounds.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 3.0);
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::NEG_INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn rejects_zero_width() {
        assert_eq!(Bounds::new([1.0, 1.0]), Err(BracketError::ZeroWidth));
    }
}
