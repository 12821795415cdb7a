use thiserror::Error;

use chord_core::Model;

/// Returned when an input lies outside a model's domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("x = {x} is outside the domain (x > {lower_limit} required)")]
pub struct DomainError {
    pub x: f64,
    pub lower_limit: f64,
}

/// f(x) = 2·log₁₀(x + 7) − 5·sin(x).
///
/// Defined for x > −7.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSine;

impl LogSine {
    /// Inputs must be strictly greater than this value.
    pub const LOWER_LIMIT: f64 = -7.0;
}

impl Model for LogSine {
    type Input = f64;
    type Output = f64;
    type Error = DomainError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        let shifted = x - Self::LOWER_LIMIT;
        if shifted <= 0.0 {
            return Err(DomainError {
                x: *x,
                lower_limit: Self::LOWER_LIMIT,
            });
        }
        Ok(2.0 * shifted.log10() - 5.0 * x.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_inside_domain() {
        // 2·log₁₀(10) − 5·sin(3)
        let value = LogSine.call(&3.0).expect("inside domain");
        assert_relative_eq!(value, 2.0 - 5.0 * 3.0_f64.sin(), epsilon = 1e-12);

        // 2·log₁₀(7) at x = 0
        let value = LogSine.call(&0.0).expect("inside domain");
        assert_relative_eq!(value, 2.0 * 7.0_f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn rejects_lower_limit() {
        let err = LogSine.call(&-7.0).unwrap_err();
        assert_eq!(
            err,
            DomainError {
                x: -7.0,
                lower_limit: -7.0
            }
        );
    }

    #[test]
    fn rejects_below_lower_limit() {
        assert!(LogSine.call(&-7.5).is_err());
        assert!(LogSine.call(&f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn accepts_just_above_lower_limit() {
        let value = LogSine.call(&-6.999).expect("inside domain");
        assert!(value.is_finite());
    }
}
