use thiserror::Error;

/// Default iteration ceiling.
///
/// Chord iteration has no natural bound on a pathological model, so every
/// solve stops here at the latest.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// How the two tolerances combine into a stopping test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopRule {
    /// Stop once the step is within `x_tol` and the residual within `residual_tol`.
    #[default]
    Both,

    /// Stop as soon as either tolerance is met.
    Either,
}

/// Configuration for the chord solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    residual_tol: f64,
    stop_rule: StopRule,
}

/// Errors that can occur when validating a chord solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-10, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// `x_tol` bounds the displacement between successive iterates and
    /// `residual_tol` bounds the residual magnitude at the last iterate.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(x_tol: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters: DEFAULT_MAX_ITERS,
            x_tol,
            residual_tol,
            stop_rule: StopRule::default(),
        })
    }

    /// Returns a copy with a different iteration ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters, ..self })
    }

    /// Returns a copy with a different stop rule.
    #[must_use]
    pub fn with_stop_rule(self, stop_rule: StopRule) -> Self {
        Self { stop_rule, ..self }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on successive-iterate displacement.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the tolerance on residual magnitude.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the stop rule.
    #[must_use]
    pub fn stop_rule(&self) -> StopRule {
        self.stop_rule
    }

    /// Returns true if an iterate with this step and residual should stop.
    #[must_use]
    pub fn is_converged(&self, error: f64, residual: f64) -> bool {
        let x_ok = error <= self.x_tol;
        let residual_ok = residual.abs() <= self.residual_tol;
        match self.stop_rule {
            StopRule::Both => x_ok && residual_ok,
            StopRule::Either => x_ok || residual_ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(-1.0, 1e-4), Err(ConfigError::XTol));
        assert_eq!(Config::new(f64::NAN, 1e-4), Err(ConfigError::XTol));
        assert_eq!(
            Config::new(1e-4, f64::INFINITY),
            Err(ConfigError::ResidualTol)
        );
    }

    #[test]
    fn rejects_zero_max_iters() {
        let config = Config::default();
        assert_eq!(config.with_max_iters(0), Err(ConfigError::MaxIters));
        assert_eq!(config.with_max_iters(5).map(|c| c.max_iters()), Ok(5));
    }

    #[test]
    fn both_requires_each_tolerance() {
        let config = Config::new(1e-4, 1e-3).expect("valid config");

        assert!(config.is_converged(1e-5, -1e-4));
        assert!(!config.is_converged(1e-3, 1e-4));
        assert!(!config.is_converged(1e-5, 1e-2));
    }

    #[test]
    fn either_accepts_one_tolerance() {
        let config = Config::new(1e-4, 1e-3)
            .expect("valid config")
            .with_stop_rule(StopRule::Either);

        assert!(config.is_converged(1e-3, 1e-4));
        assert!(config.is_converged(1e-5, 1e-2));
        assert!(!config.is_converged(1e-3, 1e-2));
    }

    #[test]
    fn zero_tolerance_allows_exact_hits() {
        let config = Config::new(0.0, 0.0).expect("valid config");
        assert!(config.is_converged(0.0, 0.0));
        assert!(!config.is_converged(f64::MIN_POSITIVE, 0.0));
    }
}
