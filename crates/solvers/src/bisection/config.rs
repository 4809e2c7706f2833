use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub(crate) residual_tol: f64,
    pub(crate) max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 1e-5,
            max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(residual_tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            residual_tol,
            max_iters,
        })
    }

    /// Returns the residual tolerance: convergence requires `|f(x)| < residual_tol`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tiny_tolerances() {
        let config = Config::new(f64::MIN_POSITIVE, 1).expect("valid config");
        assert_eq!(config.residual_tol(), f64::MIN_POSITIVE);
        assert_eq!(config.max_iters(), 1);
    }

    #[test]
    fn rejects_invalid_settings() {
        assert_eq!(Config::new(0.0, 20), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(f64::NAN, 20), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(1e-5, 0), Err(ConfigError::MaxIters));
    }
}
