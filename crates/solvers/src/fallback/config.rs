use thiserror::Error;

use crate::{bisection, newton};

/// Configuration for the fallback solver.
///
/// One residual tolerance applies to both methods; each method has its own
/// iteration budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    residual_tol: f64,
    newton_max_iters: usize,
    bisection_max_iters: usize,
}

/// Errors that can occur when validating a fallback solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("newton_max_iters must be at least 1")]
    NewtonMaxIters,

    #[error("bisection_max_iters must be at least 1")]
    BisectionMaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 1e-5,
            newton_max_iters: 20,
            bisection_max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration budgets.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive,
    /// or if either iteration budget is zero.
    pub fn new(
        residual_tol: f64,
        newton_max_iters: usize,
        bisection_max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if newton_max_iters == 0 {
            return Err(ConfigError::NewtonMaxIters);
        }
        if bisection_max_iters == 0 {
            return Err(ConfigError::BisectionMaxIters);
        }

        Ok(Self {
            residual_tol,
            newton_max_iters,
            bisection_max_iters,
        })
    }

    /// Returns the residual tolerance shared by both methods.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn newton_max_iters(&self) -> usize {
        self.newton_max_iters
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn bisection_max_iters(&self) -> usize {
        self.bisection_max_iters
    }

    /// Returns the config for the Newton–Raphson phase.
    pub(super) fn newton(&self) -> newton::Config {
        newton::Config {
            residual_tol: self.residual_tol,
            max_iters: self.newton_max_iters,
        }
    }

    /// Returns the config for the bisection phase.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            residual_tol: self.residual_tol,
            max_iters: self.bisection_max_iters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_phase_configs() {
        let config = Config::new(1e-8, 5, 40).expect("valid config");

        assert_eq!(config.newton(), newton::Config::new(1e-8, 5).expect("valid"));
        assert_eq!(
            config.bisection(),
            bisection::Config::new(1e-8, 40).expect("valid")
        );
    }

    #[test]
    fn default_phases_match_solver_defaults() {
        let config = Config::default();

        assert_eq!(config.newton(), newton::Config::default());
        assert_eq!(config.bisection(), bisection::Config::default());
    }

    #[test]
    fn rejects_each_invalid_setting() {
        assert_eq!(Config::new(-1.0, 20, 20), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(1e-5, 0, 20), Err(ConfigError::NewtonMaxIters));
        assert_eq!(Config::new(1e-5, 20, 0), Err(ConfigError::BisectionMaxIters));
    }
}
