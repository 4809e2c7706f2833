use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    /// `f(x0)` and `f(x1)` have the same sign, checked once before iterating.
    #[error("f({x0}) and f({x1}) must differ in sign")]
    InvalidBracket { x0: f64, x1: f64 },

    /// The iteration budget ran out before a midpoint met the tolerance.
    #[error("failed to converge from [{x0}, {x1}] after {iters} iterations")]
    NotConverged { x0: f64, x1: f64, iters: usize },

    /// `f` failed; the source is the function's own error.
    #[error("function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
