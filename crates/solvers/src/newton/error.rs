use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton–Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    /// The iteration budget ran out before `|f(x)| < residual_tol`.
    ///
    /// `x` is the last estimate, which is non-finite if the iteration hit a
    /// zero derivative.
    #[error("failed to converge near {x} after {iters} iterations")]
    NotConverged { x: f64, iters: usize },

    /// `f` or `df` failed; the source is the function's own error.
    #[error("function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
