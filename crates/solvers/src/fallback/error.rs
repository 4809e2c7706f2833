use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during fallback solving.
#[derive(Debug, Error)]
pub enum Error {
    /// Newton–Raphson and bisection both ran out of iterations.
    #[error("neither method converged")]
    NeitherConverged,

    /// Newton–Raphson ran out of iterations and the bracket has no sign
    /// change, so bisection could not be attempted.
    #[error(
        "Newton-Raphson failed to converge and f(x0) and f(x1) do not differ in sign, \
         so bisection is inappropriate"
    )]
    IncompatibleFallback,

    /// `f` or `df` failed; the source is the function's own error.
    #[error("function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}
