use std::convert::Infallible;

/// A scalar function that maps `x` to `f(x)`.
///
/// Solvers call functions repeatedly and assume they are pure: the same `x`
/// always yields the same value and calling has no side effects.
///
/// Every closure `Fn(f64) -> f64` is a `Function` that never fails.
/// Wrap closures returning `Result` in [`Fallible`] to let their errors reach
/// the caller of the solver.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a closure `Fn(f64) -> Result<f64, E>` into a [`Function`].
///
/// ```
/// use nlsolve_core::{Fallible, Function};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value")]
/// struct Domain;
///
/// let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
///
/// assert_eq!(ln.call(1.0).unwrap(), 0.0);
/// assert!(ln.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
