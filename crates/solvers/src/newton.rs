//! Newton–Raphson iteration for a single equation `f(x) = 0`.
//!
//! # Algorithm
//!
//! Starting from an initial guess, each step replaces the estimate with
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! and the solver returns as soon as `|f(x_{n+1})| < residual_tol`. If the
//! budget of `max_iters` steps runs out first, the solve fails with
//! [`Error::NotConverged`] carrying the last estimate.
//!
//! # Zero derivatives
//!
//! The step is not guarded against `f'(x) == 0`. The division produces an
//! infinite or NaN estimate under IEEE arithmetic, which then never meets the
//! tolerance, so the solve ends in [`Error::NotConverged`] with a non-finite
//! `x`. Callers that want a bracketed fallback should use
//! [`fallback`](crate::fallback).
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after evaluating `f` at the new
//! estimate. Observers can return [`Action::StopEarly`] to end the solve with
//! [`Status::StoppedByObserver`].
//!
//! # Example
//!
//! ```
//! use nlsolve_solvers::newton;
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let solution = newton::solve_unobserved(&f, &df, 1.0, &newton::Config::default())?;
//!
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-5);
//! # Ok::<(), newton::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace};
use nlsolve_core::{Function, Observer};

/// Finds a root of `f` by Newton–Raphson iteration from `x0`.
///
/// `df` must be the derivative of `f`.
/// The residual computed to test convergence is reused for the next step,
/// so `f` is called at most `max_iters + 1` times and `df` at most
/// `max_iters` times.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if no step meets the tolerance within
/// the iteration budget, or [`Error::Function`] if `f` or `df` fails.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;
    let mut residual = f.call(x).map_err(Error::function)?;

    for iter in 1..=config.max_iters {
        let slope = df.call(x).map_err(Error::function)?;
        x -= residual / slope;
        residual = f.call(x).map_err(Error::function)?;

        trace!("newton iter {iter}: x = {x}, f(x) = {residual}, slope = {slope}");

        let event = Event {
            iter,
            x,
            residual,
            slope,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("newton stopped by observer at iter {iter}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                iters: iter,
            });
        }

        if residual.abs() < config.residual_tol {
            debug!("newton converged to {x} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter,
            });
        }
    }

    debug!(
        "newton failed to converge near {x} after {} iterations",
        config.max_iters
    );
    Err(Error::NotConverged {
        x,
        iters: config.max_iters,
    })
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if no step meets the tolerance within
/// the iteration budget, or [`Error::Function`] if `f` or `df` fails.
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, df, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, f64::consts::SQRT_2};

    use approx::assert_relative_eq;
    use nlsolve_core::Fallible;

    #[derive(Debug, thiserror::Error)]
    #[error("outside the domain")]
    struct OutOfDomain;

    fn f(x: f64) -> f64 {
        x * x - 2.0
    }

    fn df(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn finds_square_root_of_two() {
        let solution = solve_unobserved(&f, &df, 1.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 3);
        assert!(solution.residual.abs() < 1e-5);
        assert_relative_eq!(solution.x, SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn finds_negative_root_from_negative_guess() {
        let solution = solve_unobserved(&f, &df, -3.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, -SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn errors_when_budget_is_too_small() {
        let config = Config::new(1e-10, 1).expect("valid config");

        let result = solve_unobserved(&f, &df, 1000.0, &config);

        match result {
            Err(Error::NotConverged { x, iters }) => {
                assert_eq!(iters, 1);
                assert_relative_eq!(x, 1000.0 - 999_998.0 / 2000.0);
            }
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn zero_derivative_ends_with_non_finite_estimate() {
        // f'(0) = 0 sends the first step to infinity and every later step to NaN.
        let result = solve_unobserved(&f, &df, 0.0, &Config::default());

        match result {
            Err(Error::NotConverged { x, iters }) => {
                assert_eq!(iters, 20);
                assert!(x.is_nan());
            }
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn function_errors_propagate() {
        let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(OutOfDomain) });
        let dln = |x: f64| 1.0 / x;

        // From x0 = 3 the first step lands at 3 - 3 ln 3 < 0.
        let result = solve_unobserved(&ln, &dln, 3.0, &Config::default());

        match result {
            Err(err @ Error::Function(_)) => {
                assert_eq!(err.to_string(), "function error: outside the domain");
                assert!(matches!(err, Error::Function(source) if source.is::<OutOfDomain>()));
            }
            other => panic!("expected Function error, got {other:?}"),
        }
    }

    #[test]
    fn observer_sees_every_step() {
        let mut events = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            events.push(*event);
            None
        };

        let solution = solve(&f, &df, 1.0, &Config::default(), observer).expect("should solve");

        assert_eq!(events.len(), solution.iters);
        assert_eq!(events.iter().map(|e| e.iter).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_relative_eq!(events[0].x, 1.5);
        assert_relative_eq!(events[0].slope, 2.0);
        assert_relative_eq!(events[0].residual, 0.25);

        let last = events.last().expect("at least one event");
        assert_eq!(last.x.to_bits(), solution.x.to_bits());
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

        let solution = solve(&f, &df, 1.0, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.x, 17.0 / 12.0);
    }

    #[test]
    fn evaluation_counts_stay_within_budget() {
        let f_calls = Cell::new(0usize);
        let df_calls = Cell::new(0usize);
        let counted_f = |x: f64| {
            f_calls.set(f_calls.get() + 1);
            f(x)
        };
        let counted_df = |x: f64| {
            df_calls.set(df_calls.get() + 1);
            df(x)
        };
        let config = Config::new(1e-300, 5).expect("valid config");

        let result = solve_unobserved(&counted_f, &counted_df, 1000.0, &config);

        assert!(matches!(result, Err(Error::NotConverged { iters: 5, .. })));
        assert_eq!(f_calls.get(), 6);
        assert_eq!(df_calls.get(), 5);
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let config = Config::new(1e-12, 50).expect("valid config");

        let first = solve_unobserved(&f, &df, 7.0, &config).expect("should solve");
        let second = solve_unobserved(&f, &df, 7.0, &config).expect("should solve");

        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.iters, second.iters);
    }
}
