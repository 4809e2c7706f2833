//! Newton–Raphson with a bisection fallback.
//!
//! The solver first runs [`newton`] from `x0`. If Newton–Raphson converges,
//! its estimate is returned and bisection never runs. If it exhausts its
//! iteration budget, [`bisection`] runs on `[x0, x1]` with its own budget.
//!
//! Both failure modes collapse into this module's [`Error`]:
//!
//! - bisection also runs out of iterations: [`Error::NeitherConverged`]
//! - `f(x0)` and `f(x1)` share a sign: [`Error::IncompatibleFallback`], which
//!   tells callers that Newton–Raphson failed first, unlike a plain
//!   [`bisection::Error::InvalidBracket`]
//!
//! Errors returned by `f` or `df` are never treated as a reason to fall back;
//! they end the solve as [`Error::Function`].
//!
//! # Observer Events
//!
//! A single observer sees every [`Event`], tagged with the running method.
//! Returning [`Action::StopEarly`] during the Newton phase ends the solve
//! without starting bisection.
//!
//! # Example
//!
//! ```
//! use nlsolve_solvers::fallback::{self, Method};
//!
//! // Newton–Raphson cycles between 0 and 1 on this cubic.
//! let f = |x: f64| x * x * x - 2.0 * x + 2.0;
//! let df = |x: f64| 3.0 * x * x - 2.0;
//! let config = fallback::Config::new(1e-5, 20, 50)?;
//!
//! let solution = fallback::solve_unobserved(&f, &df, [0.0, -2.0], &config).unwrap();
//!
//! assert_eq!(solution.method, Method::Bisection);
//! assert!(f(solution.x).abs() < 1e-5);
//! # Ok::<(), fallback::ConfigError>(())
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
pub use solution::{Method, Solution, Status};

use log::debug;
use nlsolve_core::{Function, Observer};

use crate::{bisection, newton};

/// Finds a root of `f` by Newton–Raphson from `x0`, falling back to
/// bisection on `bracket = [x0, x1]` if Newton–Raphson does not converge.
///
/// # Errors
///
/// Returns [`Error::NeitherConverged`] if both methods run out of
/// iterations, [`Error::IncompatibleFallback`] if Newton–Raphson runs out of
/// iterations and the bracket has no sign change, or [`Error::Function`] if
/// `f` or `df` fails.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    let [x0, _] = bracket;

    let newton_observer = |event: &newton::Event| {
        observer
            .observe(&Event::Newton(*event))
            .map(|action| match action {
                Action::StopEarly => newton::Action::StopEarly,
            })
    };

    match newton::solve(f, df, x0, &config.newton(), newton_observer) {
        Ok(solution) => return Ok(solution.into()),
        Err(newton::Error::NotConverged { x, iters }) => {
            debug!("newton stalled near {x} after {iters} iterations, falling back to bisection");
        }
        Err(newton::Error::Function(source)) => return Err(Error::Function(source)),
    }

    let bisection_observer = |event: &bisection::Event| {
        observer
            .observe(&Event::Bisection(*event))
            .map(|action| match action {
                Action::StopEarly => bisection::Action::StopEarly,
            })
    };

    match bisection::solve(f, bracket, &config.bisection(), bisection_observer) {
        Ok(solution) => Ok(solution.into()),
        Err(bisection::Error::NotConverged { .. }) => Err(Error::NeitherConverged),
        Err(bisection::Error::InvalidBracket { x0, x1 }) => {
            debug!("bracket [{x0}, {x1}] has no sign change, bisection fallback skipped");
            Err(Error::IncompatibleFallback)
        }
        Err(bisection::Error::Function(source)) => Err(Error::Function(source)),
    }
}

/// Runs the fallback solver without observation.
///
/// # Errors
///
/// Returns [`Error::NeitherConverged`] if both methods run out of
/// iterations, [`Error::IncompatibleFallback`] if Newton–Raphson runs out of
/// iterations and the bracket has no sign change, or [`Error::Function`] if
/// `f` or `df` fails.
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, df, bracket, config, ())
}
