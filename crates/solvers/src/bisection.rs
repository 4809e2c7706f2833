//! Bisection for a single equation `f(x) = 0` on a sign-change bracket.
//!
//! # Algorithm
//!
//! The endpoints are checked once, up front: `f(x0) * f(x1)` must not be
//! positive. Each step then evaluates the midpoint `(x0 + x1) / 2` and
//!
//! - returns it if `|f(mid)| < residual_tol`,
//! - replaces `x0` if `f(mid) * f(x0) > 0`,
//! - replaces `x1` if `f(mid) * f(x0) < 0`.
//!
//! When `f(mid) * f(x0)` is exactly zero (an endpoint residual of zero, or an
//! underflowing product) but the midpoint misses the tolerance, neither
//! endpoint moves and the next step evaluates the same midpoint again. Such a
//! solve ends in [`Error::NotConverged`] with the bracket it stalled on.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to end the solve with
//! [`Status::StoppedByObserver`] at the evaluated midpoint.

mod action;
mod bracket;
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

use bracket::{Bracket, Shrink};

/// Finds a root of `f` by bisecting `bracket = [x0, x1]`.
///
/// `f` is called once per endpoint and once per step, so at most
/// `max_iters + 2` times.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f(x0)` and `f(x1)` share a sign,
/// [`Error::NotConverged`] if no midpoint meets the tolerance within the
/// iteration budget, or [`Error::Function`] if `f` fails.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [x0, x1] = bracket;
    let f0 = f.call(x0).map_err(Error::function)?;
    let f1 = f.call(x1).map_err(Error::function)?;
    let mut bracket = Bracket::new(x0, x1, f0, f1)?;

    for iter in 1..=config.max_iters {
        let x = bracket.midpoint();
        let residual = f.call(x).map_err(Error::function)?;

        trace!(
            "bisection iter {iter}: bracket = {:?}, f({x}) = {residual}",
            bracket.as_array()
        );

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("bisection stopped by observer at iter {iter}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                bracket: event.bracket,
                iters: iter,
            });
        }

        if residual.abs() < config.residual_tol {
            debug!("bisection converged to {x} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                bracket: event.bracket,
                iters: iter,
            });
        }

        if bracket.shrink(x, residual) == Shrink::Unchanged {
            debug!("bisection bracket unchanged at iter {iter}: f({x}) * f(x0) has no sign");
        }
    }

    let [x0, x1] = bracket.as_array();
    debug!(
        "bisection failed to converge from [{x0}, {x1}] after {} iterations",
        config.max_iters
    );
    Err(Error::NotConverged {
        x0,
        x1,
        iters: config.max_iters,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f(x0)` and `f(x1)` share a sign,
/// [`Error::NotConverged`] if no midpoint meets the tolerance within the
/// iteration budget, or [`Error::Function`] if `f` fails.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
