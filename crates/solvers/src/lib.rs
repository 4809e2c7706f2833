//! Root finders for a single nonlinear equation `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`] — Newton–Raphson iteration using `f` and its derivative
//! - [`bisection`] — interval halving on a sign-change bracket
//! - [`fallback`] — Newton–Raphson first, bisection if it fails to converge
//!
//! All solvers converge on the residual: a root is any `x` with
//! `|f(x)| < residual_tol`. Functions are supplied through the
//! [`Function`](nlsolve_core::Function) trait, and every solver accepts an
//! [`Observer`](nlsolve_core::Observer) that sees each iteration.

pub mod bisection;
pub mod fallback;
pub mod newton;
