//! Core traits for the nlsolve root finders.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a scalar function `f64 -> f64` that may fail
//! - [`Fallible`] — adapts a closure returning `Result` into a [`Function`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function};
pub use observer::Observer;
