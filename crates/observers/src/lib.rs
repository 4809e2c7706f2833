//! Reusable observers for the nlsolve root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `nlsolve-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every evaluated point
//! - [`StopAfter`] — stops a solver after a fixed number of events
//!
//! [`Observer`]: nlsolve_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop_after;

pub use history::{History, Record};
pub use stop_after::StopAfter;
