//! Reusable observers for the Pollen framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the fixed-step solvers in `pollen-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//! - [`Trajectory`] — records a copy of the state at every sample
//!
//! [`Observer`]: pollen_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trajectory;

pub use trajectory::Trajectory;
