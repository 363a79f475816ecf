//! Numerical solvers for the Pollen framework.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step time integrators that advance an
//!   [`OdeProblem`] from `t = 0` to a horizon, reporting every sample to an
//!   observer
//!
//! [`OdeProblem`]: pollen_core::OdeProblem

pub mod transient;
