//! Root location for scalar models.
//!
//! The crate is organized leaf-first:
//!
//! - [`equation`]: evaluation of a scalar [`Model`] and the [`chord`] solver
//!   that refines a single bracket to a root
//! - [`scan`]: a fixed-step sweep that yields sign-change brackets
//! - [`locate`]: scans an [`Interval`] and refines every bracket it finds
//!
//! [`Model`]: chord_core::Model
//! [`chord`]: equation::chord

mod interval;

pub mod equation;
pub mod locate;
pub mod scan;

pub use interval::{Interval, IntervalError};
