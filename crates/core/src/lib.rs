//! Core traits for the chord root locator.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Model`]: a deterministic callable that maps a typed input to a typed
//!   output, or to a typed error when the input is outside its domain
//! - [`Observer`]: receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
