//! Boundary validation of the input configuration.
//!
//! Runs once per job, before any frame is resolved.

pub(crate) mod validate;
