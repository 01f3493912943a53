//! Roman numeral formatting.
//!
//! Layered: `domain` holds the pure conversion logic, `application` the
//! input-acquisition shim, `cli` the argument parsing and dispatch.

pub mod application;
pub mod cli;
pub mod domain;
pub mod util;
