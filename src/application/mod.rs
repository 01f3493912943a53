//! Application layer: input acquisition and orchestration
//!
//! Depends on the domain layer only through the `NumeralConverter` trait.

mod app;
pub mod error;

pub use app::Application;
pub use error::{ApplicationError, ApplicationResult};
