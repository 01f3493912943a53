//! Domain layer: the numeral conversion logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod converter;
pub mod error;
pub mod tally;

pub use converter::{NumeralConverter, TallyNumeralConverter, MAX_NUMERAL};
pub use error::{DomainError, DomainResult};
pub use tally::{tally_markers, DigitPosition, TallyMarker, POSITIONS};
