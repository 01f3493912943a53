//! Numeral conversion: trait seam and the digit-decomposition converter

use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tally::{tally_markers, POSITIONS};

/// Largest value that can be formatted.
///
/// The glyph set would suffice to represent numbers up to 3999, but the
/// supported range is deliberately capped at 3000.
pub const MAX_NUMERAL: i32 = 3000;

/// Converts an integer into its Roman numeral representation.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait NumeralConverter: Send + Sync {
    /// Format `value` as a Roman numeral.
    ///
    /// `value` must be in the range `1..=3000`.
    fn to_numeral(&self, value: i32) -> DomainResult<String>;
}

/// Canonical converter: decomposes the value digit by digit.
///
/// Each decimal digit expands to the same abstract marker sequence
/// regardless of position; the position then substitutes its own glyphs.
/// One expansion rule therefore serves ones through thousands.
#[derive(Debug, Default, Clone, Copy)]
pub struct TallyNumeralConverter;

impl NumeralConverter for TallyNumeralConverter {
    fn to_numeral(&self, value: i32) -> DomainResult<String> {
        if value <= 0 {
            return Err(DomainError::NonPositive(value));
        }
        if value > MAX_NUMERAL {
            return Err(DomainError::ExceedsRange(value));
        }

        let mut numeral = String::new();
        for position in &POSITIONS {
            for marker in tally_markers(position.digit_of(value)) {
                numeral.push(position.glyph(marker));
            }
        }
        debug!("to_numeral: {} -> {}", value, numeral);
        Ok(numeral)
    }
}
