//! Application shim: picks the number up and hands it to the converter

use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::NumeralConverter;

/// Thin orchestrator around a [`NumeralConverter`].
///
/// Takes the number from an explicit argument when present, otherwise
/// reads it from the given input stream (normally stdin).
pub struct Application {
    converter: Arc<dyn NumeralConverter>,
}

impl Application {
    /// Create a new application with the given converter.
    pub fn new(converter: Arc<dyn NumeralConverter>) -> Self {
        Self { converter }
    }

    /// Format `number`, or the number read from `input` if none is given.
    pub fn run(&self, number: Option<i32>, input: &mut dyn Read) -> ApplicationResult<String> {
        let value = match number {
            Some(value) => value,
            None => Self::read_number(input)?,
        };
        debug!("run: value={}", value);
        Ok(self.converter.to_numeral(value)?)
    }

    /// Read the entire stream and parse it as one integer.
    /// Surrounding whitespace (the trailing newline in particular) is tolerated.
    fn read_number(input: &mut dyn Read) -> ApplicationResult<i32> {
        let mut buffer = String::new();
        input.read_to_string(&mut buffer)?;
        let trimmed = buffer.trim();
        trimmed
            .parse()
            .map_err(|_| ApplicationError::UnparsableInput {
                input: trimmed.to_string(),
            })
    }
}
