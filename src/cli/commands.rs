//! Command execution: wires the converter into the application shim

use std::io;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{Application, ApplicationResult};
use crate::cli::args::Cli;
use crate::domain::TallyNumeralConverter;

/// Build the application and run the single formatting command.
#[instrument]
pub fn execute_command(cli: &Cli) -> ApplicationResult<()> {
    debug!("number: {:?}", cli.number);
    let app = Application::new(Arc::new(TallyNumeralConverter));
    let numeral = app.run(cli.number, &mut io::stdin().lock())?;
    println!("{}", numeral);
    Ok(())
}
