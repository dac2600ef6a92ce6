//! Output formatting for CLI commands.

use std::fmt::Display;

use serde::Serialize;

use crate::cli::args::{CinelabArgs, OutputFormat};
use crate::error::Result;

/// Print a result in the format selected on the command line.
///
/// Human output uses the type's `Display` rendering; JSON output its serde
/// representation.
pub fn output_result<T: Serialize + Display>(result: &T, args: &CinelabArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{result}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}
