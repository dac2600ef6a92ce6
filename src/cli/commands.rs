//! CLI command execution.

use log::info;

use crate::cli::args::{CinelabArgs, ClassifyArgs, Command, NormalizeArgs, StatsArgs};
use crate::classify::run_classification;
use crate::error::Result;
use crate::io::{read_records, write_records};
use crate::normalize::{NormalizeSummary, Normalizer};
use crate::record::MovieRecord;
use crate::stats;

use super::output::output_result;

/// Execute the parsed command.
pub fn execute_command(args: CinelabArgs) -> Result<()> {
    match args.command.clone() {
        Command::Normalize(cmd) => execute_normalize(&cmd, &args),
        Command::Stats(cmd) => execute_stats(&cmd, &args),
        Command::Classify(cmd) => execute_classify(&cmd, &args),
    }
}

/// Load the input file and run it through the normalizer.
fn load_normalized(
    input: &std::path::Path,
) -> Result<(Vec<MovieRecord>, NormalizeSummary)> {
    let raw = read_records(input)?;
    info!("read {} raw records from {}", raw.len(), input.display());
    Ok(Normalizer::new().normalize(&raw))
}

fn execute_normalize(cmd: &NormalizeArgs, args: &CinelabArgs) -> Result<()> {
    let (records, summary) = load_normalized(&cmd.input)?;
    if let Some(output) = &cmd.output {
        write_records(output, &records)?;
        info!("wrote {} normalized records to {}", records.len(), output.display());
    }
    output_result(&summary, args)
}

fn execute_stats(cmd: &StatsArgs, args: &CinelabArgs) -> Result<()> {
    let (records, summary) = load_normalized(&cmd.input)?;
    info!(
        "normalized {} of {} records",
        summary.kept_records, summary.input_records
    );
    let dataset_stats = stats::compute(&records, cmd.top);
    output_result(&dataset_stats, args)
}

fn execute_classify(cmd: &ClassifyArgs, args: &CinelabArgs) -> Result<()> {
    let (records, summary) = load_normalized(&cmd.input)?;
    info!(
        "normalized {} of {} records ({} dropped)",
        summary.kept_records,
        summary.input_records,
        summary.dropped()
    );
    // Train and evaluate first so a failed run writes nothing.
    let outcome = run_classification(records.clone(), &cmd.to_config())?;
    if let Some(output) = &cmd.output {
        write_records(output, &records)?;
        info!("wrote {} normalized records to {}", records.len(), output.display());
    }
    output_result(&outcome, args)
}
