use refdes_core::error::RefDesError;
use refdes_core::extraction::Backend;
use refdes_core::{RunOutcome, RunRequest, RunStatus};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    backend: Backend,
    output_format: &str,
    out: Option<PathBuf>,
    preview: usize,
) -> Result<RunStatus, RefDesError> {
    let request = RunRequest {
        input: input_file,
        output: out,
    };

    // Only spawn/probe a backend when there is something to read.
    let outcome = match request.input {
        Some(_) => {
            let extractor = backend.extractor();
            log::info!("using {} backend", extractor.backend_name());
            refdes_core::run(&request, extractor.as_ref())?
        }
        None => RunOutcome::NoFileSelected,
    };

    match output_format {
        "json" => output::json::print_outcome(&outcome)?,
        _ => output::table::print_outcome(&outcome, preview),
    }

    Ok(outcome.status())
}
