use refdes_core::error::RefDesError;
use refdes_core::RunStatus;
use std::path::Path;

use crate::output;

pub fn run(text_file: &Path, output_format: &str) -> Result<RunStatus, RefDesError> {
    let text = std::fs::read_to_string(text_file)?;
    let classification = refdes_core::scan_text(&text);

    match output_format {
        "json" => output::json::print_classification(&classification)?,
        _ => output::table::print_classification(&classification),
    }

    if classification.is_empty() {
        Ok(RunStatus::NoMatchesFound)
    } else {
        Ok(RunStatus::Completed)
    }
}
