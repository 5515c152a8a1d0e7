use refdes_core::classify::{Classification, Summary};
use refdes_core::error::RefDesError;
use refdes_core::extraction::TextStats;
use refdes_core::model::ExtractedEntry;
use refdes_core::RunOutcome;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RunReport<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a TextStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker_line: Option<usize>,
    entries: &'a [ExtractedEntry],
}

pub fn print_outcome(outcome: &RunOutcome) -> Result<(), RefDesError> {
    let status = outcome.status().as_str();
    let report = match outcome {
        RunOutcome::Completed {
            output_path,
            text,
            classification,
        } => RunReport {
            status,
            output_path: Some(output_path.as_path()),
            text: Some(text),
            summary: Some(&classification.summary),
            marker_line: classification.marker_line,
            entries: &classification.entries,
        },
        RunOutcome::NoFileSelected => RunReport {
            status,
            output_path: None,
            text: None,
            summary: None,
            marker_line: None,
            entries: &[],
        },
        RunOutcome::NoTextExtracted { text } => RunReport {
            status,
            output_path: None,
            text: Some(text),
            summary: None,
            marker_line: None,
            entries: &[],
        },
        RunOutcome::NoMatchesFound {
            text,
            classification,
        } => RunReport {
            status,
            output_path: None,
            text: Some(text),
            summary: Some(&classification.summary),
            marker_line: classification.marker_line,
            entries: &[],
        },
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

pub fn print_classification(classification: &Classification) -> Result<(), RefDesError> {
    let json = serde_json::to_string_pretty(classification)?;
    println!("{json}");
    Ok(())
}
