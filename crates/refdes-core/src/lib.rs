pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod sink;

use std::path::{Path, PathBuf};

use classify::Classification;
use error::RefDesError;
use extraction::{ExtractedText, PdfExtractor, TextStats};

pub use classify::classify_text as scan_text;

/// What to process and where to put the result.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Source PDF. `None` means the user picked nothing.
    pub input: Option<PathBuf>,
    /// Overrides the default `<stem>_RefDes.xlsx` next to the input.
    pub output: Option<PathBuf>,
}

/// Terminal state of a run that did not hit an error.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed {
        output_path: PathBuf,
        text: TextStats,
        classification: Classification,
    },
    NoFileSelected,
    NoTextExtracted {
        text: TextStats,
    },
    NoMatchesFound {
        text: TextStats,
        classification: Classification,
    },
}

/// Distinguishable end states, with stable process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    NoFileSelected,
    NoTextExtracted,
    NoMatchesFound,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::NoFileSelected => 2,
            RunStatus::NoTextExtracted => 3,
            RunStatus::NoMatchesFound => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::NoFileSelected => "no_file_selected",
            RunStatus::NoTextExtracted => "no_text_extracted",
            RunStatus::NoMatchesFound => "no_matches_found",
        }
    }
}

impl RunOutcome {
    pub fn status(&self) -> RunStatus {
        match self {
            RunOutcome::Completed { .. } => RunStatus::Completed,
            RunOutcome::NoFileSelected => RunStatus::NoFileSelected,
            RunOutcome::NoTextExtracted { .. } => RunStatus::NoTextExtracted,
            RunOutcome::NoMatchesFound { .. } => RunStatus::NoMatchesFound,
        }
    }
}

/// Main API entry point: PDF in, `<stem>_RefDes.xlsx` out.
///
/// Read failures and backend failures come back as extraction errors; a PDF
/// that yields only whitespace, or text with no designators, is a benign
/// outcome and the spreadsheet is not written.
pub fn run(request: &RunRequest, extractor: &dyn PdfExtractor) -> Result<RunOutcome, RefDesError> {
    let input = match &request.input {
        Some(path) => path,
        None => return Ok(RunOutcome::NoFileSelected),
    };

    let extracted = extract_file(input, extractor)?;
    let text = extracted.stats(extractor.backend_name());
    if extracted.is_blank() {
        return Ok(RunOutcome::NoTextExtracted { text });
    }

    let classification = classify::classify_text(&extracted.text);
    log::info!(
        "found {} reference designator(s): {} Top, {} BTM",
        classification.summary.total,
        classification.summary.top,
        classification.summary.bottom
    );
    if classification.is_empty() {
        return Ok(RunOutcome::NoMatchesFound {
            text,
            classification,
        });
    }

    let output_path = request
        .output
        .clone()
        .unwrap_or_else(|| sink::output_path_for(input));
    sink::xlsx::write_xlsx(&classification.entries, &output_path)?;

    Ok(RunOutcome::Completed {
        output_path,
        text,
        classification,
    })
}

/// Read a PDF from disk and extract its full text.
pub fn extract_file(path: &Path, extractor: &dyn PdfExtractor) -> Result<ExtractedText, RefDesError> {
    let pdf_bytes = std::fs::read(path)
        .map_err(|e| RefDesError::TextExtraction(format!("{}: {e}", path.display())))?;
    let extracted = extract_text(&pdf_bytes, extractor)?;
    log::info!(
        "{}: {} page(s), {} character(s) via {}",
        path.display(),
        extracted.page_count,
        extracted.char_count,
        extractor.backend_name()
    );
    Ok(extracted)
}

/// Extract the full text of a PDF already in memory.
pub fn extract_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ExtractedText, RefDesError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(ExtractedText::from_pages(&pages))
}
