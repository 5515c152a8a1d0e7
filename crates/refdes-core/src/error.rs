use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RefDesError {
    #[error("could not read PDF: {0}")]
    TextExtraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux), or use --backend lopdf")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RefDesError {
    /// True for every variant that means the text source produced nothing.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            RefDesError::TextExtraction(_)
                | RefDesError::PdftotextNotFound
                | RefDesError::PdftotextFailed { .. }
        )
    }
}
