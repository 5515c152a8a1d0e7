pub mod lopdf_text;
pub mod pdftotext;

use serde::Serialize;
use std::fmt;
use std::process::Command;
use std::str::FromStr;

use crate::error::RefDesError;
use self::lopdf_text::LopdfExtractor;
use self::pdftotext::PdftotextExtractor;

/// Text content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RefDesError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Full document text, pages joined in order by a single newline.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    pub char_count: usize,
}

impl ExtractedText {
    pub fn from_pages(pages: &[PageContent]) -> Self {
        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let char_count = text.chars().count();
        ExtractedText {
            text,
            page_count: pages.len(),
            char_count,
        }
    }

    /// True when there is nothing but whitespace to classify.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn stats(&self, backend: &str) -> TextStats {
        TextStats {
            backend: backend.to_string(),
            page_count: self.page_count,
            char_count: self.char_count,
        }
    }
}

/// Diagnostic counts reported by the text source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub backend: String,
    pub page_count: usize,
    pub char_count: usize,
}

/// Selectable extraction backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// pdftotext when installed, lopdf otherwise.
    #[default]
    Auto,
    Pdftotext,
    Lopdf,
}

impl Backend {
    pub fn extractor(self) -> Box<dyn PdfExtractor> {
        match self {
            Backend::Pdftotext => Box::new(PdftotextExtractor::new()),
            Backend::Lopdf => Box::new(LopdfExtractor::new()),
            Backend::Auto => {
                if pdftotext_on_path() {
                    Box::new(PdftotextExtractor::new())
                } else {
                    log::warn!("pdftotext not found, falling back to lopdf");
                    Box::new(LopdfExtractor::new())
                }
            }
        }
    }
}

/// Some poppler builds exit non-zero on `-v` but still print the version to stderr.
fn pdftotext_on_path() -> bool {
    Command::new("pdftotext")
        .arg("-v")
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false)
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "pdftotext" | "poppler" => Ok(Backend::Pdftotext),
            "lopdf" => Ok(Backend::Lopdf),
            other => Err(format!(
                "unknown backend '{other}' (expected auto, pdftotext or lopdf)"
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Pdftotext => write!(f, "pdftotext"),
            Backend::Lopdf => write!(f, "lopdf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, text: &str) -> PageContent {
        PageContent {
            page_number: number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_pages_joined_with_single_newline() {
        let extracted = ExtractedText::from_pages(&[page(1, "D1 1 1"), page(2, "U2 2 2")]);
        assert_eq!(extracted.text, "D1 1 1\nU2 2 2");
        assert_eq!(extracted.page_count, 2);
        assert_eq!(extracted.char_count, 13);
    }

    #[test]
    fn test_no_pages_is_blank() {
        let extracted = ExtractedText::from_pages(&[]);
        assert_eq!(extracted.page_count, 0);
        assert!(extracted.is_blank());
    }

    #[test]
    fn test_whitespace_pages_are_blank() {
        let extracted = ExtractedText::from_pages(&[page(1, "  "), page(2, "\t")]);
        assert!(extracted.is_blank());
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("auto".parse::<Backend>(), Ok(Backend::Auto));
        assert_eq!("PDFTOTEXT".parse::<Backend>(), Ok(Backend::Pdftotext));
        assert_eq!("lopdf".parse::<Backend>(), Ok(Backend::Lopdf));
        assert!("pypdf".parse::<Backend>().is_err());
    }
}
