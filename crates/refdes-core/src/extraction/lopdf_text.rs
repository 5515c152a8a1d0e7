use lopdf::Document;

use crate::error::RefDesError;
use crate::extraction::{PageContent, PdfExtractor};

/// In-process PDF extraction backend using lopdf.
///
/// Needs no external tools, but lopdf's text ordering follows the content
/// stream rather than the visual layout, so columns may come out ragged.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RefDesError> {
        let document = Document::load_mem(pdf_bytes)
            .map_err(|e| RefDesError::TextExtraction(format!("lopdf could not parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for (index, page_number) in document.get_pages().keys().enumerate() {
            let text = document.extract_text(&[*page_number]).map_err(|e| {
                RefDesError::TextExtraction(format!("lopdf failed on page {page_number}: {e}"))
            })?;
            pages.push(PageContent {
                page_number: index + 1,
                text: text.trim_end_matches('\n').to_string(),
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
