use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::RefDesError;
use crate::model::ExtractedEntry;
use crate::sink::HEADER;

/// Write entries as a two-column workbook (`Ref Des`, `Top/BTM`).
///
/// The workbook is rendered in memory and moved into place from a temp file
/// in the target directory, so `target` is either complete or untouched.
pub fn write_xlsx(entries: &[ExtractedEntry], target: &Path) -> Result<(), RefDesError> {
    let write_err = |reason: String| RefDesError::Write {
        path: target.to_path_buf(),
        reason,
    };

    let bytes = render_workbook(entries).map_err(|e| write_err(e.to_string()))?;

    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmpfile = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    tmpfile
        .write_all(&bytes)
        .map_err(|e| write_err(e.to_string()))?;
    tmpfile
        .persist(target)
        .map_err(|e| write_err(e.error.to_string()))?;

    log::info!("wrote {} row(s) to {}", entries.len(), target.display());
    Ok(())
}

fn render_workbook(entries: &[ExtractedEntry]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, title) in HEADER.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &entry.designator)?;
        sheet.write_string(row, 1, entry.side.label())?;
    }

    sheet.set_column_width(0, 16.0)?;
    sheet.set_column_width(1, 10.0)?;

    workbook.save_to_buffer()
}
