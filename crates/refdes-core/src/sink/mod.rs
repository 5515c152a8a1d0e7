pub mod xlsx;

use std::path::{Path, PathBuf};

/// Suffix appended to the source file stem for the output workbook.
pub const OUTPUT_SUFFIX: &str = "_RefDes";

/// Header row of the output table.
pub const HEADER: [&str; 2] = ["Ref Des", "Top/BTM"];

/// Default output location: `<dir of source>/<stem>_RefDes.xlsx`.
pub fn output_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".into());
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.xlsx");
    match source.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
