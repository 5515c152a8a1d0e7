use refdes_core::classify::{Classification, Summary};
use refdes_core::model::ExtractedEntry;
use refdes_core::sink::HEADER;
use refdes_core::RunOutcome;

pub fn print_outcome(outcome: &RunOutcome, preview: usize) {
    match outcome {
        RunOutcome::NoFileSelected => {
            println!("No file selected. Pass the path of a placement PDF.");
        }
        RunOutcome::NoTextExtracted { text } => {
            println!(
                "Could not extract any text from the PDF ({} page(s) via {}).",
                text.page_count, text.backend
            );
            println!("The file may be a scanned image; OCR is not supported.");
        }
        RunOutcome::NoMatchesFound { text, .. } => {
            println!(
                "No reference designators found in {} page(s), {} character(s).",
                text.page_count, text.char_count
            );
        }
        RunOutcome::Completed {
            output_path,
            text,
            classification,
        } => {
            println!(
                "Read {} page(s), {} character(s) via {}\n",
                text.page_count, text.char_count, text.backend
            );
            print_summary(&classification.summary, classification.marker_line);
            print_preview(&classification.entries, preview);
            println!("Saved {} row(s) to {}", classification.summary.total, output_path.display());
        }
    }
}

pub fn print_classification(classification: &Classification) {
    if classification.is_empty() {
        println!("No reference designators found.");
        return;
    }

    let width = designator_width(&classification.entries);
    println!(
        "  {:>5}  {:<width$}  {:<7}  {:<9}  Method",
        "Line", HEADER[0], HEADER[1], "Pattern"
    );
    for e in &classification.entries {
        println!(
            "  {:>5}  {:<width$}  {:<7}  {:<9}  {}",
            e.source_line,
            e.designator,
            e.side.label(),
            e.pattern_kind.to_string(),
            e.method
        );
    }
    println!();
    print_summary(&classification.summary, classification.marker_line);
}

fn print_summary(summary: &Summary, marker_line: Option<usize>) {
    println!("  Reference designators: {}", summary.total);
    println!("    Top: {}", summary.top);
    println!("    BTM: {}", summary.bottom);
    match marker_line {
        Some(line) => println!("    (Bottom Assembly marker at line {line})"),
        None => println!("    (no Bottom Assembly marker found)"),
    }
    println!();
    println!("  By pattern:");
    println!("    D+digits: {}", summary.d_numeric);
    println!("    U+digits: {}", summary.u_numeric);
    println!("    complex:  {}", summary.complex);
    println!();
}

fn print_preview(entries: &[ExtractedEntry], limit: usize) {
    if limit == 0 || entries.is_empty() {
        return;
    }

    let width = designator_width(entries);
    println!("  {:<width$}  {}", HEADER[0], HEADER[1]);
    for e in entries.iter().take(limit) {
        println!("  {:<width$}  {}", e.designator, e.side.label());
    }
    if entries.len() > limit {
        println!("  ... and {} more", entries.len() - limit);
    }
    println!();
}

fn designator_width(entries: &[ExtractedEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.designator.len())
        .max()
        .unwrap_or(0)
        .max(HEADER[0].len())
}
