use lazy_static::lazy_static;
use regex::Regex;

use crate::classify::outcome::{Classification, Summary};
use crate::classify::shape::{match_shape, starts_with_number};
use crate::model::{ExtractedEntry, ExtractionMethod, PatternKind, Side};

lazy_static! {
    /// Fallback row pattern: designator, X, Y. Anchored at line start only.
    static ref ROW_RE: Regex = Regex::new(
        r"^\s*(D[0-9]+|U[0-9]+|[A-Z][A-Z0-9_]+)\s+([0-9]+\.?[0-9]*)\s+([0-9]+\.?[0-9]*)"
    )
    .unwrap();
}

/// A designator recognised on a single line, before a side is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub designator: String,
    pub pattern_kind: PatternKind,
    pub method: ExtractionMethod,
}

/// Running Top/Bottom state for one pass.
///
/// Starts on Top and flips to Bottom at the first line containing both
/// "Bottom" and "Assembly". It never flips back.
#[derive(Debug, Clone, Default)]
pub struct SideTracker {
    marker_line: Option<usize>,
}

impl SideTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line. Returns true if it is a marker line, which carries no data.
    pub fn observe(&mut self, line_number: usize, line: &str) -> bool {
        if !is_bottom_marker(line) {
            return false;
        }
        if self.marker_line.is_none() {
            log::info!("Bottom Assembly marker at line {line_number}; following entries are BTM");
            self.marker_line = Some(line_number);
        }
        true
    }

    pub fn side(&self) -> Side {
        if self.marker_line.is_some() {
            Side::Bottom
        } else {
            Side::Top
        }
    }

    pub fn marker_line(&self) -> Option<usize> {
        self.marker_line
    }
}

/// Check whether a line is a Bottom Assembly section marker (case-sensitive).
pub fn is_bottom_marker(line: &str) -> bool {
    line.contains("Bottom") && line.contains("Assembly")
}

/// Classify every line of a document's text.
///
/// Lines are numbered from 1 in the order they appear after splitting on
/// `'\n'`. Entries come out in line order with no deduplication.
pub fn classify_text(text: &str) -> Classification {
    let mut tracker = SideTracker::new();
    let mut entries = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        let line_number = i + 1;

        if tracker.observe(line_number, line) {
            continue;
        }

        if let Some(m) = classify_line(line) {
            let side = tracker.side();
            log::debug!(
                "line {}: {} -> {} [{}] ({})",
                line_number,
                m.designator,
                side,
                m.pattern_kind,
                m.method
            );
            entries.push(ExtractedEntry {
                designator: m.designator,
                side,
                source_line: line_number,
                pattern_kind: m.pattern_kind,
                method: m.method,
            });
        }
    }

    let summary = Summary::from_entries(&entries);
    Classification {
        entries,
        summary,
        marker_line: tracker.marker_line(),
    }
}

/// Try to recognise a designator on one line.
///
/// Stage 1 splits on whitespace; stage 2 runs the fallback regex only when
/// stage 1 found nothing.
pub fn classify_line(line: &str) -> Option<LineMatch> {
    if line.trim().is_empty() {
        return None;
    }
    match_tokens(line).or_else(|| match_regex(line))
}

fn match_tokens(line: &str) -> Option<LineMatch> {
    let mut tokens = line.split_whitespace();
    let (first, x, y) = (tokens.next()?, tokens.next()?, tokens.next()?);

    let pattern_kind = match_shape(first)?;
    if !starts_with_number(x) || !starts_with_number(y) {
        return None;
    }

    Some(LineMatch {
        designator: first.to_string(),
        pattern_kind,
        method: ExtractionMethod::TokenSplit,
    })
}

fn match_regex(line: &str) -> Option<LineMatch> {
    let caps = ROW_RE.captures(line)?;
    let designator = caps.get(1)?.as_str();
    // The capture always satisfies one of the shapes; Complex covers the rest.
    let pattern_kind = match_shape(designator).unwrap_or(PatternKind::Complex);

    Some(LineMatch {
        designator: designator.to_string(),
        pattern_kind,
        method: ExtractionMethod::RegexFallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(c: &Classification) -> Vec<(&str, Side, PatternKind)> {
        c.entries
            .iter()
            .map(|e| (e.designator.as_str(), e.side, e.pattern_kind))
            .collect()
    }

    #[test]
    fn test_tab_separated_d_row() {
        let c = classify_text("D04\t1.250\t3.400\tCu");
        assert_eq!(kinds(&c), vec![("D04", Side::Top, PatternKind::DNumeric)]);
        assert_eq!(c.entries[0].source_line, 1);
        assert_eq!(c.entries[0].method, ExtractionMethod::TokenSplit);
    }

    #[test]
    fn test_bottom_marker_switches_side() {
        let c = classify_text("U1 0.5 0.5\nBottom Assembly\nFL13_14_85 2.0 3.0");
        assert_eq!(
            kinds(&c),
            vec![
                ("U1", Side::Top, PatternKind::UNumeric),
                ("FL13_14_85", Side::Bottom, PatternKind::Complex),
            ]
        );
        assert_eq!(c.entries[1].source_line, 3);
        assert_eq!(c.marker_line, Some(2));
        assert_eq!(c.summary.top, 1);
        assert_eq!(c.summary.bottom, 1);
    }

    #[test]
    fn test_random_text_rejected() {
        assert!(classify_text("random text no numbers").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let c = classify_text("");
        assert!(c.is_empty());
        assert_eq!(c.summary, Summary::default());
        assert_eq!(c.marker_line, None);
    }

    #[test]
    fn test_marker_line_is_never_data() {
        // Would otherwise match as a COMPLEX row.
        let c = classify_text("ASSY 1 2 Bottom Assembly\nD2 1 1");
        assert_eq!(kinds(&c), vec![("D2", Side::Bottom, PatternKind::DNumeric)]);
        assert_eq!(c.marker_line, Some(1));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let c = classify_text("bottom assembly\nD2 1 1");
        assert_eq!(c.entries[0].side, Side::Top);
        assert_eq!(c.marker_line, None);
    }

    #[test]
    fn test_side_never_reverts() {
        let text = "D1 1 1\nBottom Side Assembly\nD2 1 1\nTop Assembly\nD3 1 1";
        let c = classify_text(text);
        let sides: Vec<Side> = c.entries.iter().map(|e| e.side).collect();
        assert_eq!(sides, vec![Side::Top, Side::Bottom, Side::Bottom]);
        assert_eq!(c.marker_line, Some(2));
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let c = classify_text("R5 1 1\nD1 2 2\nR5 3 3");
        let names: Vec<&str> = c.entries.iter().map(|e| e.designator.as_str()).collect();
        assert_eq!(names, vec!["R5", "D1", "R5"]);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let c = classify_text("\n\n   \nU7 10 20");
        assert_eq!(c.entries[0].source_line, 4);
    }

    #[test]
    fn test_fewer_than_three_tokens() {
        assert!(classify_line("D04 1.0").is_none());
        assert!(classify_line("D04").is_none());
    }

    #[test]
    fn test_coordinates_must_start_with_digit() {
        assert!(classify_line("D04 X1.0 2.0").is_none());
        assert!(classify_line("D04 1.0 Y2.0").is_none());
        assert!(classify_line("D04 -1.0 2.0").is_none());
    }

    #[test]
    fn test_coordinate_prefix_is_enough() {
        let m = classify_line("C12 1.5mm 2.0mm Cu").unwrap();
        assert_eq!(m.designator, "C12");
        assert_eq!(m.pattern_kind, PatternKind::Complex);
    }

    #[test]
    fn test_single_letter_designator_rejected() {
        assert!(classify_line("R 1.0 2.0").is_none());
    }

    #[test]
    fn test_lowercase_designator_rejected() {
        assert!(classify_line("d04 1.0 2.0").is_none());
    }

    #[test]
    fn test_leading_whitespace_allowed() {
        let m = classify_line("     U12     10.0     20.0").unwrap();
        assert_eq!(m.designator, "U12");
        assert_eq!(m.pattern_kind, PatternKind::UNumeric);
        assert_eq!(m.method, ExtractionMethod::TokenSplit);
    }

    #[test]
    fn test_regex_fallback_row_at_line_start() {
        let m = match_regex("  D04   1.0   2.0   Cu").unwrap();
        assert_eq!(m.designator, "D04");
        assert_eq!(m.pattern_kind, PatternKind::DNumeric);
        assert_eq!(m.method, ExtractionMethod::RegexFallback);

        let m = match_regex("U3 12 34").unwrap();
        assert_eq!(m.designator, "U3");
        assert_eq!(m.pattern_kind, PatternKind::UNumeric);
    }

    #[test]
    fn test_regex_alternation_falls_through_to_complex() {
        let m = match_regex("D04X 1.0 2.0").unwrap();
        assert_eq!(m.designator, "D04X");
        assert_eq!(m.pattern_kind, PatternKind::Complex);
    }

    #[test]
    fn test_regex_ignores_designators_mid_line() {
        assert!(match_regex("Ref D04 1.0 2.0").is_none());
        assert!(match_regex("pos=U3 12 34").is_none());
        assert!(classify_line("Ref D04 1.0 2.0").is_none());
        assert!(classify_line("TOTAL COUNT 12 3").is_none());
        assert!(classify_line("Page 3 of 12 REV 1 2").is_none());
    }

    #[test]
    fn test_page_footer_is_not_a_row() {
        let c = classify_text("Page 3 of 12 REV 1 2\nD1 1 1");
        let names: Vec<&str> = c.entries.iter().map(|e| e.designator.as_str()).collect();
        assert_eq!(names, vec!["D1"]);
        assert_eq!(c.entries[0].source_line, 2);
    }

    #[test]
    fn test_regex_needs_two_numbers() {
        assert!(match_regex("see D04 at 1.0").is_none());
        assert!(classify_line("see D04 at 1.0").is_none());
    }

    #[test]
    fn test_header_rows_rejected() {
        assert!(classify_line("Ref Des    X    Y    Layer").is_none());
        assert!(classify_line("REFDES X Y").is_none());
    }

    #[test]
    fn test_idempotent() {
        let text = "D1 1 1\nU2 2 2\nBottom Assembly\nFL1_2 3 3\nnoise";
        assert_eq!(classify_text(text), classify_text(text));
    }
}
