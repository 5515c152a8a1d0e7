use crate::model::{ExtractedEntry, PatternKind, Side};
use serde::{Deserialize, Serialize};

/// Counts over a list of extracted entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub top: usize,
    pub bottom: usize,
    pub d_numeric: usize,
    pub u_numeric: usize,
    pub complex: usize,
}

impl Summary {
    pub fn from_entries(entries: &[ExtractedEntry]) -> Self {
        let mut summary = Summary {
            total: entries.len(),
            ..Default::default()
        };
        for entry in entries {
            match entry.side {
                Side::Top => summary.top += 1,
                Side::Bottom => summary.bottom += 1,
            }
            match entry.pattern_kind {
                PatternKind::DNumeric => summary.d_numeric += 1,
                PatternKind::UNumeric => summary.u_numeric += 1,
                PatternKind::Complex => summary.complex += 1,
            }
        }
        summary
    }
}

/// Result of one classification pass over a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Entries in line order, duplicates kept.
    pub entries: Vec<ExtractedEntry>,
    pub summary: Summary,
    /// 1-based line of the first Bottom Assembly marker, if one was seen.
    pub marker_line: Option<usize>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExtractionMethod;

    fn entry(designator: &str, side: Side, kind: PatternKind) -> ExtractedEntry {
        ExtractedEntry {
            designator: designator.into(),
            side,
            source_line: 1,
            pattern_kind: kind,
            method: ExtractionMethod::TokenSplit,
        }
    }

    #[test]
    fn test_summary_counts() {
        let entries = vec![
            entry("D1", Side::Top, PatternKind::DNumeric),
            entry("D1", Side::Top, PatternKind::DNumeric),
            entry("U3", Side::Bottom, PatternKind::UNumeric),
            entry("FL13_14_85", Side::Bottom, PatternKind::Complex),
        ];
        let s = Summary::from_entries(&entries);
        assert_eq!(s.total, 4);
        assert_eq!(s.top, 2);
        assert_eq!(s.bottom, 2);
        assert_eq!(s.d_numeric, 2);
        assert_eq!(s.u_numeric, 1);
        assert_eq!(s.complex, 1);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::from_entries(&[]), Summary::default());
    }
}
