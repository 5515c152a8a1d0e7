use serde::{Deserialize, Serialize};
use std::fmt;

/// Board side a component is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "Top")]
    Top,
    #[serde(rename = "BTM")]
    Bottom,
}

impl Side {
    /// Literal string written to the spreadsheet.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Bottom => "BTM",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which shape rule recognised a designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `D` followed by digits only, e.g. "D04".
    DNumeric,
    /// `U` followed by digits only, e.g. "U12".
    UNumeric,
    /// Uppercase letter followed by uppercase letters, digits or underscores,
    /// e.g. "FL13_14_85".
    Complex,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::DNumeric => write!(f, "D+digits"),
            PatternKind::UNumeric => write!(f, "U+digits"),
            PatternKind::Complex => write!(f, "complex"),
        }
    }
}

/// Which extraction stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    TokenSplit,
    RegexFallback,
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMethod::TokenSplit => write!(f, "token split"),
            ExtractionMethod::RegexFallback => write!(f, "regex"),
        }
    }
}

/// One recognised reference designator occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntry {
    pub designator: String,
    pub side: Side,
    /// 1-based line index in the extracted text.
    pub source_line: usize,
    pub pattern_kind: PatternKind,
    pub method: ExtractionMethod,
}
