pub mod engine;
pub mod outcome;
pub mod shape;

pub use engine::{classify_line, classify_text, LineMatch, SideTracker};
pub use outcome::{Classification, Summary};
