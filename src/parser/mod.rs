//! Parser module — heading recognition and the entry extractor built on it.

pub mod extract;
pub mod heading;

pub use extract::scan;
