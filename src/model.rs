//! Data model for the extracted API catalogue.

use serde::Serialize;

/// Classification of a documented symbol, decided by which heading form matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Function,
    Variable,
    Type,
}

/// A heading line that matched but has not yet been paired with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    pub kind: EntryKind,
    /// Identifier only (word characters)
    pub name: String,
    /// For types this is the name itself
    pub signature: String,
    /// 1-based line number of the heading in the source document
    pub line: usize,
}

/// A single catalogue record, emitted once per heading + description pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEntry {
    pub kind: EntryKind,
    pub name: String,
    pub signature: String,
    pub description: String,
}

impl ApiEntry {
    pub fn new(candidate: HeadingCandidate, description: &str) -> Self {
        Self {
            kind: candidate.kind,
            name: candidate.name,
            signature: candidate.signature,
            description: description.to_string(),
        }
    }
}

/// Layout problems reported by the extractor in strict mode.
///
/// These never change what is emitted; they only describe headings whose
/// pairing is likely unintended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Heading still waiting for a description at end of input.
    DanglingHeading { line: usize, name: String },
    /// The line consumed as a description is itself a heading.
    HeadingAsDescription {
        line: usize,
        name: String,
        description_line: usize,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::DanglingHeading { line, name } => {
                write!(f, "line {}: heading `{}` has no description", line, name)
            }
            Warning::HeadingAsDescription {
                line,
                name,
                description_line,
            } => write!(
                f,
                "line {}: heading `{}` takes the heading on line {} as its description",
                line, name, description_line
            ),
        }
    }
}
