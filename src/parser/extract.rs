//! Entry extractor — line-by-line state machine pairing headings with descriptions.
//!
//! ```text
//! Idle ──heading──▶ AwaitingDescription ──non-blank──▶ emit, Idle
//!  ▲ │                    │
//!  └─┘ blank / prose      └─ blank: keep waiting
//! ```
//!
//! The line after a heading is taken as its description unconditionally,
//! even when it is another heading. A heading still pending at end of input
//! is dropped. Neither case is an error; strict mode only records them.

use super::heading::{is_heading, match_heading};
use crate::model::{ApiEntry, HeadingCandidate, Warning};
use std::iter::Fuse;

enum ScanState {
    Idle,
    AwaitingDescription(HeadingCandidate),
}

/// Lazy iterator of [`ApiEntry`] over documentation lines.
///
/// Holds at most one pending heading. Once the underlying lines run out it
/// keeps returning `None`.
pub struct Extractor<I> {
    lines: Fuse<I>,
    state: ScanState,
    line_no: usize,
    strict: bool,
    warnings: Vec<Warning>,
}

/// Scan `lines` in document order, yielding one entry per heading + description pair.
pub fn scan<I>(lines: I) -> Extractor<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Extractor {
        lines: lines.into_iter().fuse(),
        state: ScanState::Idle,
        line_no: 0,
        strict: false,
        warnings: Vec::new(),
    }
}

impl<I> Extractor<I> {
    /// Record [`Warning`]s for dangling headings and headings consumed as
    /// descriptions. Output is the same either way.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Warnings recorded so far. Always empty unless strict.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl<I> Iterator for Extractor<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = ApiEntry;

    fn next(&mut self) -> Option<ApiEntry> {
        for raw in self.lines.by_ref() {
            self.line_no += 1;
            let line = raw.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            match std::mem::replace(&mut self.state, ScanState::Idle) {
                ScanState::Idle => {
                    if let Some(candidate) = match_heading(line, self.line_no) {
                        self.state = ScanState::AwaitingDescription(candidate);
                    }
                }
                ScanState::AwaitingDescription(candidate) => {
                    if self.strict && is_heading(line) {
                        self.warnings.push(Warning::HeadingAsDescription {
                            line: candidate.line,
                            name: candidate.name.clone(),
                            description_line: self.line_no,
                        });
                    }
                    return Some(ApiEntry::new(candidate, line));
                }
            }
        }

        if let ScanState::AwaitingDescription(candidate) =
            std::mem::replace(&mut self.state, ScanState::Idle)
        {
            if self.strict {
                self.warnings.push(Warning::DanglingHeading {
                    line: candidate.line,
                    name: candidate.name,
                });
            }
        }
        None
    }
}
