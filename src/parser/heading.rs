//! Heading recognition — ordered alternatives, first match wins.
//!
//! A heading is a level-6 Markdown line naming one API symbol:
//!
//! ```text
//! ###### int foo(int x)          function
//! ###### counter (int, 0)        variable
//! ###### Widget                  type
//! ```
//!
//! The forms are tried in the order Function, Variable, Type. The function
//! form's prefix is unbounded, so any identifier directly followed by `(`
//! makes the line a function even when a variable reading would also fit.
//! That precedence is part of the format, not an artifact of the patterns.

use crate::model::{EntryKind, HeadingCandidate};
use regex::Regex;
use std::sync::LazyLock;

/// Level-6 heading marker.
const MARKER: &str = "######";

struct HeadingForm {
    kind: EntryKind,
    /// Must capture `name`; may capture `signature` (defaults to `name`).
    pattern: Regex,
}

impl HeadingForm {
    fn new(kind: EntryKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

static FORMS: LazyLock<[HeadingForm; 3]> = LazyLock::new(|| {
    [
        // return type / qualifiers, then name(args...
        HeadingForm::new(
            EntryKind::Function,
            r"^(?P<signature>.*?(?P<name>\w+)\(.*)$",
        ),
        // name, one whitespace char, then (description...
        HeadingForm::new(
            EntryKind::Variable,
            r"^(?P<name>\w+)\s(?P<signature>\(.*)$",
        ),
        HeadingForm::new(EntryKind::Type, r"^(?P<name>\w+)$"),
    ]
});

/// Try to read `line` as a heading. `line` should already be trimmed;
/// `line_no` is carried into the candidate for diagnostics.
pub fn match_heading(line: &str, line_no: usize) -> Option<HeadingCandidate> {
    let rest = line.strip_prefix(MARKER)?;
    // `#######` is not a level-6 heading
    if rest.starts_with('#') {
        return None;
    }
    let rest = rest.trim_start();

    FORMS.iter().find_map(|form| {
        let caps = form.pattern.captures(rest)?;
        let name = caps.name("name")?.as_str();
        let signature = caps.name("signature").map_or(name, |m| m.as_str());
        Some(HeadingCandidate {
            kind: form.kind,
            name: name.to_string(),
            signature: signature.to_string(),
            line: line_no,
        })
    })
}

/// Whether `line` would be recognized as a heading.
pub fn is_heading(line: &str) -> bool {
    match_heading(line, 0).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(line: &str) -> HeadingCandidate {
        match_heading(line, 1).unwrap()
    }

    #[test]
    fn function_form() {
        let h = heading("###### int foo(int x)");
        assert_eq!(h.kind, EntryKind::Function);
        assert_eq!(h.name, "foo");
        assert_eq!(h.signature, "int foo(int x)");
    }

    #[test]
    fn function_without_prefix() {
        let h = heading("###### foo()");
        assert_eq!(h.kind, EntryKind::Function);
        assert_eq!(h.name, "foo");
        assert_eq!(h.signature, "foo()");
    }

    #[test]
    fn function_name_is_first_identifier_before_paren() {
        let h = heading("###### ByteArray read([filename, ...], (count))");
        assert_eq!(h.name, "read");
        assert_eq!(h.signature, "ByteArray read([filename, ...], (count))");
    }

    #[test]
    fn function_parens_need_not_balance() {
        let h = heading("###### bool exists(path");
        assert_eq!(h.kind, EntryKind::Function);
        assert_eq!(h.name, "exists");
        assert_eq!(h.signature, "bool exists(path");
    }

    #[test]
    fn variable_form() {
        let h = heading("###### counter (int, starts at 0)");
        assert_eq!(h.kind, EntryKind::Variable);
        assert_eq!(h.name, "counter");
        assert_eq!(h.signature, "(int, starts at 0)");
    }

    #[test]
    fn function_wins_over_variable() {
        // Reads as `counter (...)`, but `f(` satisfies the function form first.
        let h = heading("###### counter (int, see f(x))");
        assert_eq!(h.kind, EntryKind::Function);
        assert_eq!(h.name, "f");
        assert_eq!(h.signature, "counter (int, see f(x))");
    }

    #[test]
    fn variable_needs_exactly_one_space() {
        assert!(match_heading("###### counter  (int)", 1).is_none());
    }

    #[test]
    fn type_form() {
        let h = heading("###### Widget");
        assert_eq!(h.kind, EntryKind::Type);
        assert_eq!(h.name, "Widget");
        assert_eq!(h.signature, "Widget");
    }

    #[test]
    fn type_rejects_trailing_text() {
        assert!(match_heading("###### Widget class", 1).is_none());
        assert!(match_heading("###### Widget.", 1).is_none());
    }

    #[test]
    fn marker_whitespace_is_optional() {
        assert_eq!(heading("######Widget").name, "Widget");
        assert_eq!(heading("######\tfoo()").name, "foo");
    }

    #[test]
    fn other_heading_levels_are_prose() {
        assert!(match_heading("##### foo()", 1).is_none());
        assert!(match_heading("####### foo()", 1).is_none());
        assert!(match_heading("# Widget", 1).is_none());
        assert!(match_heading("foo()", 1).is_none());
    }

    #[test]
    fn bare_marker_is_not_a_heading() {
        assert!(match_heading("######", 1).is_none());
        assert!(match_heading("######   ", 1).is_none());
    }

    #[test]
    fn line_number_is_kept() {
        assert_eq!(match_heading("###### Widget", 42).unwrap().line, 42);
    }

    #[test]
    fn is_heading_agrees_with_match() {
        assert!(is_heading("###### Widget"));
        assert!(!is_heading("Just prose."));
    }
}
