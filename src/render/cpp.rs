//! C++ renderer — a header that feeds every entry to a host callback.
//!
//! The generated function template is included by the host and called once
//! at startup with whatever registers documentation there:
//!
//! ```text
//! template <typename AddDocumentationCallback>
//! void addDocumentation(AddDocumentationCallback addDocumentation)
//! {
//!     addDocumentation("name", "signature", "description");
//! }
//! ```

use crate::model::ApiEntry;
use crate::render::Renderer;

pub struct CppRenderer;

const GENERATOR: &str = env!("CARGO_PKG_NAME");

impl Renderer for CppRenderer {
    fn render(&self, entries: &[ApiEntry], source: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "// Generated by \"{}\" from \"{}\".\n",
            GENERATOR, source
        ));
        out.push_str("template <typename AddDocumentationCallback>\n");
        out.push_str("void addDocumentation(AddDocumentationCallback addDocumentation)\n");
        out.push_str("{\n\n");

        for entry in entries {
            out.push_str(&format!(
                "    addDocumentation(\"{}\", \"{}\", \"{}\");\n",
                cpp_escape(&entry.name),
                cpp_escape(&entry.signature),
                cpp_escape(&entry.description)
            ));
        }

        out.push_str("}\n");
        out
    }

    fn name(&self) -> &str {
        "cpp"
    }
}

/// Escape text for the inside of a C++ narrow string literal.
///
/// Remaining control characters use three-digit octal escapes, which stop
/// after exactly three digits and so cannot swallow the next character.
fn cpp_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
