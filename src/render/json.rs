//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the catalogue directly, including each entry's kind.

use crate::model::ApiEntry;
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Catalogue<'a> {
    source: &'a str,
    entries: &'a [ApiEntry],
}

impl Renderer for JsonRenderer {
    fn render(&self, entries: &[ApiEntry], source: &str) -> String {
        let catalogue = Catalogue { source, entries };
        // Plain strings and enums only; serialization cannot fail.
        let mut out = serde_json::to_string_pretty(&catalogue).unwrap_or_default();
        out.push('\n');
        out
    }

    fn name(&self) -> &str {
        "json"
    }
}
