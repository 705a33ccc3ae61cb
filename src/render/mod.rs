//! Renderer module — trait-based format dispatch.

pub mod cpp;
pub mod json;

use crate::model::ApiEntry;
use anyhow::{anyhow, Result};

/// Trait for rendering an extracted catalogue into a specific output format.
pub trait Renderer {
    /// `source` names the documentation file the entries came from.
    fn render(&self, entries: &[ApiEntry], source: &str) -> String;
    fn name(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "cpp" => Ok(Box::new(cpp::CppRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use cpp or json", format)),
    }
}
