//! Download formatting
//!
//! Renders the structured text in the two offered download shapes: a plain
//! `.txt` body and a `.json` document wrapping it under a fixed key.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;

#[derive(Serialize)]
struct JsonExport<'a> {
    structured_content: &'a str,
}

/// Download rendering functionality
pub struct Export;

impl Export {
    /// The `.txt` rendition: the structured text verbatim.
    pub fn to_txt(content: &str) -> String {
        content.to_string()
    }

    /// The `.json` rendition: `{"structured_content": <text>}`, pretty
    /// printed with two-space indentation.
    pub fn to_json(content: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonExport {
            structured_content: content,
        })?)
    }

    /// Write the `.txt` rendition to a file.
    pub fn write_txt(content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, Self::to_txt(content))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Write the `.json` rendition to a file.
    pub fn write_json(content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, Self::to_json(content)?)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
