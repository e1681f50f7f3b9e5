//! Locate command - find a section in a rendered document

use crate::output;
use anyhow::{Result, anyhow};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use vitae_core::document::{Section, find_section, section_line};

/// Print `<document>:<line>` of the section marker
pub fn run(document: PathBuf, section: Section, json: bool) -> Result<()> {
    let text = fs::read_to_string(&document)
        .map_err(|e| anyhow!("Failed to read {}: {}", document.display(), e))?;

    let not_found = || {
        anyhow!(
            "section '{}' not found in {}",
            section.name(),
            document.display()
        )
    };
    let offset = find_section(&text, section).ok_or_else(not_found)?;
    let line = section_line(&text, section).ok_or_else(not_found)?;

    if json {
        let report = json!({
            "document": document.display().to_string(),
            "section": section.name(),
            "marker": section.marker(),
            "line": line,
            "offset": offset,
        });
        output::print_json(&serde_json::to_string_pretty(&report)?)?;
    } else {
        println!("{}:{}", document.display(), line);
    }

    Ok(())
}
