//! Check command - validate a layout template

use crate::output;
use anyhow::{Result, bail};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};
use vitae_core::document::{Layout, Section, find_section};
use vitae_core::template::{Template, TemplateError};

/// Compile a template strictly and report errors and missing section markers
///
/// # Exit Code
///
/// Exits 1 when the template has errors. Missing markers are warnings only.
pub fn run(template: PathBuf, json: bool) -> Result<()> {
    let layout = Layout::from_file(&template)?;
    let result = Template::compile(&layout.template).map(|_| ());
    let missing: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|section| find_section(&layout.template, *section).is_none())
        .collect();

    if json {
        render_json(&template, &result, &missing)?;
    } else {
        render_human(&template, &result, &missing);
    }

    if result.is_err() {
        bail!("template '{}' is invalid", template.display());
    }
    Ok(())
}

fn render_json(
    template: &Path,
    result: &std::result::Result<(), TemplateError>,
    missing: &[Section],
) -> Result<()> {
    let error = match result {
        Ok(()) => serde_json::Value::Null,
        Err(e) => json!({
            "message": e.to_string(),
            "line": e.line(),
        }),
    };

    let report = json!({
        "template": template.display().to_string(),
        "valid": result.is_ok(),
        "error": error,
        "missing_markers": missing.iter().map(|s| s.name()).collect::<Vec<_>>(),
    });

    output::print_json(&serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn render_human(
    template: &Path,
    result: &std::result::Result<(), TemplateError>,
    missing: &[Section],
) {
    for section in missing {
        println!(
            "{} missing {} marker: {}",
            "⚠".yellow().bold(),
            section.name(),
            section.marker()
        );
    }

    match result {
        Ok(()) => println!("{} {} is valid", "✓".green().bold(), template.display()),
        Err(e) => println!(
            "{} {}:{}: {}",
            "✗".red().bold(),
            template.display(),
            e.line(),
            e
        ),
    }
}
