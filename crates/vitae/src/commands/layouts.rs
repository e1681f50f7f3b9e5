//! Layouts command - list builtin and user layouts

use crate::context::Context;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use vitae_core::document::{DEFAULT_LAYOUT, LAYOUT_FILE, builtin_layout_names, user_layout_names};

#[derive(Debug, Serialize)]
struct LayoutEntry {
    name: String,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

/// List layouts by name; a user layout hides the builtin of the same name
pub fn run(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new()?;
    let root = ctx.layout_root();

    let mut entries: Vec<LayoutEntry> = user_layout_names(root)?
        .into_iter()
        .map(|name| LayoutEntry {
            path: Some(root.join("layouts").join(&name).join(LAYOUT_FILE)),
            name,
            source: "user",
        })
        .collect();

    for name in builtin_layout_names() {
        if !entries.iter().any(|entry| entry.name == *name) {
            entries.push(LayoutEntry {
                name: name.to_string(),
                source: "builtin",
                path: None,
            });
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let default = ctx.configured_layout().unwrap_or(DEFAULT_LAYOUT);

    if json {
        let report = json!({
            "default": default,
            "layouts": entries,
        });
        output::print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for entry in &entries {
        let marker = if entry.name == default {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!("{} {} ({})", marker, entry.name, entry.source);
        if verbose {
            if let Some(path) = &entry.path {
                println!("    {}", path.display());
            }
        }
    }

    Ok(())
}
