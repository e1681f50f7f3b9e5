//! Render command - résumé to LaTeX

use crate::context::Context;
use crate::output;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use vitae_core::document::{DEFAULT_LAYOUT, Layout, generate_with, resolve_layout};
use vitae_core::load_resume;

/// Render a résumé
///
/// Layout selection, first match wins:
/// 1. `--template`
/// 2. `--layout` / `VITAE_LAYOUT`
/// 3. `render.template` in vitae.toml
/// 4. `render.layout` in vitae.toml
/// 5. the default layout
///
/// The output path is `--output`, then `render.output`, then stdout.
pub fn run(
    resume_path: PathBuf,
    layout: Option<String>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let ctx = Context::new()?;
    let resume = load_resume(&resume_path)?;
    let layout = select_layout(&ctx, layout.as_deref(), template.as_deref())?;

    if let Err(e) = layout.validate() {
        log::warn!(
            "Layout '{}' is malformed, rendering leniently: {}",
            layout.name,
            e
        );
    }

    let document = generate_with(&layout, &resume);

    let output = output.or_else(|| ctx.project.as_ref().and_then(|p| p.output_path()));
    match output {
        Some(path) => {
            write_document(&path, &document)?;
            println!(
                "{} Rendered '{}' with layout '{}' to {}",
                "✓".green().bold(),
                resume_path.display(),
                layout.name,
                path.display()
            );
        }
        None => output::print_raw(&document)?,
    }

    Ok(())
}

fn select_layout(ctx: &Context, layout: Option<&str>, template: Option<&Path>) -> Result<Layout> {
    if let Some(path) = template {
        return Ok(Layout::from_file(path)?);
    }
    if let Some(name) = layout {
        return Ok(resolve_layout(ctx.layout_root(), name)?);
    }
    if let Some(project) = &ctx.project {
        if let Some(path) = project.template_path() {
            return Ok(Layout::from_file(path)?);
        }
        return Ok(resolve_layout(&project.root, &project.config.render.layout)?);
    }
    Ok(resolve_layout(&ctx.cwd, DEFAULT_LAYOUT)?)
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(path, document).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;

    log::info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
