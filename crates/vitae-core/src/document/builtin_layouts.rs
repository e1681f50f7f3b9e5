//! Builtin layout definitions

use super::layout::Layout;

/// Name of the layout used when none is configured
pub const DEFAULT_LAYOUT: &str = "classic";

/// Names of all builtin layouts
pub fn builtin_layout_names() -> &'static [&'static str] {
    &["classic", "minimal"]
}

/// Get builtin layout by name
pub fn get_builtin_layout(name: &str) -> Option<Layout> {
    match name {
        "classic" => Some(classic_layout()),
        "minimal" => Some(minimal_layout()),
        _ => None,
    }
}

/// One-page résumé with custom list macros
pub fn classic_layout() -> Layout {
    Layout::new(
        "classic",
        include_str!("../../layouts/classic/resume.tmp.tex"),
    )
}

/// Plain `article` document
fn minimal_layout() -> Layout {
    Layout::new(
        "minimal",
        include_str!("../../layouts/minimal/resume.tmp.tex"),
    )
}
