//! Shared test helpers for template engine tests

use crate::template::engine::TemplateContext;
use toml::{toml, Value};

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    let data = toml! {
        title = "My Title"
        count = 42
        price = 9.99
        enabled = true
        disabled = false
        empty = ""
        zero = 0
        date = 2026-01-15
    };
    TemplateContext::new(Value::Table(data))
}

/// Create a nested test context with arrays and tables
pub(super) fn nested_context() -> TemplateContext {
    let data = toml! {
        label = "Root"
        nobody = []

        [paper]
        title = "Research Paper"
        language = "en"

        [[paper.authors]]
        name = "John Doe"
        email = "john@example.com"

        [[paper.authors]]
        name = "Jane Smith"
        email = "jane@example.com"
    };
    TemplateContext::new(Value::Table(data))
}

/// Build a context from an inline TOML document
pub(super) fn context_from(document: &str) -> TemplateContext {
    let data: Value = toml::from_str(document).unwrap();
    TemplateContext::new(data)
}
