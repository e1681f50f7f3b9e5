//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::escape::push_escaped;
use crate::template::error::TemplateError;
use serde::Serialize;
use std::borrow::Cow;
use toml::Value;

use blocks::{parse, Node, ParseMode};
use helpers::{is_truthy, json_to_toml, resolve_key, stringify_value};

pub use blocks::MAX_NESTING_DEPTH;

/// Template context holding TOML data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from TOML value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Create a context from JSON data (`null` becomes absent)
    pub fn from_json(data: serde_json::Value) -> Self {
        let data = json_to_toml(data).unwrap_or_else(|| Value::Table(toml::map::Map::new()));
        Self { data }
    }

    /// Create a context from any serializable value
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::from_json(serde_json::to_value(value)?))
    }

    /// Get the underlying TOML value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new(Value::Table(toml::map::Map::new()))
    }
}

/// A parsed template, ready to render any number of times
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse a template, rejecting malformed block structure
    ///
    /// # Errors
    ///
    /// Returns the first [`TemplateError`] found, with its line number.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parse(source, ParseMode::Strict)?,
        })
    }

    /// Parse a template, repairing malformed block structure
    ///
    /// Stray close tags are dropped, a close tag naming an outer block closes
    /// the blocks inside it, unclosed blocks run to the end of the template
    /// and an unterminated `{{` stays literal text.
    pub fn compile_lenient(source: &str) -> Self {
        match parse(source, ParseMode::Lenient) {
            Ok(nodes) => Self { nodes },
            Err(err) => {
                // Lenient parsing repairs every problem it reports
                log::warn!("Template kept as plain text: {}", err);
                Self {
                    nodes: vec![Node::Text(source.to_string())],
                }
            }
        }
    }

    /// Render with the given context
    pub fn render(&self, context: &TemplateContext) -> String {
        let mut output = String::new();
        let mut stack = vec![context.data()];
        render_nodes(&self.nodes, &mut stack, &mut output);
        output
    }
}

/// Render a node list against the context stack
fn render_nodes<'v>(nodes: &[Node], stack: &mut Vec<&'v Value>, output: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => output.push_str(text),
            Node::Variable { key, line } => render_variable(key, *line, stack, output),
            Node::Section {
                key,
                inverted: false,
                children,
                ..
            } => render_section(key, children, stack, output),
            Node::Section {
                key,
                inverted: true,
                children,
                ..
            } => {
                let truthy = resolve_key(stack, key).is_some_and(|value| is_truthy(&value));
                if !truthy {
                    render_nodes(children, stack, output);
                }
            }
        }
    }
}

/// Process a regular placeholder ({{key}})
fn render_variable(key: &str, line: usize, stack: &[&Value], output: &mut String) {
    let Some(value) = resolve_key(stack, key) else {
        return;
    };
    match stringify_value(&value) {
        Some(text) => push_escaped(output, &text),
        None => log::debug!(
            "Placeholder '{}' at line {} is not a scalar, rendering nothing",
            key,
            line
        ),
    }
}

/// Process a {{#key}} block: iterate lists, enter tables, test scalars
fn render_section<'v>(
    key: &str,
    children: &[Node],
    stack: &mut Vec<&'v Value>,
    output: &mut String,
) {
    let Some(value) = resolve_key(stack, key) else {
        return;
    };

    match value {
        Cow::Borrowed(Value::Array(items)) => {
            for item in items {
                stack.push(item);
                render_nodes(children, stack, output);
                stack.pop();
            }
        }
        Cow::Borrowed(table) if table.is_table() => {
            stack.push(table);
            render_nodes(children, stack, output);
            stack.pop();
        }
        value => {
            if is_truthy(&value) {
                render_nodes(children, stack, output);
            }
        }
    }
}

/// Template engine for rendering templates with TOML data
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given context
    ///
    /// Never fails: malformed templates are repaired (see
    /// [`Template::compile_lenient`]) and unknown names render as nothing.
    pub fn render(&self, template: &str, context: &TemplateContext) -> String {
        Template::compile_lenient(template).render(context)
    }

    /// Validate a template strictly without rendering it
    pub fn check(&self, template: &str) -> Result<(), TemplateError> {
        Template::compile(template).map(|_| ())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template
pub fn render(template: &str, context: &TemplateContext) -> String {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
