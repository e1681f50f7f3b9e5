//! Template module - Logic-less text substitution for LaTeX documents
//!
//! Templates are plain LaTeX sources with `{{...}}` tags. Rendering never
//! evaluates LaTeX; the template author is responsible for producing valid
//! markup, the engine only guarantees that substituted values cannot break it.
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ key }}`, nested access `{{a.b}}`, current
//!   list element `{{.}}`, list size `{{items.length}}`. Values are escaped.
//! - Blocks: `{{#key}}...{{/key}}` renders once when `key` is truthy, once per
//!   element when it is a list, and with the table in scope when it is a table.
//! - Inverted blocks: `{{^key}}...{{/key}}` render when `key` is falsy or absent.
//! - Comments: `{{! anything }}`.
//!
//! Backslashes have no template meaning. In a run of three or more `{` the tag
//! starts at the last `{{`, so `\textbf{{{name}}}` is `\textbf{` + tag + `}`.
//! A block, close or comment tag alone on its line removes the whole line.

pub mod engine;
pub mod error;

pub use engine::{render, Template, TemplateContext, TemplateEngine, MAX_NESTING_DEPTH};
pub use error::TemplateError;
