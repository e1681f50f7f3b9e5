//! Template error types
//!
//! These errors are only produced by strict compilation
//! ([`Template::compile`](super::Template::compile)). Rendering never fails.

use std::fmt;

/// Template compilation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{{#name}}` or `{{^name}}` without a matching `{{/name}}`
    UnclosedSection {
        /// Name of the open block
        name: String,
        /// Line of the opening tag
        line: usize,
    },

    /// `{{/name}}` with no block open at all
    UnexpectedClose {
        /// Name in the close tag
        name: String,
        /// Line of the close tag
        line: usize,
    },

    /// `{{/found}}` while the innermost open block is `expected`
    MismatchedClose {
        /// Name of the innermost open block
        expected: String,
        /// Name in the close tag
        found: String,
        /// Line of the close tag
        line: usize,
    },

    /// `{{}}`, `{{#}}` and friends
    EmptyTag {
        /// Line of the tag
        line: usize,
    },

    /// `{{` never followed by `}}`
    UnclosedTag {
        /// Line where the tag starts
        line: usize,
    },

    /// Blocks nested deeper than the engine accepts
    NestingTooDeep {
        /// Maximum nesting depth
        max_depth: usize,
        /// Line of the offending opening tag
        line: usize,
    },
}

impl TemplateError {
    /// Line number the error refers to
    pub fn line(&self) -> usize {
        match self {
            TemplateError::UnclosedSection { line, .. }
            | TemplateError::UnexpectedClose { line, .. }
            | TemplateError::MismatchedClose { line, .. }
            | TemplateError::EmptyTag { line }
            | TemplateError::UnclosedTag { line }
            | TemplateError::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnclosedSection { name, line } => {
                write!(
                    f,
                    "Unclosed block '{}' opened at line {}. Add {{{{/{}}}}}",
                    name, line, name
                )
            }
            TemplateError::UnexpectedClose { name, line } => {
                write!(
                    f,
                    "Unexpected {{{{/{}}}}} at line {} without matching opening tag",
                    name, line
                )
            }
            TemplateError::MismatchedClose {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Mismatched close tag at line {}: expected {{{{/{}}}}}, found {{{{/{}}}}}",
                    line, expected, found
                )
            }
            TemplateError::EmptyTag { line } => {
                write!(f, "Empty tag at line {}", line)
            }
            TemplateError::UnclosedTag { line } => {
                write!(f, "Unclosed tag at line {}: '{{{{' without '}}}}'", line)
            }
            TemplateError::NestingTooDeep { max_depth, line } => {
                write!(
                    f,
                    "Blocks nested deeper than {} levels at line {}",
                    max_depth, line
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
