//! Block structure: turns the token stream into a tree of nodes
//!
//! Open blocks are kept on a stack, so every `{{/name}}` closes the nearest
//! enclosing `{{#name}}` or `{{^name}}`.

use super::tokenize::{Token, TokenKind, TokenStream};
use crate::template::error::TemplateError;

/// Maximum depth of nested blocks
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parsed template node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Literal text, emitted as is
    Text(String),

    /// {{key}}
    Variable { key: String, line: usize },

    /// {{#key}}...{{/key}} or {{^key}}...{{/key}}
    Section {
        key: String,
        inverted: bool,
        children: Vec<Node>,
        line: usize,
    },
}

/// How malformed block structure is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseMode {
    /// Report the first structural problem
    Strict,
    /// Repair and keep going
    Lenient,
}

/// A block that has been opened but not closed yet
struct OpenBlock {
    key: String,
    inverted: bool,
    line: usize,
    children: Vec<Node>,
}

struct TreeBuilder {
    mode: ParseMode,
    root: Vec<Node>,
    open: Vec<OpenBlock>,
}

impl TreeBuilder {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            root: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Fail in strict mode, log and carry on in lenient mode
    fn problem(&self, err: TemplateError) -> Result<(), TemplateError> {
        match self.mode {
            ParseMode::Strict => Err(err),
            ParseMode::Lenient => {
                log::debug!("Repairing template: {}", err);
                Ok(())
            }
        }
    }

    fn current(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(block) => &mut block.children,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.current().push(Node::Text(text.to_string()));
        }
    }

    fn open_block(&mut self, key: &str, inverted: bool, line: usize) -> Result<(), TemplateError> {
        if key.is_empty() {
            return self.problem(TemplateError::EmptyTag { line });
        }
        if self.open.len() >= MAX_NESTING_DEPTH {
            return self.problem(TemplateError::NestingTooDeep {
                max_depth: MAX_NESTING_DEPTH,
                line,
            });
        }
        self.open.push(OpenBlock {
            key: key.to_string(),
            inverted,
            line,
            children: Vec::new(),
        });
        Ok(())
    }

    /// Pop the innermost open block into its parent
    fn close_innermost(&mut self) {
        if let Some(block) = self.open.pop() {
            let node = Node::Section {
                key: block.key,
                inverted: block.inverted,
                children: block.children,
                line: block.line,
            };
            self.current().push(node);
        }
    }

    fn close_block(&mut self, key: &str, line: usize) -> Result<(), TemplateError> {
        if key.is_empty() {
            return self.problem(TemplateError::EmptyTag { line });
        }

        let Some(innermost) = self.open.last() else {
            return self.problem(TemplateError::UnexpectedClose {
                name: key.to_string(),
                line,
            });
        };

        if innermost.key == key {
            self.close_innermost();
            return Ok(());
        }

        let expected = innermost.key.clone();
        let target = self.open.iter().rposition(|block| block.key == key);
        self.problem(TemplateError::MismatchedClose {
            expected,
            found: key.to_string(),
            line,
        })?;

        // Lenient: a close naming an outer block closes everything inside it
        if let Some(depth) = target {
            while self.open.len() > depth {
                self.close_innermost();
            }
        }
        Ok(())
    }

    fn push_token(&mut self, token: &Token) -> Result<(), TemplateError> {
        match &token.kind {
            TokenKind::Placeholder { key } => {
                if key.is_empty() {
                    return self.problem(TemplateError::EmptyTag { line: token.line });
                }
                let node = Node::Variable {
                    key: key.clone(),
                    line: token.line,
                };
                self.current().push(node);
                Ok(())
            }
            TokenKind::SectionOpen { key, inverted } => {
                self.open_block(key, *inverted, token.line)
            }
            TokenKind::SectionClose { key } => self.close_block(key, token.line),
            TokenKind::Comment | TokenKind::Literal => Ok(()),
        }
    }

    fn finish(mut self) -> Result<Vec<Node>, TemplateError> {
        if let Some(block) = self.open.last() {
            self.problem(TemplateError::UnclosedSection {
                name: block.key.clone(),
                line: block.line,
            })?;
        }
        while !self.open.is_empty() {
            self.close_innermost();
        }
        Ok(self.root)
    }
}

/// Byte range of the line around a standalone tag, if the tag is one
///
/// A block or comment tag is standalone when only spaces and tabs precede it
/// on its line and only whitespace follows it up to the line break.
pub(crate) fn standalone_span(source: &str, token: &Token) -> Option<(usize, usize)> {
    if !token.is_standalone_candidate() {
        return None;
    }

    let line_start = source[..token.start].rfind('\n').map_or(0, |nl| nl + 1);
    let before = &source[line_start..token.start];
    if !before.bytes().all(|b| b == b' ' || b == b'\t') {
        return None;
    }

    let rest = &source[token.end()..];
    let line_end = match rest.find('\n') {
        Some(nl) => token.end() + nl + 1,
        None => source.len(),
    };
    let after = &source[token.end()..line_end];
    if !after.bytes().all(|b| b.is_ascii_whitespace()) {
        return None;
    }

    Some((line_start, line_end))
}

/// Parse a template into a node tree
pub(crate) fn parse(source: &str, mode: ParseMode) -> Result<Vec<Node>, TemplateError> {
    let mut stream = TokenStream::new(source);
    let tokens: Vec<Token> = stream
        .by_ref()
        .filter(|token| token.kind != TokenKind::Literal)
        .collect();

    if let Some((_, line)) = stream.unclosed_tag() {
        if mode == ParseMode::Strict {
            return Err(TemplateError::UnclosedTag { line });
        }
        log::debug!("Keeping unterminated '{{{{' at line {} as text", line);
    }

    let mut builder = TreeBuilder::new(mode);
    let mut cursor = 0;

    for token in &tokens {
        match standalone_span(source, token) {
            Some((line_start, line_end)) if line_start >= cursor => {
                builder.push_text(&source[cursor..line_start]);
                cursor = line_end;
            }
            _ => {
                builder.push_text(&source[cursor..token.start]);
                cursor = token.end();
            }
        }
        builder.push_token(token)?;
    }

    builder.push_text(&source[cursor..]);
    builder.finish()
}
