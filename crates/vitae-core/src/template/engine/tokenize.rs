//! Tokenization for template engine
//!
//! Provides O(n) tokenization using a state machine.

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// {{key}}, {{nested.key}} or {{.}}
    Placeholder { key: String },

    /// {{#key}} or, when `inverted`, {{^key}}
    SectionOpen { key: String, inverted: bool },

    /// {{/key}}
    SectionClose { key: String },

    /// {{! anything }}
    Comment,

    /// {{...}} whose content is not a tag, kept as literal text
    Literal,
}

/// A single {{...}} token with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Absolute byte position of `{{` in template
    pub start: usize,
    /// Total length in bytes including {{ and }}
    pub length: usize,
    /// Line number where the token starts (for error messages)
    pub line: usize,
}

impl Token {
    /// Byte position just past the closing `}}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Block tags and comments may stand alone on a line
    pub fn is_standalone_candidate(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::SectionOpen { .. } | TokenKind::SectionClose { .. } | TokenKind::Comment
        )
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──{───> SeenLBrace ──{───> InToken ──}───> SeenRBrace ──}───> [Yield Token] → Normal
///   │               │                  │                  │
///   │ (not {)       │ (not {)          │ (not })          │ (not })
///   └──────────────>└─────────────────>└─────────────────>└──────────> InToken
/// ```
///
/// A `{` seen in `InToken` before any content shifts the token start right by
/// one byte, so in `{{{name}}}` the token is the inner `{{name}}` and the outer
/// braces stay literal. LaTeX arguments wrapping a placeholder rely on this.
///
/// A candidate that turns out not to be a tag (`{{\bf {{name}}}}`) is not the
/// end of the story: scanning restarts at the last `{{` inside it, so the
/// inner `{{name}}` is still found.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Normal text scanning
    Normal,

    /// Seen first `{`, checking for second `{`
    SeenLBrace {
        /// Position of the first `{` character
        pos: usize,
    },

    /// Inside `{{...}}`, scanning until `}}`
    InToken {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Line of the opening `{{`
        line: usize,
        /// Position and line of the last `{{` inside the content
        inner: Option<(usize, usize)>,
    },

    /// Seen first `}` inside token, checking for second `}`
    SeenRBrace {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Position of the first `}` character
        rbrace_pos: usize,
        /// Line of the opening `{{`
        line: usize,
        /// Position and line of the last `{{` inside the content
        inner: Option<(usize, usize)>,
    },
}

/// Iterator over tokens in a template string
///
/// # Performance
///
/// - **O(n) guarantee**: Each byte processed at most four times (one
///   reprocess on a failed brace pair, doubled by at most one rescan)
/// - **Rescan once**: Position only moves backward to the last `{{` inside a
///   non-tag candidate; the rescanned span holds no further `{{`, so it is
///   never rescanned again
pub(crate) struct TokenStream<'a> {
    /// Zero-copy byte slice of template text
    bytes: &'a [u8],
    /// Current byte position
    pos: usize,
    /// State machine state
    state: ScanState,
    /// Current line number (for error messages)
    line: usize,
    /// Step count for O(n) protection
    step_count: usize,
    /// Line of a `{{` still open when input ran out
    unclosed: Option<(usize, usize)>,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
            step_count: 0,
            unclosed: None,
        }
    }

    /// Position and line of a trailing `{{` without `}}`, once exhausted
    pub fn unclosed_tag(&self) -> Option<(usize, usize)> {
        self.unclosed
    }

    /// Classify token content into TokenKind
    ///
    /// - `!...` → Comment
    /// - `#key` / `^key` → SectionOpen
    /// - `/key` → SectionClose
    /// - `key` → Placeholder
    ///
    /// Anything whose key is not a valid name is Literal.
    fn classify_content(content: &str) -> TokenKind {
        let trimmed = content.trim();

        if trimmed.starts_with('!') {
            return TokenKind::Comment;
        }

        let (sigil, key) = match trimmed.as_bytes().first() {
            Some(b'#') | Some(b'^') | Some(b'/') => (trimmed.as_bytes()[0], trimmed[1..].trim()),
            _ => (0, trimmed),
        };

        if !key.is_empty() && !is_valid_key(key) {
            return TokenKind::Literal;
        }

        let key = key.to_string();
        match sigil {
            b'#' => TokenKind::SectionOpen {
                key,
                inverted: false,
            },
            b'^' => TokenKind::SectionOpen {
                key,
                inverted: true,
            },
            b'/' => TokenKind::SectionClose { key },
            _ => TokenKind::Placeholder { key },
        }
    }

    /// Check if we should continue iteration (guards for runaway and EOF)
    #[inline]
    fn should_continue(&mut self, max_steps: usize) -> bool {
        self.step_count += 1;
        self.step_count <= max_steps && self.pos < self.bytes.len()
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    /// Process Normal state: scan for opening braces
    fn process_normal_state(&mut self, byte: u8) {
        if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Process SeenLBrace state: check for second brace to start token
    ///
    /// Returns true if position was advanced, false if byte should be reprocessed
    fn process_seen_lbrace(&mut self, byte: u8, lbrace_pos: usize) -> bool {
        if byte == b'{' {
            self.state = ScanState::InToken {
                start: lbrace_pos,
                content_start: self.pos + 1,
                line: self.line,
                inner: None,
            };
            self.pos += 1;
            true
        } else {
            // Just a single {, not a token
            self.state = ScanState::Normal;
            false
        }
    }

    /// Process InToken state: scan for closing braces
    fn process_in_token(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        line: usize,
        inner: Option<(usize, usize)>,
    ) {
        if byte == b'}' {
            self.state = ScanState::SeenRBrace {
                start,
                content_start,
                rbrace_pos: self.pos,
                line,
                inner,
            };
        } else if byte == b'{' && self.pos == content_start {
            // Third brace of a run: the earlier one is literal text
            self.state = ScanState::InToken {
                start: start + 1,
                content_start: content_start + 1,
                line,
                inner,
            };
        } else if byte == b'{' && self.bytes[self.pos - 1] == b'{' {
            self.state = ScanState::InToken {
                start,
                content_start,
                line,
                inner: Some((self.pos - 1, self.line)),
            };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Process SeenRBrace state: check for second brace to complete token
    ///
    /// Returns (Option<Token>, advanced)
    fn process_seen_rbrace(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        rbrace_pos: usize,
        line: usize,
        inner: Option<(usize, usize)>,
    ) -> (Option<Token>, bool) {
        if byte == b'}' {
            let content =
                std::str::from_utf8(&self.bytes[content_start..rbrace_pos]).unwrap_or("");
            let kind = Self::classify_content(content);

            if let (TokenKind::Literal, Some((inner_pos, inner_line))) = (&kind, inner) {
                // Not a tag: rescan from the `{{` nested inside it
                self.pos = inner_pos;
                self.line = inner_line;
                self.state = ScanState::Normal;
                return (None, true);
            }

            let token = Token {
                kind,
                start,
                length: self.pos + 1 - start,
                line,
            };

            self.state = ScanState::Normal;
            self.pos += 1;

            (Some(token), true)
        } else {
            // Just a single } inside content, continue scanning
            self.state = ScanState::InToken {
                start,
                content_start,
                line,
                inner,
            };
            (None, false)
        }
    }

    /// Remember a `{{` left open at end of input
    fn record_unclosed(&mut self) {
        match self.state {
            ScanState::InToken { start, line, .. } | ScanState::SeenRBrace { start, line, .. } => {
                self.unclosed = Some((start, line));
            }
            _ => {}
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        const MAX_STEPS_MULTIPLIER: usize = 4;
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            if !self.should_continue(max_steps) {
                self.record_unclosed();
                return None;
            }

            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state {
                ScanState::Normal => self.process_normal_state(byte),
                ScanState::SeenLBrace { pos } => {
                    if !self.process_seen_lbrace(byte, pos) {
                        continue;
                    }
                }
                ScanState::InToken {
                    start,
                    content_start,
                    line,
                    inner,
                } => self.process_in_token(byte, start, content_start, line, inner),
                ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos,
                    line,
                    inner,
                } => {
                    let (token, advanced) = self.process_seen_rbrace(
                        byte,
                        start,
                        content_start,
                        rbrace_pos,
                        line,
                        inner,
                    );
                    if let Some(token) = token {
                        return Some(token);
                    }
                    if !advanced {
                        continue;
                    }
                }
            }
        }
    }
}

/// Names are dotted paths of `[A-Za-z0-9_-]` segments, or `.` alone
pub(crate) fn is_valid_key(key: &str) -> bool {
    if key == "." {
        return true;
    }
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        })
}

/// Test-only step counter for O(n) performance verification
///
/// Uses thread-local storage to avoid interference between parallel tests.
#[cfg(test)]
pub(crate) mod test_counter {
    use std::cell::Cell;

    thread_local! {
        static TEST_STEP_COUNTER: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn reset() {
        TEST_STEP_COUNTER.with(|c| c.set(0));
    }

    pub(crate) fn get() -> usize {
        TEST_STEP_COUNTER.with(|c| c.get())
    }

    pub(crate) fn inc() {
        TEST_STEP_COUNTER.with(|c| c.set(c.get() + 1));
    }
}
