//! LaTeX escaping for user-supplied text
//!
//! Every field value that reaches a rendered document goes through [`escape`]
//! exactly once, at the leaf. The output of `escape` is itself full of
//! reserved characters (`\`, `{`, `}`), so escaping twice corrupts the text.
//!
//! Replacements are looked up per character during a single forward scan of
//! the original string. Characters introduced by a replacement are never
//! revisited.

/// Characters with syntactic meaning in LaTeX body text
pub const RESERVED: [char; 10] = ['\\', '{', '}', '$', '&', '#', '%', '_', '~', '^'];

/// Literal-safe encoding for a reserved character
///
/// Returns `None` for characters that pass through unchanged.
pub fn replacement(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some(r"\textbackslash{}"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '$' => Some(r"\$"),
        '&' => Some(r"\&"),
        '#' => Some(r"\#"),
        '%' => Some(r"\%"),
        '_' => Some(r"\_"),
        '~' => Some(r"\textasciitilde{}"),
        '^' => Some(r"\textasciicircum{}"),
        _ => None,
    }
}

/// Check whether `text` contains any reserved character
pub fn needs_escaping(text: &str) -> bool {
    text.contains(RESERVED)
}

/// Escape `text` for embedding in LaTeX
///
/// Total: the empty string maps to the empty string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append the escaped form of `text` to `out`
pub fn push_escaped(out: &mut String, text: &str) {
    let mut rem = text;
    while let Some(idx) = rem.find(RESERVED) {
        out.push_str(&rem[..idx]);
        // Every reserved char is ASCII, so idx..idx + 1 is a full char
        let c = rem.as_bytes()[idx] as char;
        if let Some(rep) = replacement(c) {
            out.push_str(rep);
        }
        rem = &rem[idx + 1..];
    }
    out.push_str(rem);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_each_reserved_char() {
        let cases = [
            ("\\", r"\textbackslash{}"),
            ("{", r"\{"),
            ("}", r"\}"),
            ("$", r"\$"),
            ("&", r"\&"),
            ("#", r"\#"),
            ("%", r"\%"),
            ("_", r"\_"),
            ("~", r"\textasciitilde{}"),
            ("^", r"\textasciicircum{}"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape(input), expected, "escaping {:?}", input);
        }
    }

    #[test]
    fn test_escape_covers_whole_reserved_set() {
        for c in RESERVED {
            assert!(replacement(c).is_some(), "{:?} has no replacement", c);
        }
    }

    #[test]
    fn test_escape_identity_on_clean_text() {
        let clean = "Jane Doe, B.S. Computer Science (2018 -- 2022) <jane@x.com> é ü 日本";
        assert!(!needs_escaping(clean));
        assert_eq!(escape(clean), clean);
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_backslash_not_compounded() {
        // The braces introduced for `\` must not be escaped again
        assert_eq!(escape(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape(r"\{"), r"\textbackslash{}\{");
    }

    #[test]
    fn test_escape_mixed_sentence() {
        assert_eq!(
            escape("Increased revenue by 20% using C++ & Python"),
            r"Increased revenue by 20\% using C++ \& Python"
        );
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape("50%");
        let twice = escape(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, r"50\textbackslash{}\%");
    }

    #[test]
    fn test_push_escaped_appends() {
        let mut out = String::from("GPA: ");
        push_escaped(&mut out, "3.9/4.0 ~top_5%");
        assert_eq!(out, r"GPA: 3.9/4.0 \textasciitilde{}top\_5\%");
    }

    #[test]
    fn test_escape_multibyte_neighbours() {
        assert_eq!(escape("é&ü"), r"é\&ü");
    }
}
