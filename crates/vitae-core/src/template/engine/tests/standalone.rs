//! Standalone tag line removal

use super::helpers::{context_from, simple_context};
use super::*;

#[test]
fn test_standalone_section_lines_removed() {
    let context = simple_context();
    assert_eq!(
        render("{{#enabled}}\nyes\n{{/enabled}}\n", &context),
        "yes\n"
    );
}

#[test]
fn test_standalone_indented_tags() {
    let context = simple_context();
    assert_eq!(
        render("  {{#enabled}}\n  yes\n\t{{/enabled}}  \nend", &context),
        "  yes\nend"
    );
}

#[test]
fn test_standalone_false_section_leaves_no_blank_line() {
    let context = simple_context();
    assert_eq!(
        render("a\n{{#disabled}}\nno\n{{/disabled}}\nb", &context),
        "a\nb"
    );
}

#[test]
fn test_standalone_crlf() {
    let context = simple_context();
    assert_eq!(
        render("{{#enabled}}\r\nyes\r\n{{/enabled}}\r\n", &context),
        "yes\r\n"
    );
}

#[test]
fn test_standalone_at_end_without_newline() {
    let context = simple_context();
    assert_eq!(render("{{#enabled}}\nx\n{{/enabled}}", &context), "x\n");
}

#[test]
fn test_inline_tags_are_not_standalone() {
    let context = simple_context();
    assert_eq!(
        render("x {{#enabled}}y{{/enabled}} z\n", &context),
        "x y z\n"
    );
}

#[test]
fn test_placeholder_is_never_standalone() {
    let context = simple_context();
    assert_eq!(render("  {{title}}\n", &context), "  My Title\n");
}

#[test]
fn test_standalone_comment_line() {
    let context = simple_context();
    assert_eq!(render("a\n  {{! note }}\nb", &context), "a\nb");
}

#[test]
fn test_two_tags_on_one_line_are_not_standalone() {
    let context = simple_context();
    assert_eq!(
        render(
            "{{#enabled}}{{#enabled}}\nx\n{{/enabled}}{{/enabled}}\n",
            &context
        ),
        "\nx\n\n"
    );
}

#[test]
fn test_standalone_loop_lines() {
    let context = context_from(r#"items = ["a", "b"]"#);
    assert_eq!(
        render("List:\n{{#items}}\n- {{.}}\n{{/items}}\nDone", &context),
        "List:\n- a\n- b\nDone"
    );
}

#[test]
fn test_standalone_latex_layout_shape() {
    let context = context_from(
        r#"
[[education]]
institution = "MIT"
"#,
    );
    let template = "\
%-----------EDUCATION-----------
{{#education.length}}
\\section{Education}
  \\resumeSubHeadingListStart
{{#education}}
    \\resumeSubheading{{{institution}}}
{{/education}}
  \\resumeSubHeadingListEnd
{{/education.length}}
";
    let expected = "\
%-----------EDUCATION-----------
\\section{Education}
  \\resumeSubHeadingListStart
    \\resumeSubheading{MIT}
  \\resumeSubHeadingListEnd
";
    assert_eq!(render(template, &context), expected);
}
