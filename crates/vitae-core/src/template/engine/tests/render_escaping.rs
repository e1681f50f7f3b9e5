//! Escaping of substituted values
//!
//! Values are escaped exactly once; template text is never touched.

use super::helpers::{context_from, simple_context};
use super::*;

#[test]
fn test_render_escapes_values() {
    let context = context_from(r#"text = "50% of $10 & #1_a ~ ^ {x} \\""#);
    assert_eq!(
        render("{{text}}", &context),
        r"50\% of \$10 \& \#1\_a \textasciitilde{} \textasciicircum{} \{x\} \textbackslash{}"
    );
}

#[test]
fn test_render_template_text_is_not_escaped() {
    let context = simple_context();
    let template = r"\textbf{Title} 100\% & \\ {{title}}";
    assert_eq!(
        render(template, &context),
        r"\textbf{Title} 100\% & \\ My Title"
    );
}

#[test]
fn test_render_inside_latex_argument() {
    let context = simple_context();
    assert_eq!(
        render(r"\textbf{{{title}}}", &context),
        r"\textbf{My Title}"
    );
    assert_eq!(
        render(r"\href{mailto:{{title}}}{{{title}}}", &context),
        r"\href{mailto:My Title}{My Title}"
    );
}

#[test]
fn test_render_four_braces() {
    let context = simple_context();
    assert_eq!(render("{{{{title}}}}", &context), "{{My Title}}");
}

#[test]
fn test_render_backslash_before_tag() {
    let context = simple_context();
    assert_eq!(render(r"\{{title}}", &context), r"\My Title");
}

#[test]
fn test_render_values_are_not_reevaluated() {
    let context = context_from(r#"text = "{{title}}"
title = "nope""#);
    assert_eq!(render("{{text}}", &context), r"\{\{title\}\}");
}

#[test]
fn test_render_latex_macro_arguments_stay_literal() {
    let context = simple_context();
    let template = r"\newcommand{\resumeItem}[1]{\item\small{{#1 \vspace{-2pt}}}}";
    assert_eq!(render(template, &context), template);
}

#[test]
fn test_render_literal_tag_next_to_real_tag() {
    let context = simple_context();
    assert_eq!(render("{{a b}} {{title}}", &context), "{{a b}} My Title");
}

#[test]
fn test_render_tag_inside_literal_group() {
    let context = context_from(r#"name = "A&B""#);
    assert_eq!(
        render(r"\item{{\bf {{name}}}}", &context),
        r"\item{{\bf A\&B}}"
    );
    assert_eq!(
        render(r"{{\small {{name}}}} and {{#name}}yes{{/name}}", &context),
        r"{{\small A\&B}} and yes"
    );
}

#[test]
fn test_render_compiled_tag_inside_literal_group() {
    let context = simple_context();
    let template = Template::compile(r"{{\bf {{title}}}}").unwrap();
    assert_eq!(template.render(&context), r"{{\bf My Title}}");
}

#[test]
fn test_render_unicode_passthrough() {
    let context = context_from(r#"name = "Zoë Ñúñez 日本""#);
    assert_eq!(render("— {{name}} —", &context), "— Zoë Ñúñez 日本 —");
}

#[test]
fn test_render_loop_elements_escaped() {
    let context = context_from(r#"items = ["C++ & Rust", "100%"]"#);
    assert_eq!(
        render("{{#items}}[{{.}}]{{/items}}", &context),
        r"[C++ \& Rust][100\%]"
    );
}
