//! Repeated block rendering tests for template engine

use super::helpers::{context_from, nested_context};
use super::*;

#[test]
fn test_render_list_of_tables() {
    let context = nested_context();
    let template = "{{#paper.authors}}{{name}} <{{email}}>; {{/paper.authors}}";
    assert_eq!(
        render(template, &context),
        "John Doe <john@example.com>; Jane Smith <jane@example.com>; "
    );
}

#[test]
fn test_render_list_of_scalars_with_dot() {
    let context = context_from(r#"items = ["a", "b", "c"]"#);
    assert_eq!(render("{{#items}}[{{.}}]{{/items}}", &context), "[a][b][c]");
}

#[test]
fn test_render_list_of_numbers() {
    let context = context_from("numbers = [1, 2, 3]");
    assert_eq!(render("{{#numbers}}{{.}},{{/numbers}}", &context), "1,2,3,");
}

#[test]
fn test_render_empty_list() {
    let context = nested_context();
    assert_eq!(render("before{{#nobody}}x{{/nobody}}after", &context), "beforeafter");
}

#[test]
fn test_render_list_cardinality_and_order() {
    for n in [0usize, 1, 2, 5] {
        let items: Vec<String> = (0..n).map(|i| format!("\"item{}\"", i)).collect();
        let context = context_from(&format!("items = [{}]", items.join(", ")));
        let output = render("{{#items}}<{{.}}>{{/items}}", &context);
        let expected: String = (0..n).map(|i| format!("<item{}>", i)).collect();
        assert_eq!(output, expected);
    }
}

#[test]
fn test_render_nested_loops() {
    let context = context_from(
        r#"
[[groups]]
name = "A"
items = ["1", "2"]

[[groups]]
name = "B"
items = ["3"]
"#,
    );
    let template = "{{#groups}}{{name}}:{{#items}}{{.}}{{/items}};{{/groups}}";
    assert_eq!(render(template, &context), "A:12;B:3;");
}

#[test]
fn test_render_two_entries_three_bullets_each() {
    let context = context_from(
        r#"
[[jobs]]
title = "A"
bullets = ["a1", "a2", "a3"]

[[jobs]]
title = "B"
bullets = ["b1", "b2", "b3"]
"#,
    );
    let template = "{{#jobs}}{{title}}:{{#bullets}}<{{.}}>{{/bullets}}|{{/jobs}}";
    let output = render(template, &context);
    assert_eq!(output, "A:<a1><a2><a3>|B:<b1><b2><b3>|");
    assert_eq!(output.matches('<').count(), 6);
}

#[test]
fn test_render_same_name_at_different_depths() {
    let context = context_from("[a]\na = [1, 2]");
    assert_eq!(
        render("{{#a}}[{{#a}}{{.}}{{/a}}]{{/a}}", &context),
        "[12]"
    );
}

#[test]
fn test_render_element_shadows_root() {
    let context = context_from(
        r#"
name = "root"
[[items]]
name = "inner"
[[items]]
other = "x"
"#,
    );
    // The second element has no `name`, so lookup falls back to the root
    assert_eq!(
        render("{{#items}}{{name}};{{/items}}", &context),
        "inner;root;"
    );
}

#[test]
fn test_render_outer_element_visible_from_inner_loop() {
    let context = context_from(
        r#"
[[jobs]]
company = "Acme"
bullets = ["x", "y"]
"#,
    );
    assert_eq!(
        render("{{#jobs}}{{#bullets}}{{company}}-{{.}} {{/bullets}}{{/jobs}}", &context),
        "Acme-x Acme-y "
    );
}

#[test]
fn test_render_length_inside_loop() {
    let context = context_from(
        r#"
[[jobs]]
bullets = ["x"]
[[jobs]]
bullets = []
"#,
    );
    let template = "{{#jobs}}({{#bullets.length}}has{{/bullets.length}}{{^bullets.length}}none{{/bullets.length}}){{/jobs}}";
    assert_eq!(render(template, &context), "(has)(none)");
}
