//! Helper functions for template rendering

use std::borrow::Cow;
use toml::Value;

/// Resolve a dotted key against the context stack
///
/// The stack is ordered outermost first. The innermost frame that defines the
/// first segment wins; the remaining segments descend from there. `.` is the
/// innermost frame itself, and a trailing `length` on an array yields its
/// element count.
pub(crate) fn resolve_key<'v>(stack: &[&'v Value], key: &str) -> Option<Cow<'v, Value>> {
    if key == "." {
        return stack.last().map(|frame| Cow::Borrowed(*frame));
    }

    let mut segments = key.split('.').peekable();
    let first = segments.next()?;
    let mut current: &'v Value = stack
        .iter()
        .rev()
        .copied()
        .find_map(|frame| frame.as_table()?.get(first))?;

    while let Some(segment) = segments.next() {
        current = match current {
            Value::Table(table) => table.get(segment)?,
            Value::Array(items) if segment == "length" && segments.peek().is_none() => {
                return Some(Cow::Owned(Value::Integer(items.len() as i64)));
            }
            _ => return None,
        };
    }

    Some(Cow::Borrowed(current))
}

/// Truthiness of a resolved value (absent values are falsy)
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Boolean(b) => *b,
        Value::Datetime(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::Table(_) => true,
    }
}

/// Stringify a scalar TOML value for template output
///
/// Arrays and tables have no text form and yield `None`.
pub(crate) fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

/// Convert JSON data into the TOML value model
///
/// `null` has no TOML counterpart: null object members and array elements
/// are dropped, so they resolve as absent.
pub(crate) fn json_to_toml(value: serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(Value::Boolean(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_json::Value::String(s) => Some(Value::String(s)),
        serde_json::Value::Array(items) => Some(Value::Array(
            items.into_iter().filter_map(json_to_toml).collect(),
        )),
        serde_json::Value::Object(members) => {
            let mut table = toml::map::Map::new();
            for (key, member) in members {
                if let Some(member) = json_to_toml(member) {
                    table.insert(key, member);
                }
            }
            Some(Value::Table(table))
        }
    }
}
