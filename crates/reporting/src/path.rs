//! Dot-path access to nested prop trees.
//!
//! Widget default props are arbitrary JSON trees; field mappings
//! address individual leaves with dot-separated paths like
//! `data.metric_data.metric_value` or `data.chart_data.0.value`.

use serde_json::{Map, Value};

/// Read the value at a dot-separated path.
///
/// A numeric segment indexes an array, any other segment an object
/// property. A missing or null intermediate yields `None`; the empty
/// path yields the object itself.
pub fn get_by_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(obj);
    }

    let mut current = obj;
    for part in path.split('.') {
        current = match current {
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(part)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write a value at a dot-separated path, returning the updated tree.
///
/// Intermediate containers are created on demand: an array when the
/// next segment is numeric, an object otherwise. A scalar in the way
/// is replaced. The empty path replaces the whole tree with `value`.
pub fn set_by_path(obj: Value, path: &str, value: Value) -> Value {
    if path.is_empty() {
        return value;
    }
    let parts: Vec<&str> = path.split('.').collect();
    set_parts(obj, &parts, value)
}

fn set_parts(obj: Value, parts: &[&str], value: Value) -> Value {
    let part = parts[0];
    let rest = &parts[1..];

    if rest.is_empty() {
        return insert_at(obj, part, value);
    }

    match obj {
        Value::Array(mut items) => match part.parse::<usize>() {
            Ok(idx) => {
                while items.len() <= idx {
                    items.push(Value::Null);
                }
                let child = std::mem::replace(&mut items[idx], Value::Null);
                items[idx] = set_parts(ensure_container(child, rest[0]), rest, value);
                Value::Array(items)
            }
            // Non-numeric segment on an array: start over with an object.
            Err(_) => set_parts(Value::Object(Map::new()), parts, value),
        },
        Value::Object(mut map) => {
            let child = map.remove(part).unwrap_or(Value::Null);
            map.insert(
                part.to_string(),
                set_parts(ensure_container(child, rest[0]), rest, value),
            );
            Value::Object(map)
        }
        _ => set_parts(container_for(part), parts, value),
    }
}

fn insert_at(obj: Value, part: &str, value: Value) -> Value {
    match obj {
        Value::Array(mut items) => match part.parse::<usize>() {
            Ok(idx) => {
                while items.len() <= idx {
                    items.push(Value::Null);
                }
                items[idx] = value;
                Value::Array(items)
            }
            Err(_) => {
                let mut map = Map::new();
                map.insert(part.to_string(), value);
                Value::Object(map)
            }
        },
        Value::Object(mut map) => {
            map.insert(part.to_string(), value);
            Value::Object(map)
        }
        _ => insert_at(container_for(part), part, value),
    }
}

/// Keep an existing container, replace anything else with a fresh one
/// sized to the next path segment.
fn ensure_container(child: Value, next: &str) -> Value {
    match child {
        Value::Object(_) | Value::Array(_) => child,
        _ => container_for(next),
    }
}

fn container_for(segment: &str) -> Value {
    if segment.parse::<usize>().is_ok() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}
