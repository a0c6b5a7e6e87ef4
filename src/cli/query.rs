//! Query command implementation.
//!
//! Prints resolved configuration values addressed by dotted field paths,
//! e.g. `docsite query site.title nav.0.link`.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let resolved = serde_json::to_value(config)?;

    let output = match args.paths.as_slice() {
        // No paths: the whole resolved config
        [] => {
            if args.filter_empty {
                filter_empty_values(resolved)
            } else {
                resolved
            }
        }
        // Single path: the bare value
        [path] => {
            let value = lookup(&resolved, path).cloned().unwrap_or(JsonValue::Null);
            if args.filter_empty {
                if is_empty_value(&value) {
                    return Ok(());
                }
                filter_empty_values(value)
            } else {
                value
            }
        }
        // Multiple paths: object keyed by path
        paths => {
            let mut obj = Map::new();
            for path in paths {
                let value = lookup(&resolved, path).cloned().unwrap_or(JsonValue::Null);
                if !args.filter_empty || !is_empty_value(&value) {
                    obj.insert(path.clone(), value);
                }
            }
            JsonValue::Object(obj)
        }
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Walk a dotted path through the resolved config.
///
/// Array elements are addressed by numeric segment (e.g. `sidebar.1.heading`).
fn lookup<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            JsonValue::Object(map) => map.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Check if a JSON value is considered "empty" (null, "", {}, or [])
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

/// Recursively drop empty values from objects.
fn filter_empty_values(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let filtered: Map<String, JsonValue> = map
                .into_iter()
                .map(|(k, v)| (k, filter_empty_values(v)))
                .filter(|(_, v)| !is_empty_value(v))
                .collect();
            JsonValue::Object(filtered)
        }
        JsonValue::Array(items) => {
            JsonValue::Array(items.into_iter().map(filter_empty_values).collect())
        }
        other => other,
    }
}
