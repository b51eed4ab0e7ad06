//! YAML front matter.
//!
//! A note's front matter is a YAML mapping between a `---` line at the very
//! start of the file and the next `---` line.

use serde_json::{Map, Value};

/// The YAML text between the front-matter fences, if the note has any.
pub fn split(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    if rest.starts_with("---") {
        return Some("");
    }
    let close = rest.find("\n---")?;
    Some(&rest[..close])
}

/// Parse the front matter into a JSON-style mapping.
///
/// Returns `Ok(None)` when the note has no front matter. A YAML document
/// that is not a mapping gives an empty map.
pub fn parse(content: &str) -> Result<Option<Map<String, Value>>, serde_yaml::Error> {
    let Some(yaml) = split(content) else {
        return Ok(None);
    };
    if yaml.trim().is_empty() {
        return Ok(Some(Map::new()));
    }

    let value: Value = serde_yaml::from_str(yaml)?;
    Ok(Some(match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }))
}
