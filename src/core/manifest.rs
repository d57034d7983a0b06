//! Root dependency manifest patching.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Serializer, Value};

use crate::core::error::{Error, Result};
use crate::utils::io;

/// Append a path-repository entry for `package_path` to the manifest's
/// `repositories` list, creating the list when missing. Entries are
/// appended unconditionally; existing entries and key order are preserved.
///
/// Returns the repository url that was registered.
pub fn register_path_repository(manifest_path: &Path, package_path: &str) -> Result<String> {
    let content = io::read_file(manifest_path, "read manifest")?;

    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|e| Error::manifest_invalid_json(manifest_path.display().to_string(), e))?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| Error::manifest_invalid_value("root", "expected a JSON object"))?;

    let repositories = root
        .entry("repositories")
        .or_insert_with(|| Value::Array(Vec::new()));

    let list = repositories
        .as_array_mut()
        .ok_or_else(|| Error::manifest_invalid_value("repositories", "expected an array"))?;

    let url = format!("./{}", package_path);
    list.push(json!({ "type": "path", "url": url }));

    let serialized = to_pretty_string(&manifest)?;
    io::write_file_atomic(manifest_path, &serialized, "write manifest")?;

    Ok(url)
}

/// Pretty-print with composer's 4-space indentation and a trailing newline.
fn to_pretty_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);

    value.serialize(&mut serializer).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize manifest".to_string()))
    })?;

    let mut out = String::from_utf8(buf).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize manifest".to_string()))
    })?;
    out.push('\n');

    Ok(out)
}
