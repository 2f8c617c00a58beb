use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ToolError};
use crate::model::VocabularyEntry;

/// Default location of the primary bundle, relative to the app checkout.
pub const DATA_FILE: &str = "Data/vocabulary.json";
/// Default location of the asset catalog copy kept in sync with the bundle.
pub const ASSET_FILE: &str = "Assets.xcassets/Vocabulary.dataset/vocabulary.json";

/// Reads a bundle into typed entries. Unknown fields are dropped and missing
/// ones default to empty strings, so older bundles still load.
pub fn read_entries(path: &Path) -> Result<Vec<VocabularyEntry>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Reads a bundle as untyped JSON, failing fatally when the file is absent or
/// the top-level value is not an array.
pub fn read_value(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    let data = fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&data)?;
    match json {
        Value::Array(entries) => Ok(entries),
        other => Err(ToolError::InvalidBundle {
            path: path.to_path_buf(),
            reason: format!("expected a JSON array, found {}", type_name(&other)),
        }),
    }
}

/// Serialises the entries as pretty-printed JSON, creating parent directories
/// as needed. Non-ASCII text is written literally rather than escaped.
pub fn write_entries(path: &Path, entries: &[VocabularyEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json_string = serde_json::to_string_pretty(entries)?;
    fs::write(path, json_string)?;
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
