// src/core/manifest.rs

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::ScriptChange;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("No package.json found at '{path}'.")]
    NotFound { path: String },
    #[error("Could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse package.json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("The top level of package.json is not a JSON object.")]
    NotAnObject,
    #[error("No '{name}' dependency declared in dependencies or devDependencies.")]
    MissingDependency { name: String },
    #[error("Unrecognized '{name}' version '{raw}'.")]
    UnrecognizedVersion { name: String, raw: String },
    #[error("The 'scripts' field of package.json is not an object.")]
    InvalidScripts,
    #[error("Could not write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parses the manifest text, requiring a JSON object at the top level.
pub fn parse(text: &str) -> Result<Value, ManifestError> {
    let manifest: Value = serde_json::from_str(text)?;
    if !manifest.is_object() {
        return Err(ManifestError::NotAnObject);
    }
    Ok(manifest)
}

/// Adds `scripts.<name> = <command>` unless a script with that name already exists.
///
/// Takes the manifest by value and hands back the new one; every other field and
/// the key order are left as they were.
pub fn add_script(
    mut manifest: Value,
    name: &str,
    command: &str,
) -> Result<(Value, ScriptChange), ManifestError> {
    let root = manifest.as_object_mut().ok_or(ManifestError::NotAnObject)?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    // `"scripts": null` is treated like a missing field.
    if scripts.is_null() {
        *scripts = Value::Object(Map::new());
    }
    let scripts = scripts.as_object_mut().ok_or(ManifestError::InvalidScripts)?;

    let change = if scripts.contains_key(name) {
        ScriptChange::AlreadyPresent
    } else {
        scripts.insert(name.to_string(), Value::String(command.to_string()));
        ScriptChange::Added
    };

    Ok((manifest, change))
}

/// Serializes the manifest with 2-space indentation and a trailing newline.
pub fn to_pretty_string(manifest: &Value) -> Result<String, ManifestError> {
    let mut text = serde_json::to_string_pretty(manifest)?;
    text.push('\n');
    Ok(text)
}
