// src/core/version_detector.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::{
    constants::{FRAMEWORK_DEPENDENCY, MANIFEST_FILENAME},
    core::manifest::{self, ManifestError},
    models::VersionTag,
    system::{console::Reporter, fs::FileSystem},
};

/// The two dependency sections consulted during detection. `null` counts as absent.
#[derive(Deserialize, Debug, Default)]
struct DependencySections {
    #[serde(default)]
    dependencies: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<HashMap<String, serde_json::Value>>,
}

impl DependencySections {
    /// `dependencies` wins over `devDependencies`. Non-string entries are ignored.
    fn version_of(&self, name: &str) -> Option<&str> {
        string_entry(self.dependencies.as_ref(), name)
            .or_else(|| string_entry(self.dev_dependencies.as_ref(), name))
    }
}

fn string_entry<'a>(
    section: Option<&'a HashMap<String, serde_json::Value>>,
    name: &str,
) -> Option<&'a str> {
    section
        .and_then(|deps| deps.get(name))
        .and_then(serde_json::Value::as_str)
}

/// Detects the framework major version from the text of a `package.json`.
pub fn detect(manifest_text: &str) -> Result<VersionTag, ManifestError> {
    let manifest = manifest::parse(manifest_text)?;
    let sections = DependencySections::deserialize(&manifest)?;

    let raw = sections
        .version_of(FRAMEWORK_DEPENDENCY)
        .ok_or_else(|| ManifestError::MissingDependency {
            name: FRAMEWORK_DEPENDENCY.to_string(),
        })?;

    classify_version(raw)
}

/// Reads `package.json` under `root` and detects the version.
pub fn detect_in(root: &Path, fs: &dyn FileSystem) -> Result<VersionTag, ManifestError> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if !fs.exists(&manifest_path) {
        return Err(ManifestError::NotFound {
            path: manifest_path.display().to_string(),
        });
    }
    let text = fs
        .read_to_string(&manifest_path)
        .map_err(|source| ManifestError::Read {
            path: manifest_path.display().to_string(),
            source,
        })?;
    detect(&text)
}

/// Classifies a dependency version range such as `^2.7.14`, `~3.4.0` or `>= 3`.
///
/// Only the leading range operators are stripped; this is not a semver parser.
pub fn classify_version(raw: &str) -> Result<VersionTag, ManifestError> {
    let stripped = raw
        .trim_start_matches(|c: char| matches!(c, '^' | '~' | '>' | '<' | '=') || c.is_whitespace());
    let major_str = stripped.split('.').next().unwrap_or_default();
    let digits: String = major_str.chars().take_while(char::is_ascii_digit).collect();

    digits
        .parse::<u64>()
        .map(VersionTag::from_major)
        .map_err(|_| ManifestError::UnrecognizedVersion {
            name: FRAMEWORK_DEPENDENCY.to_string(),
            raw: raw.to_string(),
        })
}

/// Detects the version for a generation command. Never fails: any problem falls
/// back to the newest supported version and is reported as a warning.
pub fn resolve_version_tag(root: &Path, fs: &dyn FileSystem, reporter: &dyn Reporter) -> VersionTag {
    match detect_in(root, fs) {
        Ok(tag) => {
            log::debug!("Detected framework version: {}", tag);
            tag
        }
        Err(e) => {
            let fallback = VersionTag::default();
            log::debug!("Version detection failed ({}), using {}", e, fallback);
            reporter.warn(&format!(t!("version.fallback"), reason = e, fallback = fallback));
            fallback
        }
    }
}
