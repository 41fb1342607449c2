// src/cli/handlers/js.rs

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use super::commons::{GenerateError, Workspace};
use crate::{
    constants::{JS_COMMAND_PREFIX, MODULE_EXT},
    core::{target_resolver, templates, version_detector},
    models::{ArtifactKind, FileWriteRequest, VersionTag, WriteOutcome},
};

/// Directory names whose modules are state stores.
const STORE_DIRS: &[&str] = &["store", "stores", "pinia"];

/// Counts of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub skipped: usize,
}

/// The handler for `sfc-gen js:<dir> [name...]`.
pub fn handle(args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    let (command, names) = args
        .split_first()
        .ok_or_else(|| anyhow!(t!("js.error.missing_directory")))?;
    let dir_token = command.strip_prefix(JS_COMMAND_PREFIX).unwrap_or(command);

    let segments = target_resolver::resolve_js_directory(dir_token)?;
    for name in names {
        target_resolver::validate_leaf_name(name)?;
    }
    workspace.require_src_dir()?;

    let summary = generate_modules(dir_token, &segments, names, workspace)?;
    log::debug!("js:{} finished with {:?}", dir_token, summary);

    if summary.skipped > 0 {
        workspace.reporter().hint(&format!(
            t!("js.summary.partial"),
            created = summary.created,
            skipped = summary.skipped
        ));
    }
    Ok(())
}

/// Writes `index.js` (no names) or one `<name>.js` per name into `src/<dir>`.
///
/// Existing files are skipped and the rest of the batch still runs.
pub fn generate_modules(
    dir_token: &str,
    segments: &[String],
    names: &[String],
    workspace: &Workspace<'_>,
) -> Result<BatchSummary, GenerateError> {
    let target_dir: PathBuf = segments
        .iter()
        .fold(workspace.src_dir(), |path, segment| path.join(segment));
    let dir_name = segments.last().map(String::as_str).unwrap_or(dir_token);

    let plan = module_plan(dir_token, dir_name, names);

    // The manifest is only consulted when the output depends on it.
    let version = if plan.iter().any(|(_, kind, _)| kind.is_version_dependent()) {
        version_detector::resolve_version_tag(workspace.root(), workspace.fs(), workspace.reporter())
    } else {
        VersionTag::default()
    };
    if dir_name == "router" {
        workspace
            .reporter()
            .info(&format!(t!("js.info.version"), version = version));
    }

    workspace.ensure_dir(&target_dir)?;

    let mut summary = BatchSummary::default();
    for request in module_requests(&plan, version, &target_dir) {
        match workspace.write(&request)? {
            WriteOutcome::Created => summary.created += 1,
            WriteOutcome::Skipped => summary.skipped += 1,
        }
    }
    Ok(summary)
}

/// `(file stem, kind, template name)` for every file of the batch.
fn module_plan<'n>(dir_token: &'n str, dir_name: &str, names: &'n [String]) -> Vec<(&'n str, ArtifactKind, &'n str)> {
    if names.is_empty() {
        return vec![("index", index_kind(dir_name), dir_token)];
    }
    let kind = entry_kind(dir_name);
    names
        .iter()
        .map(|name| (name.as_str(), kind, name.as_str()))
        .collect()
}

fn module_requests(
    plan: &[(&str, ArtifactKind, &str)],
    version: VersionTag,
    target_dir: &Path,
) -> Vec<FileWriteRequest> {
    plan.iter()
        .map(|(stem, kind, name)| {
            FileWriteRequest::new(
                target_dir.join(format!("{}.{}", stem, MODULE_EXT)),
                templates::render(*kind, name, version),
            )
        })
        .collect()
}

/// Kind of `index.js` for a directory.
fn index_kind(dir_name: &str) -> ArtifactKind {
    match dir_name {
        "router" => ArtifactKind::RouterEntry,
        d if STORE_DIRS.contains(&d) => ArtifactKind::StoreIndex,
        _ => ArtifactKind::GenericModule,
    }
}

/// Kind of a named module for a directory.
fn entry_kind(dir_name: &str) -> ArtifactKind {
    match dir_name {
        "api" => ArtifactKind::ApiModule,
        d if STORE_DIRS.contains(&d) => ArtifactKind::StoreEntry,
        _ => ArtifactKind::GenericModule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{console::RecordingReporter, fs::LocalFileSystem};
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        if let Some(text) = manifest {
            fs::write(dir.path().join("package.json"), text).unwrap();
        }
        dir
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const VUE3: &str = r#"{ "dependencies": { "vue": "^3.4.0" } }"#;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(index_kind("router"), ArtifactKind::RouterEntry);
        assert_eq!(index_kind("stores"), ArtifactKind::StoreIndex);
        assert_eq!(index_kind("pinia"), ArtifactKind::StoreIndex);
        assert_eq!(index_kind("utils"), ArtifactKind::GenericModule);
        assert_eq!(entry_kind("store"), ArtifactKind::StoreEntry);
        assert_eq!(entry_kind("api"), ArtifactKind::ApiModule);
        assert_eq!(entry_kind("utils"), ArtifactKind::GenericModule);
    }

    #[test]
    fn test_router_index() {
        let dir = project(Some(VUE3));
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        handle(args(&["js:router"]), &ws).unwrap();

        let body = fs::read_to_string(dir.path().join("src/router/index.js")).unwrap();
        assert!(body.contains("createWebHistory"));
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn test_store_batch_skips_existing() {
        let dir = project(Some(VUE3));
        let stores = dir.path().join("src").join("stores");
        fs::create_dir_all(&stores).unwrap();
        fs::write(stores.join("user.js"), "// mine").unwrap();
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        let segments = target_resolver::resolve_js_directory("stores").unwrap();
        let summary =
            generate_modules("stores", &segments, &args(&["user", "auknowledge"]), &ws).unwrap();

        assert_eq!(summary, BatchSummary { created: 1, skipped: 1 });
        assert_eq!(fs::read_to_string(stores.join("user.js")).unwrap(), "// mine");
        let auth = fs::read_to_string(stores.join("auknowledge.js")).unwrap();
        assert!(auth.contains("defineStore('auknowledge'"));
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_store_batch_writes_every_name() {
        let dir = project(Some(VUE3));
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        handle(args(&["js:stores", "user", "auknowledge"]), &ws).unwrap();

        let stores = dir.path().join("src").join("stores");
        let user = fs::read_to_string(stores.join("user.js")).unwrap();
        assert!(user.contains("export const useUserStore = defineStore('user'"));
        assert!(stores.join("auknowledge.js").exists());
    }

    #[test]
    fn test_existing_index_is_skipped() {
        let dir = project(Some(VUE3));
        let utils = dir.path().join("src").join("utils");
        fs::create_dir_all(&utils).unwrap();
        fs::write(utils.join("index.js"), "// mine").unwrap();
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        handle(args(&["js:utils"]), &ws).unwrap();

        assert_eq!(fs::read_to_string(utils.join("index.js")).unwrap(), "// mine");
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_api_modules_do_not_need_a_manifest() {
        let dir = project(None);
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        handle(args(&["js:api", "product"]), &ws).unwrap();

        let body = fs::read_to_string(dir.path().join("src/api/product.js")).unwrap();
        assert!(body.contains("export const productApi"));
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn test_store_without_manifest_warns_and_uses_vue3() {
        let dir = project(None);
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        handle(args(&["js:store"]), &ws).unwrap();

        let body = fs::read_to_string(dir.path().join("src/store/index.js")).unwrap();
        assert!(body.contains("createPinia()"));
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_invalid_names_abort_before_writing() {
        let dir = project(Some(VUE3));
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        let result = handle(args(&["js:stores", "user", "bad/name"]), &ws);

        assert!(result.is_err());
        assert!(!dir.path().join("src").join("stores").exists());
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        let dir = project(None);
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        assert!(handle(args(&["js:"]), &ws).is_err());
    }
}
