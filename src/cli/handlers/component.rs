// src/cli/handlers/component.rs

use anyhow::{Result, anyhow};
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::commons::{GenerateError, Workspace};
use crate::{
    constants::{COMPONENT_EXT, MODULE_EXT},
    core::{target_resolver, templates, version_detector},
    models::{ArtifactKind, FileWriteRequest, ParsedTarget, VersionTag},
};

/// The handler for the default command: `sfc-gen [category:]path/Name`.
pub fn handle(args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    let (command_arg, extra) = args
        .split_first()
        .ok_or_else(|| anyhow!(t!("component.error.missing_target")))?;

    // Everything is validated before anything touches the disk.
    let target = target_resolver::resolve(command_arg)?;
    workspace.require_src_dir()?;

    if !extra.is_empty() {
        workspace.reporter().warn(&format!(
            t!("component.warn.extra_args"),
            args = extra.join(" ")
        ));
    }

    let version = version_detector::resolve_version_tag(
        workspace.root(),
        workspace.fs(),
        workspace.reporter(),
    );

    let component_dir = generate_component(&target, version, workspace)?;

    let reporter = workspace.reporter();
    reporter.plain("");
    reporter.title(t!("component.success.title"));
    reporter.success(&format!(
        t!("component.success.target"),
        target = command_arg.as_str().green()
    ));
    reporter.info(&format!(
        t!("component.success.location"),
        path = workspace.display_path(&component_dir)
    ));
    reporter.hint(match version {
        VersionTag::V2 => t!("component.hint.v2"),
        VersionTag::V3 => t!("component.hint.v3"),
    });

    Ok(())
}

/// Creates the component directory and its files. Returns the directory.
///
/// Never merges into an existing directory: if it exists, nothing is written.
pub fn generate_component(
    target: &ParsedTarget,
    version: VersionTag,
    workspace: &Workspace<'_>,
) -> Result<PathBuf, GenerateError> {
    let component_dir = workspace.src_dir().join(target.relative_dir());

    if workspace.fs().exists(&component_dir) {
        return Err(GenerateError::TargetExists {
            path: workspace.display_path(&component_dir),
        });
    }

    workspace.ensure_dir(&component_dir)?;

    for request in component_requests(target, version, &component_dir) {
        workspace.write(&request)?;
    }

    Ok(component_dir)
}

/// The files of a component: `index.vue`, `test.vue`, plus `page.js` for views.
fn component_requests(
    target: &ParsedTarget,
    version: VersionTag,
    component_dir: &Path,
) -> Vec<FileWriteRequest> {
    let name = target.leaf_name.as_str();

    let mut files = vec![
        (format!("index.{}", COMPONENT_EXT), ArtifactKind::ComponentIndex),
        (format!("test.{}", COMPONENT_EXT), ArtifactKind::ComponentTest),
    ];
    if target.category.has_route_config() {
        files.push((format!("page.{}", MODULE_EXT), ArtifactKind::RouteConfig));
    }

    files
        .into_iter()
        .map(|(file_name, kind)| {
            FileWriteRequest::new(
                component_dir.join(file_name),
                templates::render(kind, name, version),
            )
        })
        .collect()
}
