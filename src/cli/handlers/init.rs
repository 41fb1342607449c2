// src/cli/handlers/init.rs

use anyhow::Result;

use super::commons::Workspace;
use crate::{
    constants::{INIT_SCRIPT_COMMAND, INIT_SCRIPT_NAME},
    core::manifest::{self, ManifestError},
    models::ScriptChange,
};

/// The main handler for the `init` command.
/// Injects the `add` npm script into `package.json`.
pub fn handle(_args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    let change = add_npm_script(workspace)?;
    log::debug!("init finished: {:?}", change);

    let reporter = workspace.reporter();
    reporter.plain("");
    reporter.title(t!("init.next_steps"));
    reporter.plain(&format!(t!("init.example"), script = INIT_SCRIPT_NAME));
    Ok(())
}

/// Read-modify-write of the manifest. Writes only when the script was missing.
pub fn add_npm_script(workspace: &Workspace<'_>) -> Result<ScriptChange, ManifestError> {
    let path = workspace.manifest_path();
    let display = workspace.display_path(&path);

    if !workspace.fs().exists(&path) {
        return Err(ManifestError::NotFound { path: display });
    }
    let text = workspace
        .fs()
        .read_to_string(&path)
        .map_err(|source| ManifestError::Read {
            path: display.clone(),
            source,
        })?;

    let current = manifest::parse(&text)?;
    let (updated, change) = manifest::add_script(current, INIT_SCRIPT_NAME, INIT_SCRIPT_COMMAND)?;

    let reporter = workspace.reporter();
    match change {
        ScriptChange::Added => {
            let new_text = manifest::to_pretty_string(&updated)?;
            workspace
                .fs()
                .overwrite(&path, &new_text)
                .map_err(|source| ManifestError::Write {
                    path: display.clone(),
                    source,
                })?;
            reporter.success(&format!(
                t!("init.script_added"),
                name = INIT_SCRIPT_NAME,
                command = INIT_SCRIPT_COMMAND
            ));
            reporter.info(&format!(t!("init.manifest_updated"), path = display));
        }
        ScriptChange::AlreadyPresent => {
            reporter.warn(&format!(t!("init.script_exists"), name = INIT_SCRIPT_NAME));
        }
    }

    Ok(change)
}
