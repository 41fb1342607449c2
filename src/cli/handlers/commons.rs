// src/cli/handlers/commons.rs

// This module contains the context and helpers shared by every handler.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{
    constants::{MANIFEST_FILENAME, SRC_DIR},
    models::{FileWriteRequest, WriteOutcome, WritePolicy},
    system::{console::Reporter, fs::FileSystem},
};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No 'src' directory found in '{root}'. Run this command from the root of a Vue project.")]
    SrcDirNotFound { root: String },
    #[error("Target already exists: {path}")]
    TargetExists { path: String },
    #[error("Could not create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not write file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Everything a handler needs: the project root and the two I/O collaborators.
pub struct Workspace<'a> {
    root: PathBuf,
    fs: &'a dyn FileSystem,
    reporter: &'a dyn Reporter,
}

impl fmt::Debug for Workspace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace").field("root", &self.root).finish_non_exhaustive()
    }
}

impl<'a> Workspace<'a> {
    pub fn new(root: impl Into<PathBuf>, fs: &'a dyn FileSystem, reporter: &'a dyn Reporter) -> Self {
        Self {
            root: root.into(),
            fs,
            reporter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }

    /// Formats a path relative to the project root for messages.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Fails unless the project has a `src/` directory.
    pub fn require_src_dir(&self) -> Result<(), GenerateError> {
        if self.fs.is_dir(&self.src_dir()) {
            Ok(())
        } else {
            Err(GenerateError::SrcDirNotFound {
                root: self.root.display().to_string(),
            })
        }
    }

    /// Creates `dir` (and parents) when missing, reporting the creation.
    pub fn ensure_dir(&self, dir: &Path) -> Result<(), GenerateError> {
        if self.fs.exists(dir) {
            return Ok(());
        }
        self.fs
            .create_dir_all(dir)
            .map_err(|source| GenerateError::CreateDir {
                path: self.display_path(dir),
                source,
            })?;
        log::debug!("Created directory {}", dir.display());
        self.reporter
            .info(&format!(t!("fs.dir_created"), path = self.display_path(dir)));
        Ok(())
    }

    /// Executes a write request. An existing file is skipped with a warning.
    pub fn write(&self, request: &FileWriteRequest) -> Result<WriteOutcome, GenerateError> {
        let display = self.display_path(&request.path);

        match request.policy {
            WritePolicy::NeverOverwrite => {
                if self.fs.exists(&request.path) {
                    return Ok(self.skip(&display));
                }
                match self.fs.write_new(&request.path, &request.content) {
                    Ok(()) => {}
                    // Created between the check and the write.
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        return Ok(self.skip(&display));
                    }
                    Err(source) => {
                        return Err(GenerateError::WriteFile {
                            path: display,
                            source,
                        });
                    }
                }
            }
        }

        log::debug!("Wrote {} ({} bytes)", request.path.display(), request.content.len());
        self.reporter
            .success(&format!(t!("fs.file_created"), path = display));
        Ok(WriteOutcome::Created)
    }

    fn skip(&self, display: &str) -> WriteOutcome {
        self.reporter
            .warn(&format!(t!("fs.file_skipped"), path = display));
        WriteOutcome::Skipped
    }
}
