// src/models.rs

use std::fmt;
use std::path::PathBuf;

/// Top-level generation target inside `src/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Views,
    Components,
}

impl Category {
    /// The directory name under `src/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Views => "views",
            Category::Components => "components",
        }
    }

    /// Only page-level components get a route config (`page.js`).
    pub fn has_route_config(self) -> bool {
        matches!(self, Category::Views)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The result of parsing a component command such as `v:admin/Dashboard`.
///
/// `path_segments` always ends with `leaf_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    pub category: Category,
    pub path_segments: Vec<String>,
    pub leaf_name: String,
}

impl ParsedTarget {
    /// The component directory relative to `src/`, e.g. `views/admin/Dashboard`.
    pub fn relative_dir(&self) -> PathBuf {
        let mut path = PathBuf::from(self.category.dir_name());
        path.extend(&self.path_segments);
        path
    }
}

/// Major version class of the framework found in the project manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionTag {
    V2,
    #[default]
    V3,
}

impl VersionTag {
    /// Classifies a parsed major version number.
    pub fn from_major(major: u64) -> Self {
        if major >= 3 { VersionTag::V3 } else { VersionTag::V2 }
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionTag::V2 => f.write_str("Vue 2"),
            VersionTag::V3 => f.write_str("Vue 3"),
        }
    }
}

/// Every template variant the generators can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    ComponentIndex,
    ComponentTest,
    RouteConfig,
    RouterEntry,
    StoreEntry,
    StoreIndex,
    ApiModule,
    GenericModule,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 8] = [
        ArtifactKind::ComponentIndex,
        ArtifactKind::ComponentTest,
        ArtifactKind::RouteConfig,
        ArtifactKind::RouterEntry,
        ArtifactKind::StoreEntry,
        ArtifactKind::StoreIndex,
        ArtifactKind::ApiModule,
        ArtifactKind::GenericModule,
    ];

    /// Whether the body differs between Vue 2 and Vue 3.
    pub fn is_version_dependent(self) -> bool {
        !matches!(
            self,
            ArtifactKind::RouteConfig | ArtifactKind::ApiModule | ArtifactKind::GenericModule
        )
    }
}

/// How a write behaves when the target already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Leave the existing file untouched and report a skip.
    #[default]
    NeverOverwrite,
}

/// A single file the generators want on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteRequest {
    pub path: PathBuf,
    pub content: String,
    pub policy: WritePolicy,
}

impl FileWriteRequest {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
            policy: WritePolicy::NeverOverwrite,
        }
    }
}

/// What happened to a `FileWriteRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Skipped,
}

/// Result of the `init` manifest transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptChange {
    Added,
    AlreadyPresent,
}
