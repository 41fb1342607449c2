// src/core/target_resolver.rs

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::{Category, ParsedTarget};

lazy_static! {
    /// Letters, digits, hyphen and underscore. Anything else is rejected.
    static ref LEAF_NAME_RE: Regex = Regex::new(r"^[\p{L}\p{N}_-]+$").expect("valid leaf name regex");
}

/// Characters that get a dedicated error message when they show up in a leaf name.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\\', '/'];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("The name must not be empty.")]
    EmptyLeafName,
    #[error("The name '{name}' contains an illegal character '{found}'. Only letters, digits, '-' and '_' are allowed.")]
    InvalidLeafName { name: String, found: char },
    #[error("The path '{path}' contains an empty segment.")]
    EmptySegment { path: String },
    #[error("The path '{path}' contains the segment '{segment}', which would leave the target folder.")]
    UnsafeSegment { path: String, segment: String },
    #[error("Missing folder before ':' in '{input}'. Expected '<folder>:<path>'.")]
    MissingCategory { input: String },
    #[error("Unsupported folder '{category}'. Supported: views, components (aliases v/view, c/com/comp/component).")]
    UnsupportedCategory { category: String },
    #[error("A directory name is required after 'js:', e.g. 'js:utils'.")]
    EmptyJsDirectory,
}

type ResolveResult<T> = Result<T, ResolveError>;

/// Maps a folder alias to its canonical name. Unknown tokens pass through unchanged.
pub fn normalize_category(token: &str) -> &str {
    match token {
        "v" | "view" => "views",
        "c" | "com" | "comp" | "component" => "components",
        other => other,
    }
}

fn parse_category(token: &str) -> ResolveResult<Category> {
    match normalize_category(token) {
        "views" => Ok(Category::Views),
        "components" => Ok(Category::Components),
        other => Err(ResolveError::UnsupportedCategory {
            category: other.to_string(),
        }),
    }
}

/// Parses a component command such as `BlogCard`, `com:Button` or `v:admin/Dashboard`.
///
/// Only the first `:` separates the folder from the path; later colons belong to
/// the path. Directory segments are kept verbatim, the leaf name is validated.
pub fn resolve(command_arg: &str) -> ResolveResult<ParsedTarget> {
    let (category_token, path_token) = match command_arg.split_once(':') {
        Some(("", _)) => {
            return Err(ResolveError::MissingCategory {
                input: command_arg.to_string(),
            });
        }
        Some((category, path)) => (category, path),
        None => ("views", command_arg),
    };

    let category = parse_category(category_token)?;
    let path_segments = split_segments(path_token)?;

    // `split_segments` never returns an empty vector, the fallback only keeps this panic-free.
    let leaf_name = path_segments.last().cloned().unwrap_or_default();
    validate_leaf_name(&leaf_name)?;

    log::debug!(
        "Resolved '{}' to category '{}' with segments {:?}",
        command_arg,
        category,
        path_segments
    );

    Ok(ParsedTarget {
        category,
        path_segments,
        leaf_name,
    })
}

/// Splits the directory argument of `js:<dir>` into validated segments.
pub fn resolve_js_directory(dir_token: &str) -> ResolveResult<Vec<String>> {
    if dir_token.trim().is_empty() {
        return Err(ResolveError::EmptyJsDirectory);
    }
    let segments: Vec<String> = dir_token.split('/').map(str::to_string).collect();
    check_directory_segments(dir_token, &segments)?;
    Ok(segments)
}

/// Checks a name that becomes a file or folder name on disk.
pub fn validate_leaf_name(name: &str) -> ResolveResult<()> {
    if name.trim().is_empty() {
        return Err(ResolveError::EmptyLeafName);
    }
    if LEAF_NAME_RE.is_match(name) {
        return Ok(());
    }

    let found = name
        .chars()
        .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_whitespace())
        .or_else(|| {
            name.chars()
                .find(|c| !(c.is_alphanumeric() || *c == '-' || *c == '_'))
        })
        .unwrap_or('?');

    Err(ResolveError::InvalidLeafName {
        name: name.to_string(),
        found,
    })
}

/// Splits a path token on `/`. The leaf (last segment) is left for `validate_leaf_name`.
fn split_segments(path_token: &str) -> ResolveResult<Vec<String>> {
    let segments: Vec<String> = path_token.split('/').map(str::to_string).collect();

    if let Some((_leaf, dirs)) = segments.split_last() {
        check_directory_segments(path_token, dirs)?;
    }

    Ok(segments)
}

fn check_directory_segments(path: &str, segments: &[String]) -> ResolveResult<()> {
    for segment in segments {
        if segment.is_empty() {
            return Err(ResolveError::EmptySegment {
                path: path.to_string(),
            });
        }
        if segment == "." || segment == ".." {
            return Err(ResolveError::UnsafeSegment {
                path: path.to_string(),
                segment: segment.clone(),
            });
        }
    }
    Ok(())
}
