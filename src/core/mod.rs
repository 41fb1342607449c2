// src/core/mod.rs

pub mod manifest;
pub mod target_resolver;
pub mod templates;
pub mod version_detector;
