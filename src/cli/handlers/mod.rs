// src/cli/handlers/mod.rs

// One module per CLI verb, plus the shared workspace context.

pub mod commons;
pub mod component;
pub mod help;
pub mod init;
pub mod js;
