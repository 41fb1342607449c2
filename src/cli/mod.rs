// src/cli/mod.rs

pub mod args;
pub mod dispatcher;
pub mod handlers;

pub use args::Cli;
