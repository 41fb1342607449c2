// src/bin/sfc-gen.rs

use clap::Parser;
use colored::*;
use sfc_gen::{
    cli::{Cli, dispatcher, handlers::commons::Workspace},
    system::{console::TerminalReporter, fs::LocalFileSystem},
};
use std::env;
use std::path::PathBuf;

/// The main entry point of `sfc-gen`.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("CLI args parsed: {:?}", cli);

    let root = match project_root() {
        Ok(root) => root,
        Err(e) => fail(&e),
    };

    let fs = LocalFileSystem;
    let reporter = TerminalReporter;
    let workspace = Workspace::new(root, &fs, &reporter);

    if let Err(e) = dispatcher::dispatch(cli.args, &workspace) {
        fail(&e);
    }
}

/// The current directory, without Windows `\\?\` prefixes.
fn project_root() -> anyhow::Result<PathBuf> {
    let cwd = env::current_dir()?;
    Ok(dunce::canonicalize(&cwd).unwrap_or(cwd))
}

/// Prints a formatted message to stderr and exits with a failure code.
fn fail(e: &anyhow::Error) -> ! {
    eprintln!("\n{}: {}", "Error".red().bold(), e);
    std::process::exit(1);
}
