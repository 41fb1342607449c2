// src/cli/args.rs
use clap::Parser;

/// sfc-gen: scaffolding for Vue 2 / Vue 3 projects.
///
/// Every argument is collected verbatim and routed by the dispatcher:
///
/// - `sfc-gen [folder:]path/Name` generates a component (`v:`, `c:`, `com:` ...)
/// - `sfc-gen js:<dir> [name...]` generates script modules
/// - `sfc-gen init` injects the npm script into `package.json`
///
/// Help and version flags are handled by the dispatcher, not by clap, so that
/// they can appear anywhere on the command line.
#[derive(Parser, Debug, Default)]
#[command(author, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The command and its arguments (e.g. `v:admin/Dashboard`, `js:stores user auth`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
