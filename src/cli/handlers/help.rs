// src/cli/handlers/help.rs

use anyhow::Result;
use colored::Colorize;

use super::commons::Workspace;
use crate::constants::TOOL_NAME;

/// Builds the color-aware usage screen from the tagged help template.
pub fn build_help_string() -> String {
    // Tags like `<cmd>` in the template become ANSI styles, or nothing when
    // colors are disabled.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let group = if use_colors { "\x1b[1;32m" } else { "" }; // Bold Green
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    t!("cli.help.template")
        .replace("<version>", env!("CARGO_PKG_VERSION"))
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<group>", group)
        .replace("</group>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset)
}

/// `sfc-gen help`, `--help`, `-h`.
pub fn handle(_args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    workspace.reporter().plain(&build_help_string());
    Ok(())
}

/// `sfc-gen --version`.
pub fn handle_version(_args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    let line = format!("{} v{}", TOOL_NAME, env!("CARGO_PKG_VERSION"));
    workspace.reporter().plain(&line.bold().to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_has_no_leftover_tags() {
        colored::control::set_override(false);
        let help = build_help_string();

        assert!(help.contains("js:stores"));
        assert!(help.contains(env!("CARGO_PKG_VERSION")));
        for tag in ["<title>", "<group>", "<cmd>", "<dim>", "</cmd>", "<version>"] {
            assert!(!help.contains(tag), "tag {} left in help", tag);
        }
    }
}
