use anyhow::Result;

use crate::{
    cli::handlers::{self, commons::Workspace},
    constants::JS_COMMAND_PREFIX,
};

type Handler = fn(Vec<String>, &Workspace<'_>) -> Result<()>;

/// Defines a named command, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: Handler,
}

/// Every command reachable by name. Anything else is a generation target.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "help",
        aliases: &["--help", "-h"],
        handler: handlers::help::handle,
    },
    CommandDefinition {
        name: "--version",
        aliases: &["-V"],
        handler: handlers::help::handle_version,
    },
    CommandDefinition {
        name: "init",
        aliases: &[],
        handler: handlers::init::handle,
    },
];

/// Flags that win wherever they appear on the command line.
const HELP_FLAGS: &[&str] = &["--help", "-h"];
const VERSION_FLAGS: &[&str] = &["--version", "-V"];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Which handler an argument list goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Named(&'static str),
    JsArtifact,
    Component,
}

/// Classifies the invocation. Pure, so the routing rules are testable on their own.
fn route(all_args: &[String]) -> Route {
    let Some(first) = all_args.first() else {
        return Route::Named("help");
    };

    if all_args.iter().any(|a| HELP_FLAGS.contains(&a.as_str())) {
        return Route::Named("help");
    }
    if all_args.iter().any(|a| VERSION_FLAGS.contains(&a.as_str())) {
        return Route::Named("--version");
    }
    if let Some(command) = find_command(first) {
        return Route::Named(command.name);
    }
    if first.starts_with(JS_COMMAND_PREFIX) {
        return Route::JsArtifact;
    }
    Route::Component
}

/// The main application dispatcher. One pass: route, run one handler, return.
pub fn dispatch(all_args: Vec<String>, workspace: &Workspace<'_>) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let handler: Handler = match route(&all_args) {
        Route::Named(name) => match find_command(name) {
            Some(command) => command.handler,
            None => handlers::help::handle,
        },
        Route::JsArtifact => handlers::js::handle,
        Route::Component => handlers::component::handle,
    };

    handler(all_args, workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{console::RecordingReporter, fs::LocalFileSystem};
    use tempfile::TempDir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_route_help() {
        assert_eq!(route(&[]), Route::Named("help"));
        assert_eq!(route(&args(&["help"])), Route::Named("help"));
        assert_eq!(route(&args(&["-h"])), Route::Named("help"));
        assert_eq!(route(&args(&["v:Home", "--help"])), Route::Named("help"));
    }

    #[test]
    fn test_route_version() {
        assert_eq!(route(&args(&["--version"])), Route::Named("--version"));
        assert_eq!(route(&args(&["js:router", "-V"])), Route::Named("--version"));
    }

    #[test]
    fn test_route_commands() {
        assert_eq!(route(&args(&["init"])), Route::Named("init"));
        assert_eq!(route(&args(&["js:stores", "user"])), Route::JsArtifact);
        assert_eq!(route(&args(&["v:admin/Dashboard"])), Route::Component);
        assert_eq!(route(&args(&["BlogCard"])), Route::Component);
    }

    #[test]
    fn test_dispatch_component_end_to_end() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        dispatch(args(&["v:admin/Dashboard"]), &ws).unwrap();
        let second = dispatch(args(&["v:admin/Dashboard"]), &ws);

        let component_dir = dir.path().join("src/views/admin/Dashboard");
        assert!(component_dir.join("index.vue").exists());
        assert!(component_dir.join("test.vue").exists());
        assert!(component_dir.join("page.js").exists());
        assert!(second.is_err());
    }

    #[test]
    fn test_dispatch_help_needs_no_project() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::default();
        let ws = Workspace::new(dir.path(), &LocalFileSystem, &reporter);

        assert!(dispatch(Vec::new(), &ws).is_ok());
        assert!(dispatch(args(&["--version"]), &ws).is_ok());
    }
}
