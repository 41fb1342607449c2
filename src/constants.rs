// src/constants.rs

/// The name of the tool, as shown in usage and version output.
pub const TOOL_NAME: &str = "sfc-gen";

/// The directory (relative to the project root) that every generator writes into.
pub const SRC_DIR: &str = "src";

/// The project manifest read for version detection and mutated by `init`.
pub const MANIFEST_FILENAME: &str = "package.json";

/// The dependency whose version drives template selection.
pub const FRAMEWORK_DEPENDENCY: &str = "vue";

/// Extension of generated single-file components.
pub const COMPONENT_EXT: &str = "vue";

/// Extension of generated script modules.
pub const MODULE_EXT: &str = "js";

/// Prefix that routes a command to the JS module generator (`js:router`).
pub const JS_COMMAND_PREFIX: &str = "js:";

/// Name of the npm script injected by `init`.
pub const INIT_SCRIPT_NAME: &str = "add";

/// Value of the npm script injected by `init`.
pub const INIT_SCRIPT_COMMAND: &str = "sfc-gen";
