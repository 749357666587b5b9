//! Well-known names used by the loader, the merge engine, and the CLI.

/// Name of the optional override file looked up inside the working directory.
pub const OVERRIDE_FILE_NAME: &str = "terraform-validator.yaml";

/// Working directory used when no positional argument is given.
pub const DEFAULT_WORKING_DIRECTORY: &str = ".";

/// Binary name, also used as the program name in usage output.
pub const TOOL_NAME: &str = "terraform-validator";

// Flags recognized as the first argument.
pub const FLAG_VERSION_LONG: &str = "--version";
pub const FLAG_VERSION_SHORT: &str = "-v";
pub const FLAG_HELP_LONG: &str = "--help";
pub const FLAG_HELP_SHORT: &str = "-h";

// Default policy
pub const DEFAULT_CATEGORY: &str = "default";
pub const DEFAULT_BLOCK_PATTERN_NAME: &str = "block";

/// Extension of Terraform definition files.
pub const TERRAFORM_FILE_EXTENSION: &str = "tf";
