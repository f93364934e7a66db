//! Common constants used throughout stencil.

/// Extension appended to files that became templates
pub const TEMPLATE_SUFFIX: &str = "jinja";

/// Source directory processed when none is given
pub const DEFAULT_SOURCE_DIR: &str = "reference";

/// Destination directory written when none is given
pub const DEFAULT_TEMPLATE_DIR: &str = "template";

/// Local environment file read by [`crate::settings::Settings::load`]
pub const ENV_FILE: &str = ".env";

/// Opening delimiter of a rendered template variable
pub const VARIABLE_START: &str = "{{ ";

/// Closing delimiter of a rendered template variable
pub const VARIABLE_END: &str = " }}";
