//! Names the toolkit reserves for itself.

/// Identifier and long flag of the verbosity switch.
pub const VERBOSE: &str = "verbose";

/// Identifier of the positional filenames argument.
pub const FILENAMES: &str = "filenames";

/// Long flags that configuration fields may not claim.
pub const RESERVED_FLAGS: [&str; 4] = ["--verbose", "--filenames", "--help", "--version"];
