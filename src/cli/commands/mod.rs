//! One module per subcommand; each exposes an `execute` function.

pub mod build;
pub mod completions;
pub mod deploy;
pub mod setup;
pub mod unlock;
pub mod version;
