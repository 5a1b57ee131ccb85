//! Configuration: project settings and the build-time key source.

pub mod key_source;
pub mod settings;

pub use key_source::{KeySource, ENV_FILE, KEY_VAR, PASSWORD_VAR};
pub use settings::Settings;
