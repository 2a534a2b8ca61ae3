//! Configuration subsystem.
//!
//! Startup-only: a config is loaded, validated, and then frozen into the
//! registry and route table. There is no runtime reload; remotes are
//! assumed stable for the session.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ShellConfig;
pub use validation::{validate_config, ValidationError};
