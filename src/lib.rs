// Library root — the validated configuration is the input contract of the
// code generator. The `sqlgen-config` binary in src/main.rs is a thin checker.

pub mod config;
pub mod error;
pub mod logger;

pub use config::{GenerateSettings, PackageSettings, load_from, parse_config};
pub use error::{ConfigError, OverrideError};
