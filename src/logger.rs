//! Logging initialisation via tracing-subscriber.
//!
//! Resolve the level with [`resolve_level`], then call [`init`] once at
//! startup, before the configuration is loaded.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Environment variable holding a plain level name (`warn`, `debug`, ...).
pub const LEVEL_ENV: &str = "SQLGEN_LOG_LEVEL";

/// Level used when neither the CLI, [`LEVEL_ENV`] nor `RUST_LOG` set one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Pick the effective level: CLI verbosity wins over [`LEVEL_ENV`].
///
/// `Ok(None)` means neither was given and `RUST_LOG` decides. A malformed
/// [`LEVEL_ENV`] value is an error rather than being ignored.
pub fn resolve_level(
    cli: Option<LevelFilter>,
    env_level: Option<&str>,
) -> Result<Option<LevelFilter>, AppError> {
    match (cli, env_level) {
        (Some(level), _) => Ok(Some(level)),
        (None, Some(raw)) => parse_level(raw)
            .map(Some)
            .map_err(|e| AppError::Logger(format!("{LEVEL_ENV}: {e}"))),
        (None, None) => Ok(None),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// An explicit `level` applies to every target. Without one, `RUST_LOG`
/// directives are honoured and [`DEFAULT_LEVEL`] fills in when it is unset
/// or unparsable.
pub fn init(level: Option<LevelFilter>) -> Result<(), AppError> {
    let filter = match level {
        Some(level) => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(""),
        None => EnvFilter::builder()
            .with_default_directive(DEFAULT_LEVEL.into())
            .from_env_lossy(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Parse a plain level name into a [`LevelFilter`].
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    let level = level.trim();
    if level.is_empty() {
        return Err("log level must not be empty".into());
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| format!("unrecognised log level '{level}'"))
}
