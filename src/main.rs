//! sqlgen-config — validates a generator configuration and lists its packages.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse arguments
//!   3. Resolve the log level (CLI `-v` flags > `SQLGEN_LOG_LEVEL` > `RUST_LOG`) and init the logger
//!   4. Resolve the config path (argument > `SQLGEN_CONFIG` > `sqlgen.json`)
//!   5. Load and validate the configuration
//!   6. Print one status line per package unless `--quiet`

use std::env;
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

use sqlgen_config::config::{self, GenerateSettings};
use sqlgen_config::error::AppError;
use sqlgen_config::logger;

const DEFAULT_CONFIG_PATH: &str = "sqlgen.json";
const CONFIG_ENV: &str = "SQLGEN_CONFIG";

const USAGE: &str = "\
Usage: sqlgen-config [OPTIONS] [PATH]

Validate a sqlgen configuration file (JSON, or TOML when PATH ends in .toml)
and list the packages it declares.

Arguments:
  [PATH]                     Configuration file (default: $SQLGEN_CONFIG, then sqlgen.json)

Options:
  -f, --config <PATH>        Same as the positional PATH
  -q, --quiet                Only report errors; exit status tells the result
  -v, -vv, -vvv              Log load summary / validation steps / every override
  -h, --help                 Print help";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = match parse_cli_args(env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Check(args) => args,
    };

    let env_level = env::var(logger::LEVEL_ENV).ok();
    logger::init(logger::resolve_level(args.log_level, env_level.as_deref())?)?;

    let path = args
        .config_path
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    debug!(path = %path.display(), "resolved config path");

    let settings = config::load_from(&path)?;

    info!(
        path = %path.display(),
        version = %settings.version,
        packages = settings.packages.len(),
        overrides = settings.overrides.len(),
        "config loaded"
    );

    if !args.quiet {
        print_summary(&settings);
    }
    Ok(())
}

fn print_summary(settings: &GenerateSettings) {
    for pkg in &settings.packages {
        let overrides = pkg.overrides.len() + settings.overrides.len();
        println!(
            "✓ {} ({}) path={} schema={} queries={} overrides={}",
            pkg.name, pkg.engine, pkg.path, pkg.schema, pkg.queries, overrides
        );
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Check(CheckArgs),
}

#[derive(Debug, Default, PartialEq)]
struct CheckArgs {
    log_level: Option<LevelFilter>,
    config_path: Option<PathBuf>,
    quiet: bool,
}

fn parse_cli_args<I>(args: I) -> Result<Command, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut verbosity = 0u8;
    let mut out = CheckArgs::default();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-q" | "--quiet" => out.quiet = true,
            "-f" | "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| AppError::Usage(format!("{arg} requires a path argument")))?;
                set_path(&mut out, path)?;
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            a if a.starts_with('-') && a.len() > 1 => {
                return Err(AppError::Usage(format!("unknown option {a}")));
            }
            path => set_path(&mut out, path.to_string())?,
        }
    }

    out.log_level = match verbosity {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    };

    Ok(Command::Check(out))
}

fn set_path(out: &mut CheckArgs, path: String) -> Result<(), AppError> {
    if out.config_path.replace(PathBuf::from(&path)).is_some() {
        return Err(AppError::Usage(format!("more than one config path given ({path})")));
    }
    Ok(())
}
