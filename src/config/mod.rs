//! Generator configuration loading and validation.
//!
//! A configuration document declares one or more packages, each bound to a
//! schema, a query directory and a database engine, plus optional type
//! overrides and rename hints.
//!
//! # Module layout
//!
//! - **types** — Validated configuration structs handed to the generator
//!   (`GenerateSettings`, `PackageSettings`, `Override`, …).
//! - **raw** — Strict serde types mirroring the document; kept private.
//! - **overrides** — Resolution of `column` / `postgres_type` / `go_type`
//!   override entries.
//! - **load** — Decoding, the validation pass, package defaults and the
//!   package index: `parse_config`, `parse_config_str`, `load_from`.

mod load;
mod overrides;
mod raw;
mod types;

pub use load::{Format, SUPPORTED_VERSION, build_package_map, load_from, parse_config, parse_config_str};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const MINIMAL_JSON: &str = r#"{"version": "1", "packages": [{"path": "internal/db"}]}"#;

    fn write_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
        let mut f = Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_minimal_config() {
        let cfg = parse_config(MINIMAL_JSON.as_bytes()).unwrap();
        assert_eq!(cfg.version, "1");
        assert_eq!(cfg.package_map.len(), 1);
        let pkg = cfg.package("db").unwrap();
        assert_eq!(pkg.path, "internal/db");
        assert_eq!(pkg.engine, Engine::PostgreSql);
        assert!(cfg.overrides.is_empty());
        assert!(cfg.rename.is_empty());
    }

    #[test]
    fn load_json_file() {
        let f = write_with_suffix(".json", MINIMAL_JSON);
        let cfg = load_from(f.path()).unwrap();
        assert!(cfg.package("db").is_some());
    }

    #[test]
    fn load_toml_file() {
        let toml = r#"
version = "1"

[[packages]]
path = "internal/db"
engine = "mysql"
emit_json_tags = true
"#;
        let f = write_with_suffix(".toml", toml);
        let cfg = load_from(f.path()).unwrap();
        let pkg = cfg.package("db").unwrap();
        assert_eq!(pkg.engine, Engine::MySql);
        assert!(pkg.emit_json_tags);
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        let toml = r#"
version = "1"
colour = "blue"

[[packages]]
path = "db"
"#;
        let f = write_with_suffix(".toml", toml);
        let err = load_from(f.path()).unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_errors() {
        let err = load_from(std::path::Path::new("/nonexistent/sqlgen.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
