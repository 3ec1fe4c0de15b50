//! Public configuration types.
//!
//! These are the validated, ready-to-use structs handed to the code
//! generator. Raw deserialization types live in `raw.rs`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ── Engine ───────────────────────────────────────────────────────────────────

/// SQL dialect a package's schema and queries are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    #[default]
    PostgreSql,
    MySql,
}

impl Engine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" => Ok(Self::PostgreSql),
            "mysql" => Ok(Self::MySql),
            other => Err(format!(
                "unknown engine {other:?}, expected \"postgresql\" or \"mysql\""
            )),
        }
    }
}

// ── Overrides ────────────────────────────────────────────────────────────────

/// Table reference of a column override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub catalog: Option<String>,
    /// `"public"` unless the column reference names a schema.
    pub schema: String,
    pub rel: String,
}

/// Column an override applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTarget {
    pub table: TableRef,
    pub column: String,
}

/// What an override redirects: one specific column, or every column of a
/// given database type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideTarget {
    Column(ColumnTarget),
    /// Database type name, `postgres_type` in the document.
    DbType(String),
}

/// Resolved output type of an override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoType {
    /// Import path, e.g. `github.com/segmentio/ksuid`. Never carries the
    /// pointer sigil.
    pub module: String,
    /// Bare type name, prefixed with `*` when `pointer` is set.
    pub type_name: String,
    pub pointer: bool,
}

/// A validated type override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    /// `go_type` exactly as written in the document.
    pub go_type_spec: String,
    pub go_type: GoType,
    pub target: OverrideTarget,
    /// Applies only when the affected value is nullable.
    pub null: bool,
}

impl Override {
    pub fn column(&self) -> Option<&ColumnTarget> {
        match &self.target {
            OverrideTarget::Column(c) => Some(c),
            OverrideTarget::DbType(_) => None,
        }
    }

    pub fn db_type(&self) -> Option<&str> {
        match &self.target {
            OverrideTarget::DbType(t) => Some(t),
            OverrideTarget::Column(_) => None,
        }
    }
}

// ── Packages ─────────────────────────────────────────────────────────────────

/// One generation unit: schema, queries, engine and output flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    pub name: String,
    pub engine: Engine,
    pub path: String,
    pub schema: String,
    pub queries: String,
    pub emit_interface: bool,
    pub emit_json_tags: bool,
    pub emit_prepared_queries: bool,
    pub overrides: Vec<Override>,
}

/// Package name → settings, rebuilt on every load.
pub type PackageMap = HashMap<String, PackageSettings>;

/// Fully validated generator configuration.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub version: String,
    pub packages: Vec<PackageSettings>,
    /// Overrides applying to every package.
    pub overrides: Vec<Override>,
    /// Identifier rename hints, source name → generated name.
    pub rename: HashMap<String, String>,
    pub package_map: PackageMap,
}

impl GenerateSettings {
    /// Look up a package by its (possibly defaulted) name.
    pub fn package(&self, name: &str) -> Option<&PackageSettings> {
        self.package_map.get(name)
    }
}
