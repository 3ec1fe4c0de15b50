//! Configuration loading and validation.
//!
//! Decodes a JSON or TOML document strictly, validates it in a single
//! fail-fast pass, applies per-package defaults, resolves overrides and
//! builds the package index.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ConfigError;

use super::overrides;
use super::raw::{RawPackage, RawSettings};
use super::types::*;

/// The only document version understood by this loader.
pub const SUPPORTED_VERSION: &str = "1";

/// Document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Decode a JSON document from `rd` and validate it.
pub fn parse_config<R: Read>(rd: R) -> Result<GenerateSettings, ConfigError> {
    let raw: RawSettings = serde_json::from_reader(rd)?;
    validate(raw)
}

/// Decode an in-memory document of the given format and validate it.
pub fn parse_config_str(text: &str, format: Format) -> Result<GenerateSettings, ConfigError> {
    let raw: RawSettings = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    validate(raw)
}

/// Read a configuration file, picking the format from its extension.
pub fn load_from(path: &Path) -> Result<GenerateSettings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path);
    debug!(path = %path.display(), ?format, "loading configuration");
    parse_config_str(&text, format)
}

fn validate(raw: RawSettings) -> Result<GenerateSettings, ConfigError> {
    if raw.version.is_empty() {
        return Err(ConfigError::MissingVersion);
    }
    if raw.version != SUPPORTED_VERSION {
        return Err(ConfigError::UnknownVersion(raw.version));
    }
    if raw.packages.is_empty() {
        return Err(ConfigError::NoPackages);
    }

    let overrides = raw
        .overrides
        .into_iter()
        .map(overrides::resolve)
        .collect::<Result<Vec<_>, _>>()?;

    let packages = raw
        .packages
        .into_iter()
        .enumerate()
        .map(|(index, pkg)| resolve_package(index, pkg))
        .collect::<Result<Vec<_>, _>>()?;

    let package_map = build_package_map(&packages)?;
    debug!(
        packages = packages.len(),
        global_overrides = overrides.len(),
        renames = raw.rename.len(),
        "configuration validated"
    );

    Ok(GenerateSettings {
        version: raw.version,
        packages,
        overrides,
        rename: raw.rename,
        package_map,
    })
}

fn resolve_package(index: usize, raw: RawPackage) -> Result<PackageSettings, ConfigError> {
    if raw.path.is_empty() {
        return Err(ConfigError::NoPackagePath { index });
    }

    let overrides = raw
        .overrides
        .into_iter()
        .map(overrides::resolve)
        .collect::<Result<Vec<_>, _>>()?;

    let name = if raw.name.is_empty() {
        path_basename(&raw.path)
    } else {
        raw.name
    };

    Ok(PackageSettings {
        name,
        engine: raw.engine.unwrap_or_default(),
        path: raw.path,
        schema: raw.schema,
        queries: raw.queries,
        emit_interface: raw.emit_interface,
        emit_json_tags: raw.emit_json_tags,
        emit_prepared_queries: raw.emit_prepared_queries,
        overrides,
    })
}

/// Final segment of `path`, ignoring trailing separators and `.` segments.
/// Empty when the path has no such segment (`"/"`, `"."`, `"a/.."`), which
/// the index builder reports as a missing name.
fn path_basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Index packages by name. Duplicate names are not rejected: the later
/// package replaces the earlier one.
pub fn build_package_map(packages: &[PackageSettings]) -> Result<PackageMap, ConfigError> {
    let mut map = PackageMap::with_capacity(packages.len());
    for (index, pkg) in packages.iter().enumerate() {
        if pkg.name.is_empty() {
            return Err(ConfigError::NoPackageName { index });
        }
        if map.insert(pkg.name.clone(), pkg.clone()).is_some() {
            warn!(package = %pkg.name, index, "duplicate package name, keeping the later entry");
        }
    }
    Ok(map)
}
