//! Raw document deserialization types.
//!
//! These structs mirror the document shape exactly. Every struct rejects
//! unknown fields, and absent or `null` fields fall back to their empty form
//! so the validator can report the precise problem. The `load` module turns them
//! into the public `types` structs.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use super::types::Engine;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Raw document shape — serde target before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<RawPackage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overrides: Vec<RawOverride>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rename: HashMap<String, String>,
}

// ── Packages ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawPackage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `None` when absent or set to `""`.
    #[serde(default, deserialize_with = "engine_or_none")]
    pub engine: Option<Engine>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schema: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emit_interface: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emit_json_tags: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emit_prepared_queries: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overrides: Vec<RawOverride>,
}

// ── Overrides ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawOverride {
    #[serde(default, deserialize_with = "null_as_default")]
    pub go_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postgres_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub null: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column: String,
}

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn engine_or_none<'de, D>(deserializer: D) -> Result<Option<Engine>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
