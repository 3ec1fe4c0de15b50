//! Override resolution.
//!
//! Turns a raw `{go_type, postgres_type, null, column}` entry into an
//! [`Override`] with a decomposed column reference and a split Go type.

use tracing::trace;

use crate::error::OverrideError;

use super::raw::RawOverride;
use super::types::{ColumnTarget, GoType, Override, OverrideTarget, TableRef};

const DEFAULT_SCHEMA: &str = "public";

/// Resolve one raw override. `column` and `postgres_type` are mutually
/// exclusive; `go_type` is always required.
pub(crate) fn resolve(raw: RawOverride) -> Result<Override, OverrideError> {
    let target = match (raw.column.is_empty(), raw.postgres_type.is_empty()) {
        (false, false) => {
            return Err(OverrideError::BothTargets {
                column: raw.column,
                db_type: raw.postgres_type,
            });
        }
        (true, true) => return Err(OverrideError::NoTarget),
        (false, true) => OverrideTarget::Column(parse_column(&raw.column)?),
        (true, false) => OverrideTarget::DbType(raw.postgres_type),
    };

    let go_type = parse_go_type(&raw.go_type)?;
    trace!(
        go_type = %raw.go_type,
        module = %go_type.module,
        type_name = %go_type.type_name,
        "override resolved"
    );

    Ok(Override {
        go_type_spec: raw.go_type,
        go_type,
        target,
        null: raw.null,
    })
}

/// Parse `[catalog.][schema.]relation.column`.
pub(crate) fn parse_column(spec: &str) -> Result<ColumnTarget, OverrideError> {
    let parts: Vec<&str> = spec.split('.').collect();
    let (catalog, schema, rel, column) = match parts.as_slice() {
        [rel, column] => (None, DEFAULT_SCHEMA, *rel, *column),
        [schema, rel, column] => (None, *schema, *rel, *column),
        [catalog, schema, rel, column] => (Some(*catalog), *schema, *rel, *column),
        _ => return Err(OverrideError::InvalidColumn(spec.to_string())),
    };
    Ok(ColumnTarget {
        table: TableRef {
            catalog: catalog.map(str::to_string),
            schema: schema.to_string(),
            rel: rel.to_string(),
        },
        column: column.to_string(),
    })
}

/// Parse `[*]modulepath.TypeName`. The module path must contain a `/`.
pub(crate) fn parse_go_type(spec: &str) -> Result<GoType, OverrideError> {
    let invalid = || OverrideError::InvalidGoType(spec.to_string());
    let last_dot = spec.rfind('.').ok_or_else(invalid)?;
    if !spec.contains('/') {
        return Err(invalid());
    }

    let module = &spec[..last_dot];
    let name = &spec[last_dot + 1..];
    Ok(match module.strip_prefix('*') {
        Some(module) => GoType {
            module: module.to_string(),
            type_name: format!("*{name}"),
            pointer: true,
        },
        None => GoType {
            module: module.to_string(),
            type_name: name.to_string(),
            pointer: false,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(go_type: &str, column: &str, postgres_type: &str) -> RawOverride {
        RawOverride {
            go_type: go_type.into(),
            postgres_type: postgres_type.into(),
            null: false,
            column: column.into(),
        }
    }

    #[test]
    fn two_part_column_defaults_schema() {
        let c = parse_column("accounts.id").unwrap();
        assert_eq!(c.table.catalog, None);
        assert_eq!(c.table.schema, "public");
        assert_eq!(c.table.rel, "accounts");
        assert_eq!(c.column, "id");
    }

    #[test]
    fn three_part_column() {
        let c = parse_column("db.accounts.id").unwrap();
        assert_eq!(c.table.catalog, None);
        assert_eq!(c.table.schema, "db");
        assert_eq!(c.table.rel, "accounts");
        assert_eq!(c.column, "id");
    }

    #[test]
    fn four_part_column() {
        let c = parse_column("main.db.accounts.id").unwrap();
        assert_eq!(c.table.catalog.as_deref(), Some("main"));
        assert_eq!(c.table.schema, "db");
        assert_eq!(c.table.rel, "accounts");
        assert_eq!(c.column, "id");
    }

    #[test]
    fn bad_column_part_counts() {
        for spec in ["id", "a.b.c.d.e"] {
            let err = parse_column(spec).unwrap_err();
            assert_eq!(err, OverrideError::InvalidColumn(spec.into()));
            assert!(err.to_string().contains("[catalog.][schema.]relation.column"));
        }
    }

    #[test]
    fn go_type_split_on_last_dot() {
        let t = parse_go_type("github.com/segmentio/ksuid.KSUID").unwrap();
        assert_eq!(t.module, "github.com/segmentio/ksuid");
        assert_eq!(t.type_name, "KSUID");
        assert!(!t.pointer);
    }

    #[test]
    fn pointer_sigil_moves_to_type_name() {
        let t = parse_go_type("*github.com/segmentio/ksuid.KSUID").unwrap();
        assert_eq!(t.module, "github.com/segmentio/ksuid");
        assert_eq!(t.type_name, "*KSUID");
        assert!(t.pointer);
    }

    #[test]
    fn go_type_without_extra_dots() {
        let t = parse_go_type("example/null.String").unwrap();
        assert_eq!(t.module, "example/null");
        assert_eq!(t.type_name, "String");
    }

    #[test]
    fn go_type_needs_dot_and_slash() {
        for spec in ["badtype", "time.Time", "github/ksuid", ""] {
            assert_eq!(
                parse_go_type(spec).unwrap_err(),
                OverrideError::InvalidGoType(spec.into())
            );
        }
    }

    #[test]
    fn both_targets_rejected() {
        let err = resolve(raw("a/b.C", "accounts.id", "uuid")).unwrap_err();
        assert_eq!(
            err,
            OverrideError::BothTargets {
                column: "accounts.id".into(),
                db_type: "uuid".into()
            }
        );
    }

    #[test]
    fn no_target_rejected() {
        assert_eq!(resolve(raw("a/b.C", "", "")).unwrap_err(), OverrideError::NoTarget);
    }

    #[test]
    fn go_type_checked_for_db_type_overrides() {
        let err = resolve(raw("badtype", "", "uuid")).unwrap_err();
        assert_eq!(err, OverrideError::InvalidGoType("badtype".into()));
    }

    #[test]
    fn column_checked_before_go_type() {
        let err = resolve(raw("badtype", "id", "")).unwrap_err();
        assert_eq!(err, OverrideError::InvalidColumn("id".into()));
    }

    #[test]
    fn resolves_db_type_override() {
        let mut r = raw("github.com/google/uuid.UUID", "", "uuid");
        r.null = true;
        let ov = resolve(r).unwrap();
        assert_eq!(ov.target, OverrideTarget::DbType("uuid".into()));
        assert_eq!(ov.go_type.module, "github.com/google/uuid");
        assert_eq!(ov.go_type_spec, "github.com/google/uuid.UUID");
        assert!(ov.null);
    }
}
