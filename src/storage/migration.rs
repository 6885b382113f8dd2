//! Versioned schema migrations
//!
//! Migrations run once, on the raw JSON, every time a document is opened.
//! They are additive only: they fill in what older files lack and never
//! reject a file for being old. The `version` tag itself is left as found.

use serde_json::{Map, Value};

use crate::error::{RentlogError, RentlogResult};
use crate::models::{CURRENT_VERSION, LEGACY_VERSION};

/// A single schema step
struct Migration {
    /// Documents at or below this version need the step
    from: u32,
    description: &'static str,
    apply: fn(&mut Map<String, Value>),
}

const MIGRATIONS: &[Migration] = &[Migration {
    from: 1,
    description: "add empty bills and payments to tenants",
    apply: add_tenant_ledgers,
}];

/// What a migration pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Version tag found in the file
    pub found_version: u32,
    /// Descriptions of the steps that were applied
    pub applied: Vec<&'static str>,
}

impl MigrationReport {
    /// Check whether the file was written by a newer RentLog
    pub fn is_from_future(&self) -> bool {
        self.found_version > CURRENT_VERSION
    }
}

/// Read the version tag from a document object
///
/// A missing tag means the file predates versioning.
pub fn document_version(root: &Map<String, Value>) -> RentlogResult<u32> {
    match root.get("version") {
        None | Some(Value::Null) => Ok(LEGACY_VERSION),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                RentlogError::InvalidDocument(format!("'version' must be a whole number, got {}", value))
            }),
    }
}

/// Bring a document object up to the current schema
pub fn migrate(root: &mut Map<String, Value>) -> RentlogResult<MigrationReport> {
    let found_version = document_version(root)?;
    let mut applied = Vec::new();

    for migration in MIGRATIONS.iter().filter(|m| found_version <= m.from) {
        (migration.apply)(root);
        applied.push(migration.description);
    }

    Ok(MigrationReport {
        found_version,
        applied,
    })
}

fn add_tenant_ledgers(root: &mut Map<String, Value>) {
    let Some(Value::Array(tenants)) = root.get_mut("tenants") else {
        return;
    };

    for tenant in tenants.iter_mut().filter_map(Value::as_object_mut) {
        for key in ["bills", "payments"] {
            if matches!(tenant.get(key), None | Some(Value::Null)) {
                tenant.insert(key.to_string(), Value::Array(Vec::new()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_legacy_tenants_get_empty_ledgers() {
        let mut root = object(json!({
            "properties": [],
            "tenants": [
                {"id": 2, "propertyId": 1, "name": "Ravi", "rent": 4500},
                {"id": 3, "propertyId": 1, "name": "Mia", "rent": 3000, "bills": [{"id": 4}]}
            ]
        }));

        let report = migrate(&mut root).unwrap();

        assert_eq!(report.found_version, LEGACY_VERSION);
        assert_eq!(report.applied.len(), 1);
        assert_eq!(root["tenants"][0]["bills"], json!([]));
        assert_eq!(root["tenants"][0]["payments"], json!([]));
        assert_eq!(root["tenants"][0]["rent"], json!(4500));
        assert_eq!(root["tenants"][1]["bills"], json!([{"id": 4}]));
        assert!(root.get("version").is_none());
    }

    #[test]
    fn test_current_documents_are_untouched() {
        let original = json!({
            "version": CURRENT_VERSION,
            "properties": [],
            "tenants": [{"id": 2, "propertyId": 1, "name": "Ravi", "rent": 4500}]
        });
        let mut root = object(original.clone());

        let report = migrate(&mut root).unwrap();

        assert!(report.applied.is_empty());
        assert_eq!(Value::Object(root), original);
    }

    #[test]
    fn test_future_version_is_accepted() {
        let mut root = object(json!({"version": 99, "properties": [], "tenants": []}));
        let report = migrate(&mut root).unwrap();
        assert!(report.is_from_future());
        assert!(report.applied.is_empty());
    }

    #[test]
    fn test_non_numeric_version_is_invalid() {
        let root = object(json!({"version": "two", "properties": [], "tenants": []}));
        let err = document_version(&root).unwrap_err();
        assert!(matches!(err, RentlogError::InvalidDocument(_)));
    }
}
