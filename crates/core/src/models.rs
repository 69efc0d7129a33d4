//! Domain model types used throughout permcmp.
//!
//! These types bridge the export parser, the differ, the compare session,
//! and the CLI rendering layer.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Mapping from company name to the set of granted permission identifiers.
///
/// Ordered collections keep iteration, rendering, and JSON output
/// deterministic; the set enforces the no-duplicates invariant.
pub type CompanyMap = BTreeMap<String, BTreeSet<String>>;

// ---------------------------------------------------------------------------
// Permission export
// ---------------------------------------------------------------------------

/// The parsed contents of one permission export file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionExport {
    /// Username from the export's `User =` line, if one was present.
    pub username: Option<String>,

    /// Granted process permissions, grouped by company.
    pub companies: CompanyMap,
}

impl PermissionExport {
    /// Number of companies in the export.
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Total number of granted permissions across all companies.
    pub fn total_permissions(&self) -> usize {
        self.companies.values().map(|perms| perms.len()).sum()
    }

    /// The permission set for a company, if the company appears in the export.
    pub fn permissions_for(&self, company: &str) -> Option<&BTreeSet<String>> {
        self.companies.get(company)
    }
}

// ---------------------------------------------------------------------------
// User slots
// ---------------------------------------------------------------------------

/// One of the two compare slots an export can be loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserSlot {
    #[serde(rename = "user1")]
    One,
    #[serde(rename = "user2")]
    Two,
}

impl UserSlot {
    /// The opposite slot.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Display label used when the export carries no username.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::One => "User 1",
            Self::Two => "User 2",
        }
    }

    /// Stable storage index for slot arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl std::fmt::Display for UserSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "user1"),
            Self::Two => write!(f, "user2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_export() -> PermissionExport {
        let mut companies = CompanyMap::new();
        companies.insert(
            "Acme".to_string(),
            ["proc1", "proc2"].iter().map(|s| s.to_string()).collect(),
        );
        companies.insert(
            "Globex".to_string(),
            ["proc1"].iter().map(|s| s.to_string()).collect(),
        );
        PermissionExport {
            username: Some("alice".to_string()),
            companies,
        }
    }

    #[test]
    fn test_export_counts() {
        let export = sample_export();
        assert_eq!(export.company_count(), 2);
        assert_eq!(export.total_permissions(), 3);
    }

    #[test]
    fn test_permissions_for() {
        let export = sample_export();
        assert_eq!(export.permissions_for("Acme").map(|p| p.len()), Some(2));
        assert!(export.permissions_for("Initech").is_none());
    }

    #[test]
    fn test_slot_other() {
        assert_eq!(UserSlot::One.other(), UserSlot::Two);
        assert_eq!(UserSlot::Two.other(), UserSlot::One);
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(UserSlot::One.default_label(), "User 1");
        assert_eq!(UserSlot::Two.default_label(), "User 2");
        assert_eq!(UserSlot::One.to_string(), "user1");
        assert_eq!(UserSlot::Two.to_string(), "user2");
    }

    #[test]
    fn test_export_json_shape() {
        let export = sample_export();
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["username"], "alice");
        // BTreeSet serializes as a sorted array.
        assert_eq!(
            json["companies"]["Acme"],
            serde_json::json!(["proc1", "proc2"])
        );
    }

    #[test]
    fn test_empty_export_defaults() {
        let export = PermissionExport::default();
        assert!(export.username.is_none());
        assert_eq!(export.company_count(), 0);
        assert_eq!(export.total_permissions(), 0);
    }
}
