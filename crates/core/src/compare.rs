//! Set-difference comparison between two permission exports.
//!
//! The comparison is directional: for each company a user has, it keeps the
//! permissions the *other* user lacks. Companies that only exist on the other
//! side do not appear in a user's result; companies whose entire permission
//! set is shared stay in the result with an empty set, so a compare view can
//! still list them with a zero count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CompanyMap, PermissionExport};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// One user's side of a comparison: the permissions only they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDiff {
    /// Username from that user's export, if present.
    pub username: Option<String>,

    /// Per-company permissions not granted to the other user.
    pub unique: CompanyMap,
}

impl UserDiff {
    /// Total number of unique permissions across all companies.
    pub fn unique_count(&self) -> usize {
        self.unique.values().map(|perms| perms.len()).sum()
    }
}

/// Both directions of a two-user comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareReport {
    pub user1: UserDiff,
    pub user2: UserDiff,
}

impl CompareReport {
    /// Whether either side holds any permission the other lacks.
    pub fn has_differences(&self) -> bool {
        self.user1.unique.values().any(|perms| !perms.is_empty())
            || self.user2.unique.values().any(|perms| !perms.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Differ
// ---------------------------------------------------------------------------

/// For each company in `ours`, the permissions not granted to `theirs`.
///
/// A company absent from `theirs` keeps its whole set; a company absent from
/// `ours` is not part of the result at all. Every company of `ours` appears
/// in the result, even when its difference is empty.
pub fn unique_permissions(ours: &CompanyMap, theirs: &CompanyMap) -> CompanyMap {
    ours.iter()
        .map(|(company, perms)| {
            let unique = match theirs.get(company) {
                Some(other) => perms.difference(other).cloned().collect(),
                None => perms.clone(),
            };
            (company.clone(), unique)
        })
        .collect()
}

/// Compare two exports in both directions.
pub fn compare_exports(a: &PermissionExport, b: &PermissionExport) -> CompareReport {
    let report = CompareReport {
        user1: UserDiff {
            username: a.username.clone(),
            unique: unique_permissions(&a.companies, &b.companies),
        },
        user2: UserDiff {
            username: b.username.clone(),
            unique: unique_permissions(&b.companies, &a.companies),
        },
    };
    debug!(
        user1_unique = report.user1.unique_count(),
        user2_unique = report.user2.unique_count(),
        "compared exports"
    );
    report
}
