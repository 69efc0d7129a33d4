//! Two-slot compare session.
//!
//! The session owns the loaded export for each user slot plus the
//! compare-mode flag, and produces the effective per-slot view on demand.
//! Loading a file into a slot either fully replaces that slot or, on any
//! failure, leaves it untouched. Views are recomputed per call and never
//! cached.

use std::path::Path;

use tracing::debug;

use crate::compare::{compare_exports, unique_permissions, CompareReport};
use crate::errors::ExportError;
use crate::export::load_export;
use crate::models::{CompanyMap, PermissionExport, UserSlot};

/// The two user slots and the compare-mode flag.
#[derive(Debug, Default)]
pub struct CompareSession {
    slots: [Option<PermissionExport>; 2],
    compare_mode: bool,
}

impl CompareSession {
    /// Create an empty session with compare mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an export file into a slot, replacing whatever was there.
    ///
    /// On failure the slot keeps its previous contents.
    pub fn load<P: AsRef<Path>>(&mut self, slot: UserSlot, path: P) -> Result<(), ExportError> {
        let export = load_export(path)?;
        debug!(
            slot = %slot,
            companies = export.companies.len(),
            "loaded export into slot"
        );
        self.slots[slot.index()] = Some(export);
        Ok(())
    }

    /// Place an already-parsed export into a slot.
    pub fn set_export(&mut self, slot: UserSlot, export: PermissionExport) {
        debug!(slot = %slot, "replacing slot export");
        self.slots[slot.index()] = Some(export);
    }

    /// The export loaded into a slot, if any.
    pub fn export(&self, slot: UserSlot) -> Option<&PermissionExport> {
        self.slots[slot.index()].as_ref()
    }

    /// The username carried by a slot's export, if any.
    pub fn username(&self, slot: UserSlot) -> Option<&str> {
        self.export(slot).and_then(|export| export.username.as_deref())
    }

    /// Whether a slot holds an export.
    pub fn is_loaded(&self, slot: UserSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Current compare-mode state.
    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    /// Set compare mode explicitly.
    pub fn set_compare_mode(&mut self, on: bool) {
        self.compare_mode = on;
        debug!(compare_mode = on, "set compare mode");
    }

    /// Flip compare mode, returning the new state.
    pub fn toggle_compare(&mut self) -> bool {
        self.compare_mode = !self.compare_mode;
        debug!(compare_mode = self.compare_mode, "toggled compare mode");
        self.compare_mode
    }

    /// Both-direction compare report over the loaded exports.
    ///
    /// `None` until both slots are loaded. Independent of the compare-mode
    /// flag; with the flag on, each side's `unique` map equals that slot's
    /// [`view`](Self::view).
    pub fn report(&self) -> Option<CompareReport> {
        match (self.export(UserSlot::One), self.export(UserSlot::Two)) {
            (Some(one), Some(two)) => Some(compare_exports(one, two)),
            _ => None,
        }
    }

    /// The effective companies-map for a slot under the current mode.
    ///
    /// With compare mode off this is the slot's full map. With it on, each
    /// company keeps only the permissions the other slot lacks; an empty or
    /// missing other slot leaves everything unique. An unloaded slot views
    /// as an empty map.
    pub fn view(&self, slot: UserSlot) -> CompanyMap {
        let export = match self.export(slot) {
            Some(export) => export,
            None => return CompanyMap::new(),
        };

        if !self.compare_mode {
            return export.companies.clone();
        }

        match self.export(slot.other()) {
            Some(other) => unique_permissions(&export.companies, &other.companies),
            None => export.companies.clone(),
        }
    }
}
