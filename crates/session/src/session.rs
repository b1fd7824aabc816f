//! The form session: state machine, mirrors, and the submission seam
//!
//! All mutation of the nested form state goes through the named operations
//! here. The session owns the vendor record, the service selection (and with
//! it every vehicle collection), the touched/error mirrors, and the phase.
//!
//! Phase machine: `Editing → (validate) → stays Editing on violations |
//! Submitted on a clean submit`. `Submitted` is terminal: mutating
//! operations become logged no-ops and a second submit is an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collection::VehicleCollection;
use crate::report::{ErrorTree, FieldKey, TouchedTree, ValidationReport};
use crate::rules;
use crate::selection::{SelectionChange, ServiceSelectionState};
use crate::service::{ServiceFlags, ServiceKey};
use crate::vehicle::{VehicleId, VehiclePatch, VehicleRecord};
use crate::vendor::{VendorPatch, VendorRecord};

/// What happens when the last vehicle of an active service is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyServicePolicy {
    /// Reseed the collection with a fresh blank record (the service stays
    /// active and never shows an empty tab).
    #[default]
    ReplaceWithBlank,
    /// Toggle the service off, discarding its collection and mirrors.
    DeactivateService,
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Editing,
    /// Terminal. Reached only through a clean submit.
    Submitted,
}

/// Distinguishes a saved draft from a final submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    Draft,
    Final,
}

/// The assembled snapshot handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub mode: SubmissionMode,
    pub vendor: VendorRecord,
    pub flags: ServiceFlags,
    pub vehicles_by_service: BTreeMap<ServiceKey, Vec<VehicleRecord>>,
}

/// Receives submissions and drafts. The persistence call lives behind this
/// seam; the engine guarantees `deliver` is called at most once per submit.
pub trait SubmissionSink {
    fn deliver(&mut self, submission: Submission);
}

/// Why a submit (or draft) was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Validation found violations; the tree carries all of them and no
    /// external effect happened.
    #[error("submission rejected with {} violation(s)", errors.total_violations())]
    Invalid { errors: ErrorTree },

    /// The session already submitted successfully.
    #[error("session already submitted")]
    AlreadySubmitted,
}

/// One vendor's onboarding form, from first keystroke to submission.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    vendor: VendorRecord,
    selection: ServiceSelectionState,
    touched: TouchedTree,
    errors: ErrorTree,
    policy: EmptyServicePolicy,
    submitted: bool,
}

impl FormSession {
    /// Creates an empty session with the default empty-service policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with an explicit empty-service policy.
    #[must_use]
    pub fn with_policy(policy: EmptyServicePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    // ── projections ──────────────────────────────────────────────────────

    /// The vendor record.
    #[must_use]
    pub fn vendor(&self) -> &VendorRecord {
        &self.vendor
    }

    /// The service checkbox state.
    #[must_use]
    pub fn flags(&self) -> &ServiceFlags {
        self.selection.flags()
    }

    /// The vehicle collection of an active service.
    #[must_use]
    pub fn vehicles(&self, key: ServiceKey) -> Option<&VehicleCollection> {
        self.selection.collection(key)
    }

    /// Active services in activation order.
    pub fn active_services(&self) -> impl Iterator<Item = ServiceKey> + '_ {
        self.selection.active_services()
    }

    /// Errors from the most recent validation pass.
    #[must_use]
    pub fn errors(&self) -> &ErrorTree {
        &self.errors
    }

    /// The session phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.submitted {
            SessionPhase::Submitted
        } else {
            SessionPhase::Editing
        }
    }

    /// The configured empty-service policy.
    #[must_use]
    pub fn policy(&self) -> EmptyServicePolicy {
        self.policy
    }

    /// Whether a vendor field has been interacted with.
    #[must_use]
    pub fn is_vendor_field_touched(&self, field: FieldKey) -> bool {
        self.touched.is_vendor_touched(field)
    }

    /// Whether a vehicle field has been interacted with.
    #[must_use]
    pub fn is_vehicle_field_touched(
        &self,
        key: ServiceKey,
        id: VehicleId,
        field: FieldKey,
    ) -> bool {
        self.touched.is_vehicle_touched(key, id, field)
    }

    // ── mutation ─────────────────────────────────────────────────────────

    fn editable(&self, op: &'static str) -> bool {
        if self.submitted {
            debug!(op, "ignored: session already submitted");
            return false;
        }
        true
    }

    /// Sets one vendor field and marks it touched.
    pub fn update_vendor_field(&mut self, patch: VendorPatch) {
        if !self.editable("update_vendor_field") {
            return;
        }
        self.touched.touch_vendor(patch.field_key());
        self.vendor.apply(patch);
    }

    /// Turns a service on or off, pruning mirrors for anything discarded.
    pub fn toggle_service(&mut self, key: ServiceKey, active: bool) {
        if !self.editable("toggle_service") {
            return;
        }
        let change = self.selection.toggle_service(key, active);
        self.prune_mirrors(&change);
    }

    /// Turns the "others" slot on or off.
    pub fn toggle_others(&mut self, active: bool) {
        if !self.editable("toggle_others") {
            return;
        }
        let change = self.selection.toggle_others(active);
        self.prune_mirrors(&change);
    }

    /// Stores the "others" description text.
    pub fn set_other_type(&mut self, text: impl Into<String>) {
        if !self.editable("set_other_type") {
            return;
        }
        let change = self.selection.set_other_type(text);
        self.prune_mirrors(&change);
    }

    /// Appends a blank vehicle to an active service and returns its id.
    ///
    /// Returns `None` for inactive services (or after submit).
    pub fn add_vehicle(&mut self, key: ServiceKey) -> Option<VehicleId> {
        if !self.editable("add_vehicle") {
            return None;
        }
        let id = self.selection.collection_mut(key)?.add();
        debug!(service = %key, vehicle = %id, "vehicle added");
        Some(id)
    }

    /// Removes a vehicle, discarding its mirror entries.
    ///
    /// Unknown key/id combinations are a no-op. If the removal leaves the
    /// collection empty the configured [`EmptyServicePolicy`] applies.
    pub fn remove_vehicle(&mut self, key: ServiceKey, id: VehicleId) {
        if !self.editable("remove_vehicle") {
            return;
        }
        let now_empty = {
            let Some(collection) = self.selection.collection_mut(key) else {
                return;
            };
            if collection.remove(id).is_none() {
                return;
            }
            collection.is_empty()
        };
        debug!(service = %key, vehicle = %id, "vehicle removed");
        self.touched.remove_vehicle(key, id);
        self.errors.remove_vehicle(key, id);

        if now_empty {
            match self.policy {
                EmptyServicePolicy::ReplaceWithBlank => {
                    if let Some(collection) = self.selection.collection_mut(key) {
                        collection.add();
                    }
                }
                EmptyServicePolicy::DeactivateService => {
                    let change = self.selection.toggle_service(key, false);
                    self.prune_mirrors(&change);
                }
            }
        }
    }

    /// Sets one field of one vehicle and marks it touched.
    ///
    /// Unknown key/id combinations are a no-op.
    pub fn update_vehicle_field(&mut self, key: ServiceKey, id: VehicleId, patch: VehiclePatch) {
        if !self.editable("update_vehicle_field") {
            return;
        }
        let field = patch.field_key();
        let Some(collection) = self.selection.collection_mut(key) else {
            return;
        };
        if collection.update(id, patch) {
            self.touched.touch_vehicle(key, id, field);
        }
    }

    fn prune_mirrors(&mut self, change: &SelectionChange) {
        for &key in &change.discarded {
            self.touched.remove_service(key);
            self.errors.remove_service(key);
        }
    }

    // ── validation & submission ──────────────────────────────────────────

    /// Runs every rule over the vendor and all active vehicles, stores the
    /// error tree, and marks every field touched so all errors display.
    pub fn validate(&mut self) -> ValidationReport {
        let mut tree = ErrorTree::new();
        tree.vendor = rules::validate_vendor(&self.vendor, self.selection.flags());
        for (key, collection) in self.selection.iter() {
            for record in collection {
                tree.insert_vehicle(key, record.id(), rules::validate_vehicle(record));
            }
        }

        for field in VendorRecord::FIELD_KEYS {
            self.touched.touch_vendor(field);
        }
        let vehicle_slots: Vec<(ServiceKey, VehicleId)> = self
            .selection
            .iter()
            .flat_map(|(key, collection)| collection.ids().map(move |id| (key, id)))
            .collect();
        for (key, id) in vehicle_slots {
            for field in VehicleRecord::FIELD_KEYS {
                self.touched.touch_vehicle(key, id, field);
            }
        }

        debug!(violations = tree.total_violations(), "validation pass");
        self.errors = tree.clone();
        ValidationReport::from_errors(tree)
    }

    /// Validates and, if clean, hands the final snapshot to the sink exactly
    /// once. The session then becomes [`SessionPhase::Submitted`].
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] with the full error tree if any rule fails
    /// (no external effect happens); [`SubmitError::AlreadySubmitted`] on a
    /// second submit.
    pub fn submit<S: SubmissionSink>(&mut self, sink: &mut S) -> Result<(), SubmitError> {
        if self.submitted {
            warn!("submit refused: session already submitted");
            return Err(SubmitError::AlreadySubmitted);
        }
        let report = self.validate();
        if !report.is_valid {
            warn!(
                violations = report.errors.total_violations(),
                "submit rejected by validation"
            );
            return Err(SubmitError::Invalid {
                errors: report.errors,
            });
        }
        sink.deliver(self.snapshot(SubmissionMode::Final));
        self.submitted = true;
        info!("session submitted");
        Ok(())
    }

    /// Delivers the current snapshot flagged as a draft, without validation.
    ///
    /// # Errors
    ///
    /// [`SubmitError::AlreadySubmitted`] after a successful submit.
    pub fn save_draft<S: SubmissionSink>(&mut self, sink: &mut S) -> Result<(), SubmitError> {
        if self.submitted {
            warn!("draft refused: session already submitted");
            return Err(SubmitError::AlreadySubmitted);
        }
        sink.deliver(self.snapshot(SubmissionMode::Draft));
        info!("draft saved");
        Ok(())
    }

    fn snapshot(&self, mode: SubmissionMode) -> Submission {
        Submission {
            mode,
            vendor: self.vendor.clone(),
            flags: self.selection.flags().clone(),
            vehicles_by_service: self
                .selection
                .iter()
                .map(|(key, collection)| (key, collection.iter().cloned().collect()))
                .collect(),
        }
    }
}
