//! Error tree, touched tree, and the validation report
//!
//! Violations are plain data. One validation pass surfaces every problem at
//! once; the trees mirror the nested shape of the form (vendor fields, then
//! service → vehicle → field) so a host can route each message to the widget
//! that caused it.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::service::ServiceKey;
use crate::vehicle::VehicleId;

/// Field keys are static names defined next to their records.
pub type FieldKey = &'static str;

/// Broad category of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is blank or unselected.
    FieldMissing,
    /// A field is present but fails its rule.
    FieldInvalid,
    /// An attachment list breaks a count or size limit.
    FileConstraintViolated,
    /// No service is selected at all.
    ServiceSelectionMissing,
}

/// One rule failure with its display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: Cow<'static, str>,
}

impl Violation {
    /// A missing-field violation.
    #[must_use]
    pub fn missing(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::FieldMissing,
            message: message.into(),
        }
    }

    /// An invalid-value violation.
    #[must_use]
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::FieldInvalid,
            message: message.into(),
        }
    }

    /// A file count/size violation.
    #[must_use]
    pub fn file(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::FileConstraintViolated,
            message: message.into(),
        }
    }

    /// The no-service-selected violation.
    #[must_use]
    pub fn selection(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::ServiceSelectionMissing,
            message: message.into(),
        }
    }
}

/// Violations for one record, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: BTreeMap<FieldKey, Vec<Violation>>,
}

impl FieldErrors {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation against a field.
    pub fn push(&mut self, field: FieldKey, violation: Violation) {
        self.entries.entry(field).or_default().push(violation);
    }

    /// The violations for one field (empty slice if clean).
    #[must_use]
    pub fn get(&self, field: FieldKey) -> &[Violation] {
        self.entries.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether any field has a violation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total violation count across all fields.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterates over `(field, violations)` in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &[Violation])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// The fields that have violations, in order.
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }
}

/// All violations for the whole form, mirroring its nested shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorTree {
    pub vendor: FieldErrors,
    pub services: BTreeMap<ServiceKey, BTreeMap<VehicleId, FieldErrors>>,
}

impl ErrorTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one vehicle's error set. Empty sets are not stored.
    pub fn insert_vehicle(&mut self, key: ServiceKey, id: VehicleId, errors: FieldErrors) {
        if !errors.is_empty() {
            self.services.entry(key).or_default().insert(id, errors);
        }
    }

    /// One vehicle's errors, if any.
    #[must_use]
    pub fn vehicle(&self, key: ServiceKey, id: VehicleId) -> Option<&FieldErrors> {
        self.services.get(&key)?.get(&id)
    }

    /// Drops everything recorded under a service.
    pub fn remove_service(&mut self, key: ServiceKey) {
        self.services.remove(&key);
    }

    /// Drops one vehicle's entry.
    pub fn remove_vehicle(&mut self, key: ServiceKey, id: VehicleId) {
        if let Some(per_vehicle) = self.services.get_mut(&key) {
            per_vehicle.remove(&id);
            if per_vehicle.is_empty() {
                self.services.remove(&key);
            }
        }
    }

    /// Whether the whole tree is clean.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendor.is_empty() && self.services.values().all(BTreeMap::is_empty)
    }

    /// Total violation count across the tree.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.vendor.total()
            + self
                .services
                .values()
                .flat_map(BTreeMap::values)
                .map(FieldErrors::total)
                .sum::<usize>()
    }
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: ErrorTree,
}

impl ValidationReport {
    /// Wraps an error tree, deriving `is_valid`.
    #[must_use]
    pub fn from_errors(errors: ErrorTree) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Which fields the user has interacted with, mirroring the form shape.
///
/// Hosts show a field's errors only once it is touched; `validate` marks
/// everything touched so a failed submit displays every message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TouchedTree {
    vendor: BTreeSet<FieldKey>,
    services: BTreeMap<ServiceKey, BTreeMap<VehicleId, BTreeSet<FieldKey>>>,
}

impl TouchedTree {
    /// Creates a tree with nothing touched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a vendor field touched.
    pub fn touch_vendor(&mut self, field: FieldKey) {
        self.vendor.insert(field);
    }

    /// Marks a vehicle field touched.
    pub fn touch_vehicle(&mut self, key: ServiceKey, id: VehicleId, field: FieldKey) {
        self.services
            .entry(key)
            .or_default()
            .entry(id)
            .or_default()
            .insert(field);
    }

    /// Whether a vendor field is touched.
    #[must_use]
    pub fn is_vendor_touched(&self, field: FieldKey) -> bool {
        self.vendor.contains(field)
    }

    /// Whether a vehicle field is touched.
    #[must_use]
    pub fn is_vehicle_touched(&self, key: ServiceKey, id: VehicleId, field: FieldKey) -> bool {
        self.services
            .get(&key)
            .and_then(|per_vehicle| per_vehicle.get(&id))
            .is_some_and(|fields| fields.contains(field))
    }

    /// Drops everything recorded under a service.
    pub fn remove_service(&mut self, key: ServiceKey) {
        self.services.remove(&key);
    }

    /// Drops one vehicle's entry.
    pub fn remove_vehicle(&mut self, key: ServiceKey, id: VehicleId) {
        if let Some(per_vehicle) = self.services.get_mut(&key) {
            per_vehicle.remove(&id);
            if per_vehicle.is_empty() {
                self.services.remove(&key);
            }
        }
    }
}
