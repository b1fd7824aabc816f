//! Ordered vehicle collections with stable id allocation

use serde::{Deserialize, Serialize};

use crate::vehicle::{VehicleId, VehiclePatch, VehicleRecord};

/// An ordered collection of vehicle records for one service.
///
/// Ids come from a monotonic per-collection counter and are never reused,
/// so removal never renumbers the survivors. A fresh collection is seeded
/// with one blank record; whether it may become empty afterwards is the
/// session's policy, not the collection's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleCollection {
    vehicles: Vec<VehicleRecord>,
    next_id: u64,
}

impl VehicleCollection {
    /// Creates a collection seeded with one blank record.
    #[must_use]
    pub fn new() -> Self {
        let mut collection = Self {
            vehicles: Vec::new(),
            next_id: 1,
        };
        collection.add();
        collection
    }

    fn allocate(&mut self) -> VehicleId {
        let id = VehicleId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocates a fresh-id blank record without inserting it.
    ///
    /// The caller decides what to do with it; the id is burned either way.
    pub fn create(&mut self) -> VehicleRecord {
        let id = self.allocate();
        VehicleRecord::blank(id)
    }

    /// Appends a fresh blank record and returns its id.
    pub fn add(&mut self) -> VehicleId {
        let record = self.create();
        let id = record.id();
        self.vehicles.push(record);
        id
    }

    /// Removes a record by id, preserving the order of the survivors.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: VehicleId) -> Option<VehicleRecord> {
        let idx = self.vehicles.iter().position(|v| v.id() == id)?;
        Some(self.vehicles.remove(idx))
    }

    /// Applies a single-field patch to exactly one record.
    ///
    /// Returns `false` (no-op) for unknown ids.
    pub fn update(&mut self, id: VehicleId, patch: VehiclePatch) -> bool {
        match self.vehicles.iter_mut().find(|v| v.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Gets a record by id.
    #[must_use]
    pub fn get(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// Whether a record with the given id exists.
    #[must_use]
    pub fn contains(&self, id: VehicleId) -> bool {
        self.vehicles.iter().any(|v| v.id() == id)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.vehicles.iter()
    }

    /// Iterates over the ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.vehicles.iter().map(VehicleRecord::id)
    }

    /// The number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the collection has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for VehicleCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a VehicleCollection {
    type Item = &'a VehicleRecord;
    type IntoIter = std::slice::Iter<'a, VehicleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}
