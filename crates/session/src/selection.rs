//! Service selection and the per-service vehicle collections
//!
//! Single authority for which services are active: the checkbox flags and
//! the set of live collections are reconciled here after every change, so
//! they can never drift apart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::VehicleCollection;
use crate::service::{ServiceFlags, ServiceKey};

/// What a selection operation did to the set of live collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// Keys that gained a fresh single-record collection.
    pub activated: Vec<ServiceKey>,
    /// Keys whose collection (and dependent state) was discarded.
    pub discarded: Vec<ServiceKey>,
}

impl SelectionChange {
    /// Whether the operation changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty() && self.discarded.is_empty()
    }
}

/// The service checkboxes plus one vehicle collection per active service.
///
/// Invariant after every operation: the set of keys with a live collection
/// equals the set of flags-active keys (for `Others`, checkbox and non-blank
/// `other_type` together).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSelectionState {
    flags: ServiceFlags,
    collections: IndexMap<ServiceKey, VehicleCollection>,
}

impl ServiceSelectionState {
    /// Creates a selection with nothing active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current checkbox state.
    #[must_use]
    pub fn flags(&self) -> &ServiceFlags {
        &self.flags
    }

    /// Turns a service on or off.
    ///
    /// Turning on seeds a fresh single-record collection; turning off
    /// discards the collection and everything in it. For
    /// [`ServiceKey::Others`] this behaves like [`toggle_others`].
    ///
    /// [`toggle_others`]: Self::toggle_others
    pub fn toggle_service(&mut self, key: ServiceKey, active: bool) -> SelectionChange {
        if key == ServiceKey::Others {
            return self.toggle_others(active);
        }
        self.flags.set_flag(key, active);
        self.reconcile()
    }

    /// Turns the "others" slot on or off. Deactivating always clears
    /// `other_type`.
    pub fn toggle_others(&mut self, active: bool) -> SelectionChange {
        self.flags.others = active;
        if !active {
            self.flags.other_type.clear();
        }
        self.reconcile()
    }

    /// Stores the "others" description text.
    ///
    /// While the slot is active, a non-blank text creates the collection
    /// and a blank text discards it. While inactive the text is stored but
    /// has no further effect; a later activation picks it up.
    pub fn set_other_type(&mut self, text: impl Into<String>) -> SelectionChange {
        self.flags.other_type = text.into();
        self.reconcile()
    }

    /// The collection for an active service.
    #[must_use]
    pub fn collection(&self, key: ServiceKey) -> Option<&VehicleCollection> {
        self.collections.get(&key)
    }

    /// Mutable access for the session's named operations.
    pub(crate) fn collection_mut(&mut self, key: ServiceKey) -> Option<&mut VehicleCollection> {
        self.collections.get_mut(&key)
    }

    /// Active service keys in activation order.
    pub fn active_services(&self) -> impl Iterator<Item = ServiceKey> + '_ {
        self.collections.keys().copied()
    }

    /// `(key, collection)` pairs in activation order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceKey, &VehicleCollection)> {
        self.collections.iter().map(|(k, c)| (*k, c))
    }

    /// Brings the collection set in line with the flags and reports the
    /// difference.
    fn reconcile(&mut self) -> SelectionChange {
        let mut change = SelectionChange::default();

        let desired: Vec<ServiceKey> = self.flags.active_keys().collect();

        let stale: Vec<ServiceKey> = self
            .collections
            .keys()
            .copied()
            .filter(|k| !desired.contains(k))
            .collect();
        for key in stale {
            self.collections.shift_remove(&key);
            debug!(service = %key, "service deactivated, collection discarded");
            change.discarded.push(key);
        }

        for key in desired {
            if !self.collections.contains_key(&key) {
                self.collections.insert(key, VehicleCollection::new());
                debug!(service = %key, "service activated, collection seeded");
                change.activated.push(key);
            }
        }

        self.assert_consistent();
        change
    }

    fn assert_consistent(&self) {
        debug_assert!(
            self.collections
                .keys()
                .all(|&k| self.flags.is_active(k)),
            "live collection without an active flag"
        );
        debug_assert!(
            self.flags
                .active_keys()
                .all(|k| self.collections.contains_key(&k)),
            "active flag without a live collection"
        );
    }
}
