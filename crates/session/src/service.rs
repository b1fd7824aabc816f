//! Service keys and selection flags
//!
//! Five fixed services plus a free-text "others" slot. `other_type` is only
//! meaningful while `others` is checked; toggling `others` off clears it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one offered service.
///
/// Doubles as the key of a per-service vehicle collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKey {
    BikeRental,
    CarRental,
    Bus,
    Coaches,
    Cab,
    /// The dynamic slot, labeled by [`ServiceFlags::other_type`].
    Others,
}

impl ServiceKey {
    /// The five fixed services, in display order.
    pub const FIXED: [Self; 5] = [
        Self::BikeRental,
        Self::CarRental,
        Self::Bus,
        Self::Coaches,
        Self::Cab,
    ];

    /// Stable string form, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BikeRental => "bike_rental",
            Self::CarRental => "car_rental",
            Self::Bus => "bus",
            Self::Coaches => "coaches",
            Self::Cab => "cab",
            Self::Others => "others",
        }
    }

    /// Whether this is one of the five fixed services.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        !matches!(self, Self::Others)
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vendor's service checkboxes plus the "others" description text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlags {
    pub bike_rental: bool,
    pub car_rental: bool,
    pub bus: bool,
    pub coaches: bool,
    pub cab: bool,
    pub others: bool,
    /// Free-text label for the dynamic slot. Cleared when `others` goes off.
    pub other_type: String,
}

impl ServiceFlags {
    /// Creates flags with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the checkbox for a fixed service. `Others` reads the raw
    /// checkbox, ignoring `other_type`.
    #[must_use]
    pub fn flag(&self, key: ServiceKey) -> bool {
        match key {
            ServiceKey::BikeRental => self.bike_rental,
            ServiceKey::CarRental => self.car_rental,
            ServiceKey::Bus => self.bus,
            ServiceKey::Coaches => self.coaches,
            ServiceKey::Cab => self.cab,
            ServiceKey::Others => self.others,
        }
    }

    pub(crate) fn set_flag(&mut self, key: ServiceKey, active: bool) {
        match key {
            ServiceKey::BikeRental => self.bike_rental = active,
            ServiceKey::CarRental => self.car_rental = active,
            ServiceKey::Bus => self.bus = active,
            ServiceKey::Coaches => self.coaches = active,
            ServiceKey::Cab => self.cab = active,
            ServiceKey::Others => self.others = active,
        }
    }

    /// Whether a service warrants a live vehicle collection.
    ///
    /// For `Others` that requires both the checkbox and a non-blank
    /// `other_type`.
    #[must_use]
    pub fn is_active(&self, key: ServiceKey) -> bool {
        match key {
            ServiceKey::Others => self.others && !self.other_type.trim().is_empty(),
            fixed => self.flag(fixed),
        }
    }

    /// Whether the selection satisfies the "at least one service" rule.
    #[must_use]
    pub fn any_selected(&self) -> bool {
        ServiceKey::FIXED.iter().any(|&k| self.flag(k)) || self.is_active(ServiceKey::Others)
    }

    /// Keys that should have a live collection, in display order.
    pub fn active_keys(&self) -> impl Iterator<Item = ServiceKey> + '_ {
        ServiceKey::FIXED
            .into_iter()
            .chain(std::iter::once(ServiceKey::Others))
            .filter(|&k| self.is_active(k))
    }
}
