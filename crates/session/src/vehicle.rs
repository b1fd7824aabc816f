//! Vehicle records and single-field patches
//!
//! Numeric fields (`vehicle_age`, `occupants`) are carried as raw text
//! because the host form feeds text; the rules module parses them and folds
//! malformed input into the same invalid-value violation.

use serde::{Deserialize, Serialize};

use crate::attachment::FileAttachment;

/// Stable, opaque identity of a vehicle within one collection.
///
/// Allocated from a per-collection monotonic counter and never reused, so
/// removing a record can never relabel another record's errors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value, for diagnostics.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Yes/no radio choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    No,
}

/// Air-conditioning radio choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirConditioning {
    #[serde(rename = "ac")]
    Ac,
    #[serde(rename = "non-ac")]
    NonAc,
}

/// Fuel-type radio choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
}

/// One vehicle's sub-form.
///
/// Choice fields start as `None` (nothing selected); attachment lists start
/// empty. The id is read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    id: VehicleId,
    pub model_name: String,
    pub vehicle_age: String,
    pub registration_number: String,
    pub occupants: String,
    pub base_location: String,
    pub cities_catered: String,
    pub areas_excluded: String,
    pub music_system: Option<YesNo>,
    pub modifications: Option<YesNo>,
    pub air_conditioning: Option<AirConditioning>,
    pub fuel_type: Option<FuelType>,
    pub photos: Vec<FileAttachment>,
    pub documents: Vec<FileAttachment>,
}

impl VehicleRecord {
    /// Every vehicle field key, in form order.
    pub const FIELD_KEYS: [&'static str; 13] = [
        "model_name",
        "vehicle_age",
        "registration_number",
        "occupants",
        "base_location",
        "cities_catered",
        "areas_excluded",
        "music_system",
        "modifications",
        "air_conditioning",
        "fuel_type",
        "photos",
        "documents",
    ];

    /// Creates a blank record with the given id.
    pub(crate) fn blank(id: VehicleId) -> Self {
        Self {
            id,
            model_name: String::new(),
            vehicle_age: String::new(),
            registration_number: String::new(),
            occupants: String::new(),
            base_location: String::new(),
            cities_catered: String::new(),
            areas_excluded: String::new(),
            music_system: None,
            modifications: None,
            air_conditioning: None,
            fuel_type: None,
            photos: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// The record's stable id.
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Applies a single-field patch. Attachment patches replace the whole
    /// list, mirroring how the file-drop collaborator hands over state.
    pub fn apply(&mut self, patch: VehiclePatch) {
        match patch {
            VehiclePatch::ModelName(v) => self.model_name = v,
            VehiclePatch::VehicleAge(v) => self.vehicle_age = v,
            VehiclePatch::RegistrationNumber(v) => self.registration_number = v,
            VehiclePatch::Occupants(v) => self.occupants = v,
            VehiclePatch::BaseLocation(v) => self.base_location = v,
            VehiclePatch::CitiesCatered(v) => self.cities_catered = v,
            VehiclePatch::AreasExcluded(v) => self.areas_excluded = v,
            VehiclePatch::MusicSystem(v) => self.music_system = v,
            VehiclePatch::Modifications(v) => self.modifications = v,
            VehiclePatch::AirConditioning(v) => self.air_conditioning = v,
            VehiclePatch::FuelType(v) => self.fuel_type = v,
            VehiclePatch::Photos(v) => self.photos = v,
            VehiclePatch::Documents(v) => self.documents = v,
        }
    }
}

/// A single-field update to a vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum VehiclePatch {
    ModelName(String),
    VehicleAge(String),
    RegistrationNumber(String),
    Occupants(String),
    BaseLocation(String),
    CitiesCatered(String),
    AreasExcluded(String),
    MusicSystem(Option<YesNo>),
    Modifications(Option<YesNo>),
    AirConditioning(Option<AirConditioning>),
    FuelType(Option<FuelType>),
    Photos(Vec<FileAttachment>),
    Documents(Vec<FileAttachment>),
}

impl VehiclePatch {
    /// The error/touched-tree key of the field this patch writes.
    #[must_use]
    pub const fn field_key(&self) -> &'static str {
        match self {
            Self::ModelName(_) => "model_name",
            Self::VehicleAge(_) => "vehicle_age",
            Self::RegistrationNumber(_) => "registration_number",
            Self::Occupants(_) => "occupants",
            Self::BaseLocation(_) => "base_location",
            Self::CitiesCatered(_) => "cities_catered",
            Self::AreasExcluded(_) => "areas_excluded",
            Self::MusicSystem(_) => "music_system",
            Self::Modifications(_) => "modifications",
            Self::AirConditioning(_) => "air_conditioning",
            Self::FuelType(_) => "fuel_type",
            Self::Photos(_) => "photos",
            Self::Documents(_) => "documents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_has_nothing_filled() {
        let v = VehicleRecord::blank(VehicleId::new(1));
        assert_eq!(v.id().value(), 1);
        assert_eq!(v.model_name, "");
        assert!(v.music_system.is_none());
        assert!(v.photos.is_empty());
    }

    #[test]
    fn apply_replaces_one_field() {
        let mut v = VehicleRecord::blank(VehicleId::new(1));
        v.apply(VehiclePatch::ModelName("Swift Dzire".into()));
        v.apply(VehiclePatch::FuelType(Some(FuelType::Diesel)));

        assert_eq!(v.model_name, "Swift Dzire");
        assert_eq!(v.fuel_type, Some(FuelType::Diesel));
        assert_eq!(v.vehicle_age, "");
    }

    #[test]
    fn photo_patch_replaces_the_whole_list() {
        let mut v = VehicleRecord::blank(VehicleId::new(1));
        v.apply(VehiclePatch::Photos(vec![
            FileAttachment::new("a.jpg", 10, "h1"),
            FileAttachment::new("b.jpg", 20, "h2"),
        ]));
        v.apply(VehiclePatch::Photos(vec![FileAttachment::new(
            "c.jpg", 30, "h3",
        )]));

        assert_eq!(v.photos.len(), 1);
        assert_eq!(v.photos[0].name, "c.jpg");
    }

    #[test]
    fn choice_serde_values_match_the_form() {
        assert_eq!(serde_json::to_value(YesNo::Yes).unwrap(), "yes");
        assert_eq!(serde_json::to_value(AirConditioning::NonAc).unwrap(), "non-ac");
        assert_eq!(serde_json::to_value(FuelType::Cng).unwrap(), "cng");
    }
}
