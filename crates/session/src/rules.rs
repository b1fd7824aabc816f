//! Field rules for vendor and vehicle records
//!
//! Pure and deterministic: no I/O, no short-circuit. One pass over a record
//! collects every violation, with the exact messages the host form shows.

use std::sync::LazyLock;

use fleetform_validator::prelude::*;

use crate::attachment::{DOCUMENT_MAX_BYTES, FileAttachment, PHOTO_MAX_BYTES};
use crate::report::{FieldErrors, FieldKey, Violation};
use crate::service::ServiceFlags;
use crate::vehicle::VehicleRecord;
use crate::vendor::VendorRecord;

// Exactly ten decimal digits; the pattern is a literal and always compiles.
static CONTACT_NUMBER: LazyLock<Matches> =
    LazyLock::new(|| Matches::new("^[0-9]{10}$").expect("literal pattern compiles"));

validator! {
    /// Caps one attachment's reported size.
    MaxBytes { limit: u64 } for FileAttachment;
    rule(self, input) { input.size_bytes <= self.limit }
    error(self, input) {
        ValidationError::new("max_bytes", format!("File exceeds {} bytes", self.limit))
            .with_param("limit", self.limit.to_string())
            .with_param("actual", input.size_bytes.to_string())
    }
    fn max_bytes(limit: u64);
}

fn require_text(errors: &mut FieldErrors, field: FieldKey, value: &str, message: &'static str) {
    if not_empty().validate(value).is_err() {
        errors.push(field, Violation::missing(message));
    }
}

/// Raw text that must parse as an integer ≥ 1. Blank is "missing";
/// unparseable or below one is "invalid".
fn require_positive_int(
    errors: &mut FieldErrors,
    field: FieldKey,
    raw: &str,
    missing: &'static str,
    invalid: &'static str,
) {
    if not_empty().validate(raw).is_err() {
        errors.push(field, Violation::missing(missing));
        return;
    }
    let ok = raw
        .trim()
        .parse::<u64>()
        .is_ok_and(|n| min(1_u64).validate(&n).is_ok());
    if !ok {
        errors.push(field, Violation::invalid(invalid));
    }
}

fn require_choice<T>(
    errors: &mut FieldErrors,
    field: FieldKey,
    value: &Option<T>,
    message: &'static str,
) {
    if required::<T>().validate(value).is_err() {
        errors.push(field, Violation::missing(message));
    }
}

fn check_attachments(
    errors: &mut FieldErrors,
    field: FieldKey,
    files: &[FileAttachment],
    limit: u64,
    missing: &'static str,
    oversized: &'static str,
) {
    if min_size::<FileAttachment>(1).validate(files).is_err() {
        errors.push(field, Violation::file(missing));
    }
    if each(max_bytes(limit)).validate(files).is_err() {
        errors.push(field, Violation::file(oversized));
    }
}

/// Collects every violation on one vehicle record.
#[must_use]
pub fn validate_vehicle(vehicle: &VehicleRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require_text(
        &mut errors,
        "model_name",
        &vehicle.model_name,
        "Model Name is required",
    );
    require_positive_int(
        &mut errors,
        "vehicle_age",
        &vehicle.vehicle_age,
        "Vehicle Age is required",
        "Invalid age",
    );
    require_text(
        &mut errors,
        "registration_number",
        &vehicle.registration_number,
        "Registration Number is required",
    );
    require_positive_int(
        &mut errors,
        "occupants",
        &vehicle.occupants,
        "Occupants is required",
        "At least one occupant is required",
    );
    require_text(
        &mut errors,
        "base_location",
        &vehicle.base_location,
        "Base Location is required",
    );
    require_text(
        &mut errors,
        "cities_catered",
        &vehicle.cities_catered,
        "Cities Catered is required",
    );
    // areas_excluded is optional

    require_choice(
        &mut errors,
        "music_system",
        &vehicle.music_system,
        "This field is required",
    );
    require_choice(
        &mut errors,
        "modifications",
        &vehicle.modifications,
        "This field is required",
    );
    require_choice(
        &mut errors,
        "air_conditioning",
        &vehicle.air_conditioning,
        "This field is required",
    );
    require_choice(
        &mut errors,
        "fuel_type",
        &vehicle.fuel_type,
        "Fuel Type is required",
    );

    check_attachments(
        &mut errors,
        "photos",
        &vehicle.photos,
        PHOTO_MAX_BYTES,
        "At least one photo is required",
        "Photo size must be less than 2MB",
    );
    check_attachments(
        &mut errors,
        "documents",
        &vehicle.documents,
        DOCUMENT_MAX_BYTES,
        "At least one document is required",
        "Document size must be less than 5MB",
    );

    errors
}

/// Collects every violation on the vendor record, including the
/// at-least-one-service rule keyed to the pseudo-field `services`.
#[must_use]
pub fn validate_vendor(vendor: &VendorRecord, flags: &ServiceFlags) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require_text(
        &mut errors,
        "owner_name",
        &vendor.owner_name,
        "Owner name is required.",
    );
    if CONTACT_NUMBER.validate(&vendor.contact_number).is_err() {
        errors.push(
            "contact_number",
            Violation::invalid("A valid contact number is required."),
        );
    }
    require_text(
        &mut errors,
        "address",
        &vendor.address,
        "Address is required.",
    );
    if !flags.any_selected() {
        errors.push(
            "services",
            Violation::selection("At least one service is required."),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ViolationKind;
    use crate::service::ServiceKey;
    use crate::vehicle::{AirConditioning, FuelType, VehicleId, YesNo};
    use rstest::rstest;

    fn filled_vehicle() -> VehicleRecord {
        let mut v = VehicleRecord::blank(VehicleId::new(1));
        v.model_name = "Swift Dzire".into();
        v.vehicle_age = "3".into();
        v.registration_number = "KL-07-AB-1234".into();
        v.occupants = "4".into();
        v.base_location = "Ernakulam".into();
        v.cities_catered = "Kochi, Thrissur".into();
        v.music_system = Some(YesNo::Yes);
        v.modifications = Some(YesNo::No);
        v.air_conditioning = Some(AirConditioning::Ac);
        v.fuel_type = Some(FuelType::Diesel);
        v.photos = vec![FileAttachment::new("front.jpg", 500_000, "h1")];
        v.documents = vec![FileAttachment::new("rc.pdf", 900_000, "h2")];
        v
    }

    fn filled_vendor() -> VendorRecord {
        VendorRecord {
            company_name: String::new(),
            owner_name: "R. Sharma".into(),
            contact_number: "9876543210".into(),
            address: "12 MG Road".into(),
        }
    }

    fn active_flags() -> ServiceFlags {
        let mut flags = ServiceFlags::new();
        flags.set_flag(ServiceKey::Cab, true);
        flags
    }

    #[test]
    fn complete_vehicle_is_clean() {
        assert!(validate_vehicle(&filled_vehicle()).is_empty());
    }

    #[test]
    fn blank_vehicle_reports_every_required_field() {
        let errors = validate_vehicle(&VehicleRecord::blank(VehicleId::new(1)));
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                "air_conditioning",
                "base_location",
                "cities_catered",
                "documents",
                "fuel_type",
                "model_name",
                "modifications",
                "music_system",
                "occupants",
                "photos",
                "registration_number",
                "vehicle_age",
            ]
        );
        assert!(errors.get("areas_excluded").is_empty());
    }

    #[test]
    fn required_messages_match_the_form() {
        let errors = validate_vehicle(&VehicleRecord::blank(VehicleId::new(1)));
        assert_eq!(errors.get("model_name")[0].message, "Model Name is required");
        assert_eq!(errors.get("vehicle_age")[0].message, "Vehicle Age is required");
        assert_eq!(errors.get("occupants")[0].message, "Occupants is required");
        assert_eq!(errors.get("fuel_type")[0].message, "Fuel Type is required");
        assert_eq!(errors.get("music_system")[0].message, "This field is required");
        assert_eq!(errors.get("photos")[0].message, "At least one photo is required");
        assert_eq!(
            errors.get("documents")[0].message,
            "At least one document is required"
        );
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("three")]
    #[case("2.5")]
    fn bad_vehicle_age_is_invalid(#[case] raw: &str) {
        let mut v = filled_vehicle();
        v.vehicle_age = raw.into();
        let errors = validate_vehicle(&v);
        assert_eq!(errors.get("vehicle_age")[0].message, "Invalid age");
        assert_eq!(errors.get("vehicle_age")[0].kind, ViolationKind::FieldInvalid);
    }

    #[rstest]
    #[case("0")]
    #[case("abc")]
    fn bad_occupants_is_invalid(#[case] raw: &str) {
        let mut v = filled_vehicle();
        v.occupants = raw.into();
        let errors = validate_vehicle(&v);
        assert_eq!(
            errors.get("occupants")[0].message,
            "At least one occupant is required"
        );
    }

    #[test]
    fn photo_at_the_limit_passes() {
        let mut v = filled_vehicle();
        v.photos = vec![FileAttachment::new("big.jpg", PHOTO_MAX_BYTES, "h")];
        assert!(validate_vehicle(&v).get("photos").is_empty());
    }

    #[test]
    fn photo_one_byte_over_fails() {
        let mut v = filled_vehicle();
        v.photos = vec![FileAttachment::new("big.jpg", PHOTO_MAX_BYTES + 1, "h")];
        let errors = validate_vehicle(&v);
        assert_eq!(
            errors.get("photos")[0].message,
            "Photo size must be less than 2MB"
        );
        assert_eq!(
            errors.get("photos")[0].kind,
            ViolationKind::FileConstraintViolated
        );
    }

    #[test]
    fn one_oversized_document_among_many_fails() {
        let mut v = filled_vehicle();
        v.documents = vec![
            FileAttachment::new("ok.pdf", 1_000, "h1"),
            FileAttachment::new("huge.pdf", DOCUMENT_MAX_BYTES + 1, "h2"),
        ];
        let errors = validate_vehicle(&v);
        assert_eq!(
            errors.get("documents")[0].message,
            "Document size must be less than 5MB"
        );
    }

    #[test]
    fn complete_vendor_is_clean() {
        assert!(validate_vendor(&filled_vendor(), &active_flags()).is_empty());
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("12345", false)]
    #[case("12345678901", false)]
    #[case("12a4567890", false)]
    #[case("", false)]
    fn contact_number_table(#[case] raw: &str, #[case] ok: bool) {
        let mut vendor = filled_vendor();
        vendor.contact_number = raw.into();
        let errors = validate_vendor(&vendor, &active_flags());
        assert_eq!(errors.get("contact_number").is_empty(), ok);
        if !ok {
            assert_eq!(
                errors.get("contact_number")[0].message,
                "A valid contact number is required."
            );
        }
    }

    #[test]
    fn no_service_selected_is_a_vendor_violation() {
        let errors = validate_vendor(&filled_vendor(), &ServiceFlags::new());
        assert_eq!(
            errors.get("services")[0].kind,
            ViolationKind::ServiceSelectionMissing
        );
        assert_eq!(
            errors.get("services")[0].message,
            "At least one service is required."
        );
    }

    #[test]
    fn others_with_label_satisfies_the_service_rule() {
        let mut flags = ServiceFlags::new();
        flags.others = true;
        flags.other_type = "Tempo Traveller".into();
        assert!(validate_vendor(&filled_vendor(), &flags).is_empty());
    }
}
