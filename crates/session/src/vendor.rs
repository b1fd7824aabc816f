//! Vendor company and contact details

use serde::{Deserialize, Serialize};

/// The vendor's company and contact fields.
///
/// Created empty at session start and mutated field-by-field via
/// [`VendorPatch`]. `company_name` may legitimately stay empty; the other
/// fields are enforced at validation time by the rules module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub company_name: String,
    pub owner_name: String,
    pub contact_number: String,
    pub address: String,
}

impl VendorRecord {
    /// Every vendor field key, plus the pseudo-field carrying the
    /// service-selection rule.
    pub const FIELD_KEYS: [&'static str; 5] = [
        "company_name",
        "owner_name",
        "contact_number",
        "address",
        "services",
    ];

    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single-field patch.
    pub fn apply(&mut self, patch: VendorPatch) {
        match patch {
            VendorPatch::CompanyName(v) => self.company_name = v,
            VendorPatch::OwnerName(v) => self.owner_name = v,
            VendorPatch::ContactNumber(v) => self.contact_number = v,
            VendorPatch::Address(v) => self.address = v,
        }
    }
}

/// A single-field update to the vendor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum VendorPatch {
    CompanyName(String),
    OwnerName(String),
    ContactNumber(String),
    Address(String),
}

impl VendorPatch {
    /// The error/touched-tree key of the field this patch writes.
    #[must_use]
    pub const fn field_key(&self) -> &'static str {
        match self {
            Self::CompanyName(_) => "company_name",
            Self::OwnerName(_) => "owner_name",
            Self::ContactNumber(_) => "contact_number",
            Self::Address(_) => "address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_writes_exactly_one_field() {
        let mut vendor = VendorRecord::new();
        vendor.apply(VendorPatch::OwnerName("R. Sharma".into()));

        assert_eq!(vendor.owner_name, "R. Sharma");
        assert_eq!(vendor.company_name, "");
        assert_eq!(vendor.contact_number, "");
        assert_eq!(vendor.address, "");
    }

    #[test]
    fn patch_field_keys() {
        assert_eq!(VendorPatch::Address(String::new()).field_key(), "address");
        assert_eq!(
            VendorPatch::ContactNumber(String::new()).field_key(),
            "contact_number"
        );
    }
}
