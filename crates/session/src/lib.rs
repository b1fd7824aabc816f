//! # fleetform-session
//!
//! In-memory form-state and validation engine for a vendor-and-fleet
//! onboarding workflow: a vendor fills in contact details, selects services,
//! and describes one or more vehicles per selected service. The engine keeps
//! the nested, dynamically-sized state consistent, validates it all at once
//! with the exact messages the host form shows, and hands clean snapshots to
//! a submission sink.
//!
//! ```rust
//! use fleetform_session::prelude::*;
//!
//! let mut session = FormSession::new();
//! session.update_vendor_field(VendorPatch::OwnerName("R. Sharma".into()));
//! session.toggle_service(ServiceKey::Cab, true);
//!
//! let report = session.validate();
//! assert!(!report.is_valid); // plenty of fields still blank
//! ```

// SubmitError carries the full error tree by value; the tree is the payload
// the caller needs, so boxing it would only add indirection.
#![allow(clippy::result_large_err)]

pub mod attachment;
pub mod collection;
pub mod locations;
pub mod report;
pub mod rules;
pub mod selection;
pub mod service;
pub mod session;
pub mod vehicle;
pub mod vendor;

pub mod prelude {
    pub use crate::attachment::{DOCUMENT_MAX_BYTES, FileAttachment, PHOTO_MAX_BYTES};
    pub use crate::collection::VehicleCollection;
    pub use crate::locations::LocationCatalog;
    pub use crate::report::{
        ErrorTree, FieldErrors, TouchedTree, ValidationReport, Violation, ViolationKind,
    };
    pub use crate::selection::{SelectionChange, ServiceSelectionState};
    pub use crate::service::{ServiceFlags, ServiceKey};
    pub use crate::session::{
        EmptyServicePolicy, FormSession, SessionPhase, Submission, SubmissionMode, SubmissionSink,
        SubmitError,
    };
    pub use crate::vehicle::{
        AirConditioning, FuelType, VehicleId, VehiclePatch, VehicleRecord, YesNo,
    };
    pub use crate::vendor::{VendorPatch, VendorRecord};
}
