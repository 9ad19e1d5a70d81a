//! # Caisson Hardware
//!
//! Static specification tables for cabinet hardware: concealed hinge
//! systems (cup, arm, mounting plate), knock-down fasteners, and the
//! 32mm drilling grid used for shelf-pin rows.
//!
//! All tables are compile-time constants. They are read-only for the
//! lifetime of the process and safe to share across threads without
//! synchronization. Lookups fail closed: a combination that is not in the
//! table returns a typed error, never a default specification.

pub mod error;
pub mod fasteners;
pub mod hinges;
pub mod system32;

pub use error::HardwareLookupError;
pub use fasteners::{lookup_fastener, FastenerKind, FastenerSpec};
pub use hinges::{
    hinge_count_for_height, lookup_hinge, vertical_hinge_offsets, HingeAngle, HingeFamily,
    HingeSpec, MountingPlate,
};
