//! Error types for hardware catalog lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fasteners::FastenerKind;
use crate::hinges::{HingeAngle, HingeFamily, MountingPlate};

/// A hardware combination is absent from the specification tables.
///
/// Lookups fail closed: the caller gets this error scoped to the affected
/// panel, never a silently substituted specification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareLookupError {
    /// No hinge system exists for this family/angle/plate combination.
    #[error("no hinge specification for family '{family}' at {angle} on '{plate}' plate")]
    HingeNotFound {
        family: HingeFamily,
        angle: HingeAngle,
        plate: MountingPlate,
    },

    /// No fastener specification exists for this kind.
    #[error("no fastener specification for '{kind}'")]
    FastenerNotFound { kind: FastenerKind },
}

/// Result type alias for hardware lookups.
pub type HardwareResult<T> = Result<T, HardwareLookupError>;
