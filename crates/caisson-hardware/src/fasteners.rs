//! Knock-down fastener specifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HardwareLookupError;

/// Knock-down fastener kinds used to join carcass panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastenerKind {
    /// Eccentric cam with connecting bolt.
    CamLock,
    /// Plain wooden dowel.
    Dowel,
    /// One-piece confirmat screw.
    Confirmat,
}

impl fmt::Display for FastenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CamLock => write!(f, "cam-lock"),
            Self::Dowel => write!(f, "dowel"),
            Self::Confirmat => write!(f, "confirmat"),
        }
    }
}

/// Drilling geometry for one fastener kind, millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastenerSpec {
    pub kind: FastenerKind,
    /// Face bore diameter.
    pub diameter_mm: f64,
    /// Face bore depth. A depth of 0.0 means drilled through.
    pub depth_mm: f64,
    /// Inset from the panel's front and back edges to the fastener centers.
    pub edge_inset_mm: f64,
}

/// Catalog of supported fasteners.
static FASTENER_SPECS: &[FastenerSpec] = &[
    FastenerSpec {
        kind: FastenerKind::CamLock,
        diameter_mm: 15.0,
        depth_mm: 13.0,
        edge_inset_mm: 50.0,
    },
    FastenerSpec {
        kind: FastenerKind::Dowel,
        diameter_mm: 8.0,
        depth_mm: 12.0,
        edge_inset_mm: 50.0,
    },
    FastenerSpec {
        kind: FastenerKind::Confirmat,
        diameter_mm: 7.0,
        depth_mm: 0.0,
        edge_inset_mm: 50.0,
    },
];

/// Looks up the drilling specification for a fastener kind.
pub fn lookup_fastener(kind: FastenerKind) -> Result<&'static FastenerSpec, HardwareLookupError> {
    FASTENER_SPECS
        .iter()
        .find(|s| s.kind == kind)
        .ok_or(HardwareLookupError::FastenerNotFound { kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_each_kind() {
        assert_eq!(lookup_fastener(FastenerKind::CamLock).unwrap().diameter_mm, 15.0);
        assert_eq!(lookup_fastener(FastenerKind::Dowel).unwrap().diameter_mm, 8.0);
        let confirmat = lookup_fastener(FastenerKind::Confirmat).unwrap();
        assert_eq!(confirmat.diameter_mm, 7.0);
        // Confirmat is drilled through.
        assert_eq!(confirmat.depth_mm, 0.0);
    }
}
