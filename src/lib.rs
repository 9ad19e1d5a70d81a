//! # Caisson
//!
//! Cabinet decomposition and hardware-drilling engine. Given a cabinet's
//! external dimensions, material thicknesses, and a hinge/fitting
//! selection, caisson decomposes the cabinet into flat panels, computes
//! millimeter-exact drilling coordinates against the hardware
//! specification tables, and emits layered vector documents ready for
//! CNC import.
//!
//! The engine is pure and synchronous: an immutable [`CabinetConfig`] in,
//! a fresh result graph out. Multiple cabinets are safely computable in
//! parallel by the caller with no coordination.
//!
//! ```
//! use caisson::{process_cabinet, CabinetConfig};
//!
//! let output = process_cabinet(&CabinetConfig::default());
//! assert!(output.decomposition.findings.is_empty());
//! assert_eq!(output.documents.len(), output.decomposition.panels.len());
//! ```

pub use caisson_core::{PanelId, PointMm};
pub use caisson_engine::{
    compute_drillings, decompose, to_line_items, AssemblyStyle, CabinetConfig, CabinetFamily,
    ConfigError, DecompositionResult, DoorLayout, DrillPurpose, DrillingPlan, DrillingPoint,
    EdgeBanding, ExternalLineItem, Finding, GeometryConflictError, HingedEdge, Panel,
    PanelRole, RoleThicknesses, Severity,
};
pub use caisson_geometry::{
    generate_document, to_drawing, write_dxf, GeometryError, LayerKind, VectorPanelDocument,
};
pub use caisson_hardware::{
    hinge_count_for_height, lookup_fastener, lookup_hinge, vertical_hinge_offsets, FastenerKind,
    HardwareLookupError, HingeAngle, HingeFamily, HingeSpec, MountingPlate,
};

use serde::{Deserialize, Serialize};

/// Output of the full pipeline for one cabinet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetOutput {
    pub decomposition: DecompositionResult,
    pub drillings: DrillingPlan,
    /// One document per panel. Panels with geometry conflicts are
    /// withheld here and surface through [`DrillingPlan::errors`] instead.
    pub documents: Vec<VectorPanelDocument>,
}

/// Runs the full one-directional pipeline: decomposition, drilling,
/// vector documents.
pub fn process_cabinet(config: &CabinetConfig) -> CabinetOutput {
    let decomposition = decompose(config);
    let drillings = compute_drillings(&decomposition.panels, config);

    let mut documents = Vec::new();
    for panel in &decomposition.panels {
        if drillings.panel_has_conflict(panel.id) {
            tracing::warn!(panel = %panel.id, role = %panel.role, "document withheld, unresolved geometry conflict");
            continue;
        }
        // Decomposition guarantees positive dimensions, so generation
        // only fails on a broken internal contract.
        match generate_document(panel, drillings.points_for(panel.id)) {
            Ok(doc) => documents.push(doc),
            Err(error) => {
                tracing::error!(panel = %panel.id, %error, "document generation failed");
            }
        }
    }

    CabinetOutput {
        decomposition,
        drillings,
        documents,
    }
}
