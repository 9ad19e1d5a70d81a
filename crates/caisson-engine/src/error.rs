//! Error and finding types for the engine.
//!
//! Three kinds, per the engine's contract:
//! - configuration problems are collected as [`Finding`]s and returned
//!   alongside a best-effort result, never thrown mid-computation;
//! - hardware lookup misses are scoped to the affected panel;
//! - geometry conflicts withhold vector output for one panel without
//!   aborting the batch.

use caisson_hardware::HardwareLookupError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drilling::DrillPurpose;
use crate::panel::PanelRole;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Worth surfacing, but the panel is still producible.
    Warning,
    /// The affected part of the result must not be manufactured.
    Error,
}

/// A single configuration validation problem.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("dimension '{name}' out of range: {value_mm}mm (valid: {min_mm}mm..{max_mm}mm)")]
    DimensionOutOfRange {
        name: String,
        value_mm: f64,
        min_mm: f64,
        max_mm: f64,
    },

    #[error("thickness '{role}' out of range: {value_mm}mm (valid: {min_mm}mm..{max_mm}mm)")]
    ThicknessOutOfRange {
        role: String,
        value_mm: f64,
        min_mm: f64,
        max_mm: f64,
    },

    #[error("thickness '{role}' ({value_mm}mm) does not fit inside the {dimension_mm}mm external dimension")]
    ThicknessExceedsDimension {
        role: String,
        value_mm: f64,
        dimension_mm: f64,
    },

    #[error("{family} cabinet cannot carry this layout: {detail}")]
    IncompatibleLayout { family: String, detail: String },

    #[error("{count} drawer fronts do not fit a {height_mm}mm cabinet: each front would be {front_mm:.1}mm tall")]
    DrawerCountExceedsHeight {
        count: u32,
        height_mm: f64,
        front_mm: f64,
    },
}

/// A finding attached to a decomposition result.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Finding {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured hardware does not resolve; affected panels are
    /// flagged instead of silently built.
    #[error("panel '{role}': {source}")]
    Hardware {
        role: PanelRole,
        source: HardwareLookupError,
    },

    /// The door is shorter or taller than the resolved hinge is rated for.
    #[error("panel '{role}': {height_mm:.0}mm door is outside the hinge rating {min_mm:.0}mm..{max_mm:.0}mm")]
    DoorOutsideHingeRating {
        role: PanelRole,
        height_mm: f64,
        min_mm: f64,
        max_mm: f64,
    },

    /// The panel is producible but likely uneconomical.
    #[error("panel '{role}' surface {area_m2:.4}m² is below the minimum usable area {min_area_m2:.4}m²")]
    SmallPanel {
        role: PanelRole,
        area_m2: f64,
        min_area_m2: f64,
    },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::Config(_)
            | Finding::Hardware { .. }
            | Finding::DoorOutsideHingeRating { .. } => Severity::Error,
            Finding::SmallPanel { .. } => Severity::Warning,
        }
    }
}

/// A drilling coordinate that cannot be machined as computed.
///
/// Never silently clipped: the offending point is reported with full
/// coordinates so the conflict can be traced to a hardware rule.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryConflictError {
    #[error("{purpose_a} at ({x_a:.1}, {y_a:.1}) and {purpose_b} at ({x_b:.1}, {y_b:.1}) are {distance_mm:.1}mm apart, these bores need {min_clearance_mm:.1}mm between centers")]
    PointsTooClose {
        purpose_a: DrillPurpose,
        x_a: f64,
        y_a: f64,
        purpose_b: DrillPurpose,
        x_b: f64,
        y_b: f64,
        distance_mm: f64,
        min_clearance_mm: f64,
    },

    #[error("{purpose} bore at ({x:.1}, {y:.1}) falls outside the {length_mm:.0}x{width_mm:.0}mm panel")]
    OutOfBounds {
        purpose: DrillPurpose,
        x: f64,
        y: f64,
        length_mm: f64,
        width_mm: f64,
    },

    #[error("{purpose} bore at ({x:.1}, {y:.1}) leaves less than {min_clearance_mm:.1}mm of material to the panel edge")]
    EdgeClearance {
        purpose: DrillPurpose,
        x: f64,
        y: f64,
        min_clearance_mm: f64,
    },
}

/// Per-panel error raised during drilling computation.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrillingError {
    #[error(transparent)]
    Hardware(#[from] HardwareLookupError),

    /// The hinge resolves but is not rated for this door height; its
    /// drilling pattern is withheld rather than drilled out of rating.
    #[error("{height_mm:.0}mm door is outside the hinge rating {min_mm:.0}mm..{max_mm:.0}mm")]
    HingeRating {
        height_mm: f64,
        min_mm: f64,
        max_mm: f64,
    },

    #[error(transparent)]
    Conflict(#[from] GeometryConflictError),
}
