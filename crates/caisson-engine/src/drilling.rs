//! Drilling position calculation.
//!
//! Converts panel roles plus the configured hinge/fastener selection into
//! absolute drill coordinates per panel. Every coordinate is an additive
//! offset from the panel's bottom-left corner in its internal-face view;
//! nothing is ever measured "from center", so mirrored panels cannot pick
//! up sign errors.

use std::collections::HashMap;

use caisson_core::{PanelId, PointMm};
use caisson_hardware::system32::{
    MIN_DRILL_CLEARANCE_MM, MIN_EDGE_CLEARANCE_MM, SHELF_PIN_DEPTH_MM, SHELF_PIN_DIAMETER_MM,
    SHELF_PIN_END_MARGIN_MM, SHELF_PIN_ROW_SETBACK_MM, SYSTEM32_PITCH_MM,
};
use caisson_hardware::{lookup_fastener, lookup_hinge, vertical_hinge_offsets, HingeSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{AssemblyStyle, CabinetConfig, CabinetFamily, DoorLayout};
use crate::decompose::{door_height_mm, DOOR_REVEAL_MM};
use crate::error::{DrillingError, GeometryConflictError};
use crate::panel::{HingedEdge, Panel, PanelRole};

/// What a bore is for. Doubles as the vector-layer key downstream, so the
/// names are a stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillPurpose {
    HingeCup,
    MountingPlate,
    ShelfPin,
    Fastener,
}

impl DrillPurpose {
    /// Stable tag name. CNC post-processors key off these; do not rename.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HingeCup => "hinge-cup",
            Self::MountingPlate => "mounting-plate",
            Self::ShelfPin => "shelf-pin",
            Self::Fastener => "fastener",
        }
    }
}

impl fmt::Display for DrillPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One bore on one panel face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillingPoint {
    /// Millimeters from the panel's left edge (internal-face view).
    pub x_mm: f64,
    /// Millimeters from the panel's bottom edge.
    pub y_mm: f64,
    pub diameter_mm: f64,
    /// Bore depth; 0.0 means drilled through.
    pub depth_mm: f64,
    pub purpose: DrillPurpose,
}

impl DrillingPoint {
    pub fn center(&self) -> PointMm {
        PointMm::new(self.x_mm, self.y_mm)
    }
}

/// A drilling error attributed to one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDrillingError {
    pub panel: PanelId,
    pub role: PanelRole,
    pub error: DrillingError,
}

/// Drilling coordinates for every panel of one cabinet, plus the errors
/// scoped to the panels they occurred on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillingPlan {
    pub points: HashMap<PanelId, Vec<DrillingPoint>>,
    pub errors: Vec<PanelDrillingError>,
}

impl DrillingPlan {
    /// True when the panel has at least one geometry conflict and its
    /// vector output must be withheld.
    pub fn panel_has_conflict(&self, panel: PanelId) -> bool {
        self.errors
            .iter()
            .any(|e| e.panel == panel && matches!(e.error, DrillingError::Conflict(_)))
    }

    pub fn points_for(&self, panel: PanelId) -> &[DrillingPoint] {
        self.points.get(&panel).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Computes drilling coordinates for every panel.
///
/// Unknown hardware combinations produce a per-panel error entry; all
/// other panels still compute normally.
pub fn compute_drillings(panels: &[Panel], config: &CabinetConfig) -> DrillingPlan {
    let mut plan = DrillingPlan::default();

    for panel in panels {
        let mut points = Vec::new();

        match panel.role {
            PanelRole::Door => match resolve_door_hinge(config) {
                Ok(spec) => door_hinge_cups(panel, spec, &mut points),
                Err(error) => plan.errors.push(PanelDrillingError {
                    panel: panel.id,
                    role: panel.role,
                    error,
                }),
            },
            PanelRole::Side => {
                side_panel_drillings(panel, config, &mut points, &mut plan.errors);
            }
            PanelRole::Top | PanelRole::Bottom => {
                if config.assembly == AssemblyStyle::Rebated {
                    horizontal_panel_fasteners(panel, config, &mut points, &mut plan.errors);
                }
            }
            _ => {}
        }

        for conflict in validate_points(panel, &points) {
            tracing::warn!(panel = %panel.id, role = %panel.role, %conflict, "geometry conflict");
            plan.errors.push(PanelDrillingError {
                panel: panel.id,
                role: panel.role,
                error: conflict.into(),
            });
        }

        plan.points.insert(panel.id, points);
    }

    plan
}

/// Resolves the configured hinge and checks it against the door height
/// it is rated for. Both the door cups and the side plates hang off the
/// same resolution, so a rating miss withholds both patterns.
fn resolve_door_hinge(config: &CabinetConfig) -> Result<&'static HingeSpec, DrillingError> {
    let spec = lookup_hinge(config.hinge_family, config.hinge_angle, config.mounting_plate)?;
    let height = door_height_mm(config);
    if height < spec.min_door_height_mm || height > spec.max_door_height_mm {
        return Err(DrillingError::HingeRating {
            height_mm: height,
            min_mm: spec.min_door_height_mm,
            max_mm: spec.max_door_height_mm,
        });
    }
    Ok(spec)
}

/// Cup bores on a door. X is measured from the hinged edge, never from
/// the opposite one.
fn door_hinge_cups(panel: &Panel, spec: &HingeSpec, points: &mut Vec<DrillingPoint>) {
    let count = panel.hinge_count.max(2);
    // Decomposition always assigns the hinged edge together with the role.
    let x = match panel.hinged_edge.expect("door panel without a hinged edge") {
        HingedEdge::Left => spec.cup_edge_offset_mm,
        HingedEdge::Right => panel.length_mm - spec.cup_edge_offset_mm,
    };
    for y in vertical_hinge_offsets(panel.width_mm, count) {
        points.push(DrillingPoint {
            x_mm: x,
            y_mm: y,
            diameter_mm: spec.cup_diameter_mm,
            depth_mm: spec.cup_depth_mm,
            purpose: DrillPurpose::HingeCup,
        });
    }
}

fn side_panel_drillings(
    panel: &Panel,
    config: &CabinetConfig,
    points: &mut Vec<DrillingPoint>,
    errors: &mut Vec<PanelDrillingError>,
) {
    // Mounting plates mirror the door's hinge offsets onto the side.
    if config.doors != DoorLayout::None && config.family != CabinetFamily::DrawerUnit {
        match resolve_door_hinge(config) {
            Ok(spec) => mounting_plates(config, spec, points),
            Err(error) => errors.push(PanelDrillingError {
                panel: panel.id,
                role: panel.role,
                error,
            }),
        }
    }

    if config.shelf_pin_rows && config.family != CabinetFamily::DrawerUnit {
        shelf_pin_rows(panel, points);
    }

    if config.assembly == AssemblyStyle::Butt {
        match lookup_fastener(config.fastener) {
            Ok(spec) => {
                // Two fasteners per horizontal joint, top and bottom.
                let t = config.thickness.carcass_mm;
                for y in [t / 2.0, panel.width_mm - t / 2.0] {
                    for x in [spec.edge_inset_mm, panel.length_mm - spec.edge_inset_mm] {
                        points.push(DrillingPoint {
                            x_mm: x,
                            y_mm: y,
                            diameter_mm: spec.diameter_mm,
                            depth_mm: spec.depth_mm,
                            purpose: DrillPurpose::Fastener,
                        });
                    }
                }
            }
            Err(source) => errors.push(PanelDrillingError {
                panel: panel.id,
                role: panel.role,
                error: source.into(),
            }),
        }
    }
}

/// Mounting-plate system holes on a side panel: the door's vertical hinge
/// offsets shifted by the door reveal, two euro-screw holes per hinge,
/// X at the plate's own edge offset from the front edge.
fn mounting_plates(config: &CabinetConfig, spec: &HingeSpec, points: &mut Vec<DrillingPoint>) {
    let door_height = door_height_mm(config);
    let count = caisson_hardware::hinge_count_for_height(door_height);
    // Rebated sides are shorter than the cabinet; their y origin sits one
    // carcass thickness above the cabinet bottom.
    let side_bottom_offset = match config.assembly {
        AssemblyStyle::Butt => 0.0,
        AssemblyStyle::Rebated => config.thickness.carcass_mm,
    };
    for door_y in vertical_hinge_offsets(door_height, count) {
        let hinge_y = door_y + DOOR_REVEAL_MM - side_bottom_offset;
        for y in [
            hinge_y - spec.plate_hole_spacing_mm / 2.0,
            hinge_y + spec.plate_hole_spacing_mm / 2.0,
        ] {
            points.push(DrillingPoint {
                x_mm: spec.plate_edge_offset_mm,
                y_mm: y,
                diameter_mm: spec.plate_hole_diameter_mm,
                depth_mm: spec.plate_hole_depth_mm,
                purpose: DrillPurpose::MountingPlate,
            });
        }
    }
}

/// 32mm-pitch shelf-pin rows along the front and back of a side panel,
/// independent of hinge positions.
fn shelf_pin_rows(panel: &Panel, points: &mut Vec<DrillingPoint>) {
    for x in [
        SHELF_PIN_ROW_SETBACK_MM,
        panel.length_mm - SHELF_PIN_ROW_SETBACK_MM,
    ] {
        let mut y = SHELF_PIN_END_MARGIN_MM;
        while y <= panel.width_mm - SHELF_PIN_END_MARGIN_MM {
            points.push(DrillingPoint {
                x_mm: x,
                y_mm: y,
                diameter_mm: SHELF_PIN_DIAMETER_MM,
                depth_mm: SHELF_PIN_DEPTH_MM,
                purpose: DrillPurpose::ShelfPin,
            });
            y += SYSTEM32_PITCH_MM;
        }
    }
}

/// Fastener bores on rebated top/bottom panels, drilled over the side
/// panel centerlines.
fn horizontal_panel_fasteners(
    panel: &Panel,
    config: &CabinetConfig,
    points: &mut Vec<DrillingPoint>,
    errors: &mut Vec<PanelDrillingError>,
) {
    match lookup_fastener(config.fastener) {
        Ok(spec) => {
            let t = config.thickness.carcass_mm;
            for x in [t / 2.0, panel.length_mm - t / 2.0] {
                for y in [spec.edge_inset_mm, panel.width_mm - spec.edge_inset_mm] {
                    points.push(DrillingPoint {
                        x_mm: x,
                        y_mm: y,
                        diameter_mm: spec.diameter_mm,
                        depth_mm: spec.depth_mm,
                        purpose: DrillPurpose::Fastener,
                    });
                }
            }
        }
        Err(source) => errors.push(PanelDrillingError {
            panel: panel.id,
            role: panel.role,
            error: source.into(),
        }),
    }
}

/// Checks bounds, edge clearance, and pairwise drill clearance for one
/// panel's points. Violations are reported, never clipped.
fn validate_points(panel: &Panel, points: &[DrillingPoint]) -> Vec<GeometryConflictError> {
    let mut conflicts = Vec::new();

    for point in points {
        if point.x_mm < 0.0
            || point.x_mm > panel.length_mm
            || point.y_mm < 0.0
            || point.y_mm > panel.width_mm
        {
            conflicts.push(GeometryConflictError::OutOfBounds {
                purpose: point.purpose,
                x: point.x_mm,
                y: point.y_mm,
                length_mm: panel.length_mm,
                width_mm: panel.width_mm,
            });
            continue;
        }

        let r = point.diameter_mm / 2.0;
        let edge_distance = (point.x_mm - r)
            .min(panel.length_mm - point.x_mm - r)
            .min(point.y_mm - r)
            .min(panel.width_mm - point.y_mm - r);
        if edge_distance < MIN_EDGE_CLEARANCE_MM {
            conflicts.push(GeometryConflictError::EdgeClearance {
                purpose: point.purpose,
                x: point.x_mm,
                y: point.y_mm,
                min_clearance_mm: MIN_EDGE_CLEARANCE_MM,
            });
        }
    }

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let distance = a.center().distance_to(&b.center());
            // Clearance is measured wall to wall, so the bore radii count.
            let required = a.diameter_mm / 2.0 + b.diameter_mm / 2.0 + MIN_DRILL_CLEARANCE_MM;
            if distance < required {
                conflicts.push(GeometryConflictError::PointsTooClose {
                    purpose_a: a.purpose,
                    x_a: a.x_mm,
                    y_a: a.y_mm,
                    purpose_b: b.purpose,
                    x_b: b.x_mm,
                    y_b: b.y_mm,
                    distance_mm: distance,
                    min_clearance_mm: required,
                });
            }
        }
    }

    conflicts
}
