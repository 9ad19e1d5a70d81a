//! Cabinet decomposition: configuration to panel list.
//!
//! Outside-to-inside arithmetic: internal dimensions are derived by
//! subtracting twice the carcass thickness from the external ones, with
//! the subtraction applied to different panels depending on the assembly
//! style.

use caisson_core::PanelId;
use caisson_hardware::{hinge_count_for_height, lookup_hinge};
use serde::{Deserialize, Serialize};

use crate::banding::banding_for;
use crate::config::{AssemblyStyle, CabinetConfig, CabinetFamily, DoorLayout};
use crate::error::Finding;
use crate::panel::{HingedEdge, Panel, PanelRole};

/// Gap between a door edge and the cabinet's external face, per edge.
pub const DOOR_REVEAL_MM: f64 = 2.0;

/// Gap between the two leaves of a double door.
pub const DOOR_GAP_MM: f64 = 3.0;

/// Gap between stacked drawer fronts.
pub const DRAWER_GAP_MM: f64 = 3.0;

/// How far a shelf stops short of the cabinet's full depth (back panel
/// plus front reveal).
pub const SHELF_DEPTH_SETBACK_MM: f64 = 20.0;

/// Lip left on each rebated edge that the back panel sits in.
pub const REBATE_LIP_MM: f64 = 10.0;

/// Side clearance for drawer runners, per side.
pub const DRAWER_RUNNER_CLEARANCE_MM: f64 = 13.0;

/// How far a drawer box stops short of the cabinet depth.
pub const DRAWER_BOX_DEPTH_CLEARANCE_MM: f64 = 60.0;

/// Decomposition output: the panel list plus aggregate totals and every
/// validation finding. Fresh per invocation; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub panels: Vec<Panel>,
    /// Sum of face surface times quantity, m².
    pub total_surface_m2: f64,
    /// Sum of banded edge lengths times quantity, millimeters.
    pub total_banding_length_mm: f64,
    pub findings: Vec<Finding>,
}

impl DecompositionResult {
    /// Panels of one role, in emission order.
    pub fn panels_with_role(&self, role: PanelRole) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(move |p| p.role == role)
    }
}

/// Height of a door leaf for this configuration.
pub fn door_height_mm(config: &CabinetConfig) -> f64 {
    config.height_mm - 2.0 * DOOR_REVEAL_MM
}

/// Height of one drawer front. Callers guarantee `drawer_count > 0`.
pub fn drawer_front_height_mm(config: &CabinetConfig) -> f64 {
    debug_assert!(config.drawer_count > 0);
    (config.height_mm
        - 2.0 * DOOR_REVEAL_MM
        - (config.drawer_count - 1) as f64 * DRAWER_GAP_MM)
        / config.drawer_count as f64
}

/// Decomposes a cabinet configuration into its flat panels.
///
/// Validation problems are collected, not thrown; decomposition proceeds
/// best-effort and panels whose hardware cannot be resolved are flagged
/// via [`Panel::hardware_ok`].
pub fn decompose(config: &CabinetConfig) -> DecompositionResult {
    let mut findings = config.validate();
    let mut panels = Vec::new();

    let wants_doors = config.doors != DoorLayout::None && config.family != CabinetFamily::DrawerUnit;
    let hardware_ok = if wants_doors {
        match lookup_hinge(config.hinge_family, config.hinge_angle, config.mounting_plate) {
            Ok(spec) => {
                let height = door_height_mm(config);
                if height < spec.min_door_height_mm || height > spec.max_door_height_mm {
                    for role in [PanelRole::Door, PanelRole::Side] {
                        findings.push(Finding::DoorOutsideHingeRating {
                            role,
                            height_mm: height,
                            min_mm: spec.min_door_height_mm,
                            max_mm: spec.max_door_height_mm,
                        });
                    }
                    false
                } else {
                    true
                }
            }
            Err(source) => {
                findings.push(Finding::Hardware {
                    role: PanelRole::Door,
                    source,
                });
                findings.push(Finding::Hardware {
                    role: PanelRole::Side,
                    source,
                });
                false
            }
        }
    } else {
        true
    };

    build_carcass(config, hardware_ok, &mut panels);

    if config.family == CabinetFamily::DrawerUnit {
        build_drawers(config, &mut panels);
    } else {
        build_shelves(config, &mut panels);
        if wants_doors {
            build_doors(config, hardware_ok, &mut panels);
        }
    }

    let total_surface_m2 = panels
        .iter()
        .map(|p| p.face_area_m2() * p.quantity as f64)
        .sum();
    let total_banding_length_mm = panels.iter().map(|p| p.banding_length_mm()).sum();

    for panel in &panels {
        let area = panel.face_area_m2();
        if area < config.min_panel_area_m2 {
            findings.push(Finding::SmallPanel {
                role: panel.role,
                area_m2: area,
                min_area_m2: config.min_panel_area_m2,
            });
        }
    }

    tracing::debug!(
        family = %config.family,
        panel_entries = panels.len(),
        total_surface_m2,
        findings = findings.len(),
        "decomposed cabinet"
    );

    DecompositionResult {
        panels,
        total_surface_m2,
        total_banding_length_mm,
        findings,
    }
}

fn make_panel(
    config: &CabinetConfig,
    role: PanelRole,
    label: &str,
    length_mm: f64,
    width_mm: f64,
    thickness_mm: f64,
    quantity: u32,
) -> Panel {
    Panel {
        id: PanelId::new(),
        role,
        label: label.to_string(),
        length_mm,
        width_mm,
        thickness_mm,
        banding: banding_for(config.family, role, config.assembly),
        quantity,
        material_ref: config.material_ref.clone(),
        hinge_count: 0,
        hinged_edge: None,
        hardware_ok: true,
    }
}

fn build_carcass(config: &CabinetConfig, hardware_ok: bool, panels: &mut Vec<Panel>) {
    let t = config.thickness.carcass_mm;
    let inner_width = config.inner_width_mm();

    // Which panels are "inside" which depends on the assembly style.
    let (side_height, top_length) = match config.assembly {
        AssemblyStyle::Butt => (config.height_mm, inner_width),
        AssemblyStyle::Rebated => (config.height_mm - 2.0 * t, config.width_mm),
    };

    let mut side = make_panel(
        config,
        PanelRole::Side,
        "side",
        config.depth_mm,
        side_height,
        t,
        2,
    );
    side.hardware_ok = hardware_ok;
    panels.push(side);

    panels.push(make_panel(
        config,
        PanelRole::Top,
        "top",
        top_length,
        config.depth_mm,
        t,
        1,
    ));
    panels.push(make_panel(
        config,
        PanelRole::Bottom,
        "bottom",
        top_length,
        config.depth_mm,
        t,
        1,
    ));

    let (back_length, back_width) = match config.assembly {
        AssemblyStyle::Butt => (inner_width, config.height_mm - 2.0 * t),
        AssemblyStyle::Rebated => (
            inner_width + 2.0 * REBATE_LIP_MM,
            config.height_mm - 2.0 * t + 2.0 * REBATE_LIP_MM,
        ),
    };
    panels.push(make_panel(
        config,
        PanelRole::Back,
        "back",
        back_length,
        back_width,
        config.thickness.back_mm,
        1,
    ));
}

fn build_shelves(config: &CabinetConfig, panels: &mut Vec<Panel>) {
    if config.shelf_count == 0 {
        return;
    }
    panels.push(make_panel(
        config,
        PanelRole::Shelf,
        "shelf",
        config.inner_width_mm(),
        config.depth_mm - SHELF_DEPTH_SETBACK_MM,
        config.thickness.shelf_mm,
        config.shelf_count,
    ));
}

fn build_doors(config: &CabinetConfig, hardware_ok: bool, panels: &mut Vec<Panel>) {
    let height = door_height_mm(config);
    let hinge_count = hinge_count_for_height(height);

    let mut push_door = |label: &str, length_mm: f64, hinged: HingedEdge| {
        let mut door = make_panel(config, PanelRole::Door, label, length_mm, height, config.thickness.door_mm, 1);
        door.hinge_count = hinge_count;
        door.hinged_edge = Some(hinged);
        door.hardware_ok = hardware_ok;
        panels.push(door);
    };

    match config.doors {
        DoorLayout::None => {}
        DoorLayout::SingleLeft => {
            push_door("door", config.width_mm - 2.0 * DOOR_REVEAL_MM, HingedEdge::Left);
        }
        DoorLayout::SingleRight => {
            push_door("door", config.width_mm - 2.0 * DOOR_REVEAL_MM, HingedEdge::Right);
        }
        DoorLayout::Double => {
            // The two leaves mirror each other, so they stay separate
            // entries instead of collapsing into one quantity-2 entry.
            let leaf = (config.width_mm - 2.0 * DOOR_REVEAL_MM - DOOR_GAP_MM) / 2.0;
            push_door("door left", leaf, HingedEdge::Left);
            push_door("door right", leaf, HingedEdge::Right);
        }
    }
}

fn build_drawers(config: &CabinetConfig, panels: &mut Vec<Panel>) {
    let count = config.drawer_count;
    if count == 0 {
        return;
    }

    let front_length = config.width_mm - 2.0 * DOOR_REVEAL_MM;
    let front_height = drawer_front_height_mm(config);
    if front_height <= 0.0 {
        // Validation has already reported the count as unbuildable; a
        // panel with non-positive height must never be emitted.
        return;
    }
    panels.push(make_panel(
        config,
        PanelRole::DrawerFront,
        "drawer front",
        front_length,
        front_height,
        config.thickness.door_mm,
        count,
    ));

    // Drawer boxes ride on runners inside the carcass.
    let t_box = config.thickness.shelf_mm;
    let box_depth = config.depth_mm - DRAWER_BOX_DEPTH_CLEARANCE_MM;
    let box_height = (front_height - 50.0).clamp(60.0, 130.0);
    let box_inner_width =
        config.inner_width_mm() - 2.0 * DRAWER_RUNNER_CLEARANCE_MM - 2.0 * t_box;

    panels.push(make_panel(
        config,
        PanelRole::DrawerSide,
        "drawer side",
        box_depth,
        box_height,
        t_box,
        2 * count,
    ));
    panels.push(make_panel(
        config,
        PanelRole::DrawerBack,
        "drawer back",
        box_inner_width,
        box_height,
        t_box,
        count,
    ));
    panels.push(make_panel(
        config,
        PanelRole::DrawerBottom,
        "drawer bottom",
        box_inner_width,
        box_depth,
        config.thickness.back_mm,
        count,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use caisson_hardware::{HingeAngle, HingeFamily, MountingPlate};

    #[test]
    fn test_butt_assembly_inner_dimensions() {
        let result = decompose(&CabinetConfig::default());
        let side = result.panels_with_role(PanelRole::Side).next().unwrap();
        assert_eq!(side.quantity, 2);
        assert_eq!(side.width_mm, 720.0);
        assert_eq!(side.length_mm, 560.0);

        // Top sits between the sides: 600 - 2*18.
        let top = result.panels_with_role(PanelRole::Top).next().unwrap();
        assert_eq!(top.length_mm, 564.0);
    }

    #[test]
    fn test_rebated_assembly_swaps_inner_panels() {
        let config = CabinetConfig {
            assembly: AssemblyStyle::Rebated,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        let side = result.panels_with_role(PanelRole::Side).next().unwrap();
        // Sides now sit between full-width top and bottom.
        assert_eq!(side.width_mm, 720.0 - 36.0);
        let top = result.panels_with_role(PanelRole::Top).next().unwrap();
        assert_eq!(top.length_mm, 600.0);
        // Back gains the rebate lips.
        let back = result.panels_with_role(PanelRole::Back).next().unwrap();
        assert_eq!(back.length_mm, 564.0 + 20.0);
    }

    #[test]
    fn test_shelves_collapse_into_quantity() {
        let config = CabinetConfig {
            shelf_count: 3,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        let shelves: Vec<_> = result.panels_with_role(PanelRole::Shelf).collect();
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].quantity, 3);
    }

    #[test]
    fn test_double_doors_stay_separate_mirrored_entries() {
        let config = CabinetConfig {
            width_mm: 900.0,
            doors: DoorLayout::Double,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        let doors: Vec<_> = result.panels_with_role(PanelRole::Door).collect();
        assert_eq!(doors.len(), 2);
        assert_eq!(doors[0].hinged_edge, Some(HingedEdge::Left));
        assert_eq!(doors[1].hinged_edge, Some(HingedEdge::Right));
        // 900 - 2*2 reveal - 3 gap, split in two.
        assert_eq!(doors[0].length_mm, 446.5);
    }

    #[test]
    fn test_unknown_hardware_flags_panels_but_builds_rest() {
        let config = CabinetConfig {
            hinge_family: HingeFamily::Profile,
            hinge_angle: HingeAngle::Deg170,
            mounting_plate: MountingPlate::Cruciform0,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        // All panels are still produced.
        assert!(result.panels_with_role(PanelRole::Back).next().is_some());
        let door = result.panels_with_role(PanelRole::Door).next().unwrap();
        assert!(!door.hardware_ok);
        let side = result.panels_with_role(PanelRole::Side).next().unwrap();
        assert!(!side.hardware_ok);
        // One hardware finding per affected role.
        let hardware_findings = result
            .findings
            .iter()
            .filter(|f| matches!(f, Finding::Hardware { .. }))
            .count();
        assert_eq!(hardware_findings, 2);
    }

    #[test]
    fn test_drawer_unit_panels() {
        let config = CabinetConfig {
            family: CabinetFamily::DrawerUnit,
            doors: DoorLayout::None,
            drawer_count: 3,
            shelf_count: 0,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        let fronts = result
            .panels_with_role(PanelRole::DrawerFront)
            .next()
            .unwrap();
        assert_eq!(fronts.quantity, 3);
        // 720 - 4 - 2*3 gaps over three fronts.
        assert!((fronts.width_mm - 236.666_666).abs() < 1e-3);
        let sides = result
            .panels_with_role(PanelRole::DrawerSide)
            .next()
            .unwrap();
        assert_eq!(sides.quantity, 6);
    }

    #[test]
    fn test_unbuildable_drawer_count_emits_no_panels() {
        // 70 fronts in a 200mm unit would each come out below zero height.
        let config = CabinetConfig {
            family: CabinetFamily::DrawerUnit,
            doors: DoorLayout::None,
            height_mm: 200.0,
            drawer_count: 70,
            shelf_count: 0,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        assert!(result
            .panels_with_role(PanelRole::DrawerFront)
            .next()
            .is_none());
        for panel in &result.panels {
            assert!(panel.length_mm > 0.0 && panel.width_mm > 0.0);
        }
        assert!(result.findings.iter().any(|f| matches!(
            f,
            Finding::Config(crate::error::ConfigError::DrawerCountExceedsHeight { .. })
        ) && f.severity() == crate::error::Severity::Error));
    }

    #[test]
    fn test_door_outside_hinge_rating_flagged() {
        // 2996mm door leaf on a hinge rated 80..2600mm.
        let config = CabinetConfig {
            height_mm: 3000.0,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        let door = result.panels_with_role(PanelRole::Door).next().unwrap();
        assert!(!door.hardware_ok);
        let rating_findings = result
            .findings
            .iter()
            .filter(|f| matches!(f, Finding::DoorOutsideHingeRating { .. }))
            .count();
        assert_eq!(rating_findings, 2);
    }

    #[test]
    fn test_small_panel_warning() {
        let config = CabinetConfig {
            min_panel_area_m2: 0.5,
            ..CabinetConfig::default()
        };
        let result = decompose(&config);
        assert!(result
            .findings
            .iter()
            .any(|f| matches!(f, Finding::SmallPanel { .. })));
    }

    #[test]
    fn test_totals_are_deterministic() {
        let config = CabinetConfig::default();
        let a = decompose(&config);
        let b = decompose(&config);
        assert_eq!(a.total_surface_m2, b.total_surface_m2);
        assert_eq!(a.total_banding_length_mm, b.total_banding_length_mm);
        assert_eq!(a.panels.len(), b.panels.len());
    }
}
