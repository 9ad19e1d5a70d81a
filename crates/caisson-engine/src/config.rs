//! Cabinet configuration and its validation.

use caisson_hardware::{FastenerKind, HingeAngle, HingeFamily, MountingPlate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decompose::drawer_front_height_mm;
use crate::error::{ConfigError, Finding};

/// Sane physical range for an external cabinet dimension.
pub const MIN_EXTERNAL_MM: f64 = 100.0;
pub const MAX_EXTERNAL_MM: f64 = 3000.0;

/// Sane range for a panel material thickness.
pub const MIN_THICKNESS_MM: f64 = 1.0;
pub const MAX_THICKNESS_MM: f64 = 50.0;

/// Cabinet family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinetFamily {
    /// Floor-standing unit at worktop height.
    Base,
    /// Wall-hung unit.
    Wall,
    /// Full-height column.
    Column,
    /// Base unit carrying drawers instead of doors.
    DrawerUnit,
}

impl fmt::Display for CabinetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Wall => write!(f, "wall"),
            Self::Column => write!(f, "column"),
            Self::DrawerUnit => write!(f, "drawer-unit"),
        }
    }
}

/// How carcass corners are joined. Changes which panels sit inside which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssemblyStyle {
    /// Top and bottom panels sit between the full-height sides.
    Butt,
    /// Sides sit between full-width top and bottom panels; the back sits
    /// in a rebate.
    Rebated,
}

/// Door arrangement on the cabinet front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorLayout {
    None,
    /// One door, hinged on the left edge.
    SingleLeft,
    /// One door, hinged on the right edge.
    SingleRight,
    /// Two doors, hinged on the outer edges.
    Double,
}

/// Material thickness per panel role, millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleThicknesses {
    pub carcass_mm: f64,
    pub back_mm: f64,
    pub door_mm: f64,
    pub shelf_mm: f64,
}

impl Default for RoleThicknesses {
    fn default() -> Self {
        Self {
            carcass_mm: 18.0,
            back_mm: 18.0,
            door_mm: 18.0,
            shelf_mm: 18.0,
        }
    }
}

/// Complete description of one cabinet instance.
///
/// Built by the caller (application or preset template) and immutable once
/// handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetConfig {
    pub family: CabinetFamily,
    /// External width, millimeters.
    pub width_mm: f64,
    /// External height, millimeters.
    pub height_mm: f64,
    /// External depth, millimeters.
    pub depth_mm: f64,
    pub thickness: RoleThicknesses,
    pub assembly: AssemblyStyle,
    pub doors: DoorLayout,
    /// Adjustable shelves inside the carcass.
    pub shelf_count: u32,
    /// Drawers, only meaningful for [`CabinetFamily::DrawerUnit`].
    pub drawer_count: u32,
    pub hinge_family: HingeFamily,
    pub hinge_angle: HingeAngle,
    pub mounting_plate: MountingPlate,
    pub fastener: FastenerKind,
    /// Drill 32mm-pitch shelf-pin rows into the side panels.
    pub shelf_pin_rows: bool,
    /// Catalog material reference, passed through to panels and exports.
    pub material_ref: Option<String>,
    /// Panels below this face surface are flagged as uneconomical.
    pub min_panel_area_m2: f64,
}

impl Default for CabinetConfig {
    fn default() -> Self {
        Self {
            family: CabinetFamily::Base,
            width_mm: 600.0,
            height_mm: 720.0,
            depth_mm: 560.0,
            thickness: RoleThicknesses::default(),
            assembly: AssemblyStyle::Butt,
            doors: DoorLayout::SingleLeft,
            shelf_count: 1,
            drawer_count: 0,
            hinge_family: HingeFamily::Standard,
            hinge_angle: HingeAngle::Deg110,
            mounting_plate: MountingPlate::Cruciform0,
            fastener: FastenerKind::Confirmat,
            shelf_pin_rows: false,
            material_ref: None,
            min_panel_area_m2: 0.01,
        }
    }
}

impl CabinetConfig {
    /// Validates the configuration, collecting every problem instead of
    /// stopping at the first. Decomposition proceeds best-effort on the
    /// valid parts.
    pub fn validate(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (name, value) in [
            ("width", self.width_mm),
            ("height", self.height_mm),
            ("depth", self.depth_mm),
        ] {
            if !(MIN_EXTERNAL_MM..=MAX_EXTERNAL_MM).contains(&value) {
                findings.push(Finding::Config(ConfigError::DimensionOutOfRange {
                    name: name.to_string(),
                    value_mm: value,
                    min_mm: MIN_EXTERNAL_MM,
                    max_mm: MAX_EXTERNAL_MM,
                }));
            }
        }

        let min_external = self.width_mm.min(self.height_mm).min(self.depth_mm);
        for (role, value) in [
            ("carcass", self.thickness.carcass_mm),
            ("back", self.thickness.back_mm),
            ("door", self.thickness.door_mm),
            ("shelf", self.thickness.shelf_mm),
        ] {
            if !(MIN_THICKNESS_MM..=MAX_THICKNESS_MM).contains(&value) {
                findings.push(Finding::Config(ConfigError::ThicknessOutOfRange {
                    role: role.to_string(),
                    value_mm: value,
                    min_mm: MIN_THICKNESS_MM,
                    max_mm: MAX_THICKNESS_MM,
                }));
            } else if 2.0 * value >= min_external {
                findings.push(Finding::Config(ConfigError::ThicknessExceedsDimension {
                    role: role.to_string(),
                    value_mm: value,
                    dimension_mm: min_external,
                }));
            }
        }

        if self.family == CabinetFamily::DrawerUnit {
            if self.doors != DoorLayout::None {
                findings.push(Finding::Config(ConfigError::IncompatibleLayout {
                    family: self.family.to_string(),
                    detail: "drawer units carry drawer fronts, not doors".to_string(),
                }));
            }
            if self.drawer_count == 0 {
                findings.push(Finding::Config(ConfigError::IncompatibleLayout {
                    family: self.family.to_string(),
                    detail: "drawer unit with zero drawers".to_string(),
                }));
            } else {
                let front_mm = drawer_front_height_mm(self);
                if front_mm <= 0.0 {
                    findings.push(Finding::Config(ConfigError::DrawerCountExceedsHeight {
                        count: self.drawer_count,
                        height_mm: self.height_mm,
                        front_mm,
                    }));
                }
            }
        } else if self.drawer_count > 0 {
            findings.push(Finding::Config(ConfigError::IncompatibleLayout {
                family: self.family.to_string(),
                detail: "drawers are only supported on drawer units".to_string(),
            }));
        }

        for finding in &findings {
            tracing::warn!(%finding, "config validation finding");
        }
        findings
    }

    /// Usable width inside the carcass.
    pub fn inner_width_mm(&self) -> f64 {
        self.width_mm - 2.0 * self.thickness.carcass_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CabinetConfig::default().validate().is_empty());
    }

    #[test]
    fn test_all_problems_collected() {
        let config = CabinetConfig {
            width_mm: 50.0,
            height_mm: 4000.0,
            thickness: RoleThicknesses {
                carcass_mm: 0.0,
                ..RoleThicknesses::default()
            },
            ..CabinetConfig::default()
        };
        let findings = config.validate();
        // Two bad dimensions plus one bad thickness, reported together.
        assert_eq!(findings.len(), 3);
    }

    #[test]
    fn test_doors_on_drawer_unit_flagged() {
        let config = CabinetConfig {
            family: CabinetFamily::DrawerUnit,
            doors: DoorLayout::SingleLeft,
            drawer_count: 3,
            ..CabinetConfig::default()
        };
        let findings = config.validate();
        assert!(findings
            .iter()
            .any(|f| matches!(f, Finding::Config(ConfigError::IncompatibleLayout { .. }))));
    }

    #[test]
    fn test_drawer_count_bounded_by_height() {
        let config = CabinetConfig {
            family: CabinetFamily::DrawerUnit,
            doors: DoorLayout::None,
            height_mm: 200.0,
            drawer_count: 70,
            ..CabinetConfig::default()
        };
        let findings = config.validate();
        assert!(findings.iter().any(|f| matches!(
            f,
            Finding::Config(ConfigError::DrawerCountExceedsHeight { .. })
        )));

        // Three drawers in the same unit fit fine.
        let config = CabinetConfig {
            drawer_count: 3,
            ..config
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_inner_width() {
        let config = CabinetConfig::default();
        assert_eq!(config.inner_width_mm(), 564.0);
    }
}
