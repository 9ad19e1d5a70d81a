//! Panel model produced by cabinet decomposition.
//!
//! Every panel carries its own face coordinate frame: the internal face is
//! viewed from the cabinet interior, the origin sits at the bottom-left
//! corner, `x` runs along `length_mm` and `y` along `width_mm`. All
//! drilling coordinates downstream are additive offsets in this frame,
//! which keeps left/right mirrored panels free of sign errors.

use caisson_core::{mm2_to_m2, PanelId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a panel plays in the assembled cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRole {
    Side,
    Top,
    Bottom,
    Back,
    Shelf,
    Door,
    DrawerFront,
    DrawerSide,
    DrawerBack,
    DrawerBottom,
}

impl PanelRole {
    /// Stable lowercase key used in exports. Downstream systems key off
    /// these strings; do not rename.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Back => "back",
            Self::Shelf => "shelf",
            Self::Door => "door",
            Self::DrawerFront => "drawer_front",
            Self::DrawerSide => "drawer_side",
            Self::DrawerBack => "drawer_back",
            Self::DrawerBottom => "drawer_bottom",
        }
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Which vertical edge of a door carries the hinges, in the door's own
/// face view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HingedEdge {
    Left,
    Right,
}

/// Edge-banding flags in the panel's face frame: `left`/`right` are the
/// edges at `x = 0` and `x = length_mm`, `bottom`/`top` the edges at
/// `y = 0` and `y = width_mm`. Labeling is frame-anchored, so the flags
/// stay meaningful when a panel is mirrored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl EdgeBanding {
    pub const NONE: EdgeBanding = EdgeBanding {
        left: false,
        right: false,
        bottom: false,
        top: false,
    };

    pub const ALL: EdgeBanding = EdgeBanding {
        left: true,
        right: true,
        bottom: true,
        top: true,
    };

    /// Flags in stable export order: left, right, bottom, top.
    pub fn as_array(&self) -> [bool; 4] {
        [self.left, self.right, self.bottom, self.top]
    }

    pub fn banded_edge_count(&self) -> u32 {
        self.as_array().iter().filter(|b| **b).count() as u32
    }
}

/// One physical flat piece of the cabinet.
///
/// Panels that occur more than once (two sides, N shelves) are a single
/// entry with `quantity` set, keeping totals and exports stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub role: PanelRole,
    pub label: String,
    /// Horizontal extent of the internal face (x axis).
    pub length_mm: f64,
    /// Vertical extent of the internal face (y axis).
    pub width_mm: f64,
    pub thickness_mm: f64,
    pub banding: EdgeBanding,
    pub quantity: u32,
    /// Catalog material reference, passed through untouched.
    pub material_ref: Option<String>,
    /// Hinges carried by this panel. Zero for everything but doors.
    pub hinge_count: u32,
    /// Hinged edge for door panels.
    pub hinged_edge: Option<HingedEdge>,
    /// False when the configured hardware could not be resolved; the panel
    /// is still listed but must not be drilled as-is.
    pub hardware_ok: bool,
}

impl Panel {
    /// Face surface of a single piece, m².
    pub fn face_area_m2(&self) -> f64 {
        mm2_to_m2(self.length_mm * self.width_mm)
    }

    /// Total banded edge length for this entry, all pieces, millimeters.
    pub fn banding_length_mm(&self) -> f64 {
        let mut per_piece = 0.0;
        if self.banding.left {
            per_piece += self.width_mm;
        }
        if self.banding.right {
            per_piece += self.width_mm;
        }
        if self.banding.bottom {
            per_piece += self.length_mm;
        }
        if self.banding.top {
            per_piece += self.length_mm;
        }
        per_piece * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_panel() -> Panel {
        Panel {
            id: PanelId::new(),
            role: PanelRole::Shelf,
            label: "shelf".to_string(),
            length_mm: 564.0,
            width_mm: 540.0,
            thickness_mm: 18.0,
            banding: EdgeBanding {
                bottom: true,
                ..EdgeBanding::NONE
            },
            quantity: 2,
            material_ref: None,
            hinge_count: 0,
            hinged_edge: None,
            hardware_ok: true,
        }
    }

    #[test]
    fn test_face_area() {
        let panel = sample_panel();
        assert!((panel.face_area_m2() - 0.30456).abs() < 1e-9);
    }

    #[test]
    fn test_banding_length_counts_quantity() {
        let panel = sample_panel();
        // One banded 564mm edge per piece, two pieces.
        assert!((panel.banding_length_mm() - 1128.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_banding_array_order() {
        let banding = EdgeBanding {
            left: true,
            right: false,
            bottom: true,
            top: false,
        };
        assert_eq!(banding.as_array(), [true, false, true, false]);
        assert_eq!(banding.banded_edge_count(), 2);
    }
}
