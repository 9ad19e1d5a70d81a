//! Concealed hinge specifications.
//!
//! The table below is vendored from manufacturer drilling charts for 35mm
//! cup hinges (clip-on arm, cruciform or linear mounting plates). Only
//! combinations that exist as orderable hardware are present; everything
//! else fails the lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HardwareLookupError;
use crate::system32::HINGE_END_OFFSET_MM;

/// Hinge family, by door construction it is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HingeFamily {
    /// Standard overlay hinge for 15-24mm doors.
    Standard,
    /// Reinforced hinge for doors above 24mm.
    ThickDoor,
    /// Hinge for aluminum-profile framed doors.
    Profile,
}

impl fmt::Display for HingeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::ThickDoor => write!(f, "thick-door"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

/// Opening angle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HingeAngle {
    Deg95,
    Deg110,
    Deg155,
    Deg170,
}

impl HingeAngle {
    /// Opening angle in degrees.
    pub fn degrees(&self) -> u16 {
        match self {
            Self::Deg95 => 95,
            Self::Deg110 => 110,
            Self::Deg155 => 155,
            Self::Deg170 => 170,
        }
    }
}

impl fmt::Display for HingeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Mounting plate variant. The millimeter suffix is the plate's distance
/// value, which controls door overlay, not drilling position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountingPlate {
    /// Cruciform plate, 0mm distance.
    Cruciform0,
    /// Cruciform plate, 3mm distance.
    Cruciform3,
    /// Linear (inline) plate, 0mm distance.
    Linear0,
}

impl fmt::Display for MountingPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cruciform0 => write!(f, "cruciform 0mm"),
            Self::Cruciform3 => write!(f, "cruciform 3mm"),
            Self::Linear0 => write!(f, "linear 0mm"),
        }
    }
}

/// Drilling geometry for one hinge system.
///
/// All offsets are edge-to-center distances in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeSpec {
    pub family: HingeFamily,
    pub angle: HingeAngle,
    pub plate: MountingPlate,
    /// Cup bore diameter.
    pub cup_diameter_mm: f64,
    /// Cup bore depth.
    pub cup_depth_mm: f64,
    /// Distance from the door's hinged edge to the cup center.
    pub cup_edge_offset_mm: f64,
    /// Distance from the side panel's front edge to the plate system holes.
    pub plate_edge_offset_mm: f64,
    /// Plate system-hole diameter (euro screw).
    pub plate_hole_diameter_mm: f64,
    /// Plate system-hole depth.
    pub plate_hole_depth_mm: f64,
    /// Vertical spacing between the two system holes of one plate.
    pub plate_hole_spacing_mm: f64,
    /// Shortest door this hinge is rated for.
    pub min_door_height_mm: f64,
    /// Tallest door this hinge is rated for.
    pub max_door_height_mm: f64,
}

const fn spec(
    family: HingeFamily,
    angle: HingeAngle,
    plate: MountingPlate,
    cup_edge_offset_mm: f64,
    cup_depth_mm: f64,
) -> HingeSpec {
    HingeSpec {
        family,
        angle,
        plate,
        cup_diameter_mm: 35.0,
        cup_depth_mm,
        cup_edge_offset_mm,
        plate_edge_offset_mm: 37.0,
        plate_hole_diameter_mm: 5.0,
        plate_hole_depth_mm: 13.0,
        plate_hole_spacing_mm: 32.0,
        min_door_height_mm: 80.0,
        max_door_height_mm: 2600.0,
    }
}

/// Orderable hinge systems. Combinations absent from this table do not
/// exist in the manufacturer catalog.
static HINGE_SPECS: &[HingeSpec] = &[
    spec(HingeFamily::Standard, HingeAngle::Deg95, MountingPlate::Cruciform0, 21.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg95, MountingPlate::Cruciform3, 21.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg110, MountingPlate::Cruciform0, 21.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg110, MountingPlate::Cruciform3, 21.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg110, MountingPlate::Linear0, 21.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg155, MountingPlate::Cruciform0, 24.5, 13.0),
    spec(HingeFamily::Standard, HingeAngle::Deg170, MountingPlate::Cruciform0, 24.5, 13.5),
    spec(HingeFamily::ThickDoor, HingeAngle::Deg95, MountingPlate::Cruciform0, 23.0, 13.7),
    spec(HingeFamily::ThickDoor, HingeAngle::Deg110, MountingPlate::Cruciform0, 23.0, 13.7),
    spec(HingeFamily::Profile, HingeAngle::Deg95, MountingPlate::Cruciform0, 22.0, 12.8),
];

/// Looks up the drilling specification for a hinge system.
///
/// Fails closed: combinations not in the catalog return
/// [`HardwareLookupError::HingeNotFound`], never a substitute spec.
pub fn lookup_hinge(
    family: HingeFamily,
    angle: HingeAngle,
    plate: MountingPlate,
) -> Result<&'static HingeSpec, HardwareLookupError> {
    HINGE_SPECS
        .iter()
        .find(|s| s.family == family && s.angle == angle && s.plate == plate)
        .ok_or_else(|| {
            tracing::debug!(%family, %angle, %plate, "hinge lookup missed catalog");
            HardwareLookupError::HingeNotFound {
                family,
                angle,
                plate,
            }
        })
}

/// Door-height bands and the hinge count each band requires. Upper bounds
/// are inclusive.
static HINGE_COUNT_BANDS: &[(f64, u32)] = &[(900.0, 2), (1600.0, 3), (2000.0, 4)];

/// Maximum hinges ever fitted on one door.
const MAX_HINGES_PER_DOOR: u32 = 5;

/// Returns the number of hinges required for a door of the given height.
///
/// Purely table-driven: ≤900mm takes 2 hinges, each further band adds one,
/// capped at [`MAX_HINGES_PER_DOOR`].
pub fn hinge_count_for_height(door_height_mm: f64) -> u32 {
    for (upper_mm, count) in HINGE_COUNT_BANDS {
        if door_height_mm <= *upper_mm {
            return *count;
        }
    }
    MAX_HINGES_PER_DOOR
}

/// Distributes `count` hinge centers along a door of the given height.
///
/// The first and last hinge sit [`HINGE_END_OFFSET_MM`] from the door's
/// bottom and top edges; any additional hinges are spaced evenly between
/// them. Doors too short to carry the standard end distance fall back to
/// an even spread over the door height instead. Offsets are measured from
/// the door's bottom edge and returned in strictly increasing order.
pub fn vertical_hinge_offsets(door_height_mm: f64, count: u32) -> Vec<f64> {
    debug_assert!(count >= 2, "a door always carries at least two hinges");
    if door_height_mm <= 2.0 * HINGE_END_OFFSET_MM {
        let step = door_height_mm / (count + 1) as f64;
        return (1..=count).map(|i| i as f64 * step).collect();
    }
    let first = HINGE_END_OFFSET_MM;
    let last = door_height_mm - HINGE_END_OFFSET_MM;
    let step = (last - first) / (count - 1) as f64;
    (0..count).map(|i| first + i as f64 * step).collect()
}
