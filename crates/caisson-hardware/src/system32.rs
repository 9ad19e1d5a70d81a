//! Constants of the 32mm cabinet drilling system.
//!
//! European cabinet hardware is built around a 32mm vertical hole pitch.
//! Shelf-pin rows, mounting-plate system holes, and knock-down fasteners
//! all reference this grid. Values are millimeters.

/// Vertical pitch of the system hole grid.
pub const SYSTEM32_PITCH_MM: f64 = 32.0;

/// Shelf-pin bore diameter.
pub const SHELF_PIN_DIAMETER_MM: f64 = 5.0;

/// Shelf-pin bore depth.
pub const SHELF_PIN_DEPTH_MM: f64 = 12.0;

/// Distance from a side panel's front (and back) edge to the center of a
/// shelf-pin row.
pub const SHELF_PIN_ROW_SETBACK_MM: f64 = 37.0;

/// Margin from a side panel's top and bottom edges before the first
/// shelf-pin hole (two grid pitches).
pub const SHELF_PIN_END_MARGIN_MM: f64 = 64.0;

/// Distance from a door's top and bottom edges to the first and last hinge
/// cup centers.
pub const HINGE_END_OFFSET_MM: f64 = 100.0;

/// Minimum material left between the walls of two bores on the same
/// panel. Anything closer, overlapping bores included, is a geometry
/// conflict, not a drillable pattern.
pub const MIN_DRILL_CLEARANCE_MM: f64 = 5.0;

/// Minimum distance from the wall of any bore to the nearest panel edge.
/// A bore breaking through an edge ruins the panel.
pub const MIN_EDGE_CLEARANCE_MM: f64 = 1.5;
