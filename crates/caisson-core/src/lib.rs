//! # Caisson Core
//!
//! Shared building blocks for the caisson engine: millimeter unit
//! discipline, panel identifiers, and 2D geometry primitives.
//!
//! Every dimension and coordinate in the workspace is a millimeter value.
//! Conversion to other units happens at display boundaries only.

pub mod geom;
pub mod id;
pub mod units;

pub use geom::PointMm;
pub use id::PanelId;
pub use units::{approx_eq_mm, format_mm, mm2_to_m2, mm_to_inches, MM_EPSILON, MM_PER_INCH};
