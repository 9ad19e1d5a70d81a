//! # Caisson Engine
//!
//! Turns a [`CabinetConfig`] into the flat panels needed to build the
//! cabinet, then into millimeter-exact drilling coordinates for every
//! hinge cup, mounting plate, shelf pin, and knock-down fastener.
//!
//! The pipeline is strictly one-directional and free of shared mutable
//! state: configuration in, fresh result graph out. Validation problems
//! are collected as findings rather than thrown, so a caller can show all
//! of them at once while still getting a best-effort panel list.

pub mod banding;
pub mod config;
pub mod decompose;
pub mod drilling;
pub mod error;
pub mod export;
pub mod panel;

pub use config::{AssemblyStyle, CabinetConfig, CabinetFamily, DoorLayout, RoleThicknesses};
pub use decompose::{decompose, DecompositionResult};
pub use drilling::{compute_drillings, DrillPurpose, DrillingPlan, DrillingPoint, PanelDrillingError};
pub use error::{ConfigError, DrillingError, Finding, GeometryConflictError, Severity};
pub use export::{to_line_items, ExternalLineItem};
pub use panel::{EdgeBanding, HingedEdge, Panel, PanelRole};
