//! # Caisson Geometry
//!
//! Assembles validated panels and drilling points into layered vector
//! documents and serializes them to DXF for CNC/CAM import.
//!
//! Pure coordinate-to-primitive translation: no business rules live here.
//! Layer names and hole-purpose tagging are stable across versions since
//! downstream post-processors key off them.

pub mod document;
pub mod dxf_io;
pub mod error;

pub use document::{
    generate_document, Annotation, Circle, DocumentLayer, LayerKind, Polyline, Primitive,
    VectorPanelDocument,
};
pub use dxf_io::{to_drawing, write_dxf};
pub use error::GeometryError;
