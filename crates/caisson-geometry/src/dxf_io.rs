//! DXF serialization of panel documents.
//!
//! Outlines become closed lightweight polylines, drill points become
//! circles, the label becomes a text entity, each on its named layer.

use std::path::Path;

use dxf::entities::{Circle as DxfCircle, Entity, EntityType, LwPolyline, Text};
use dxf::{Drawing, LwPolylineVertex};

use crate::document::{LayerKind, Primitive, VectorPanelDocument};
use crate::error::{GeometryError, GeometryResult};

/// Converts a panel document into a DXF drawing in memory.
pub fn to_drawing(doc: &VectorPanelDocument) -> Drawing {
    let mut drawing = Drawing::new();

    for layer in &doc.layers {
        let mut dxf_layer = dxf::tables::Layer::default();
        dxf_layer.name = layer.kind.name().to_string();
        dxf_layer.color = dxf::Color::from_index(layer.kind.aci_color());
        drawing.add_layer(dxf_layer);
    }

    for layer in &doc.layers {
        for primitive in &layer.primitives {
            let entity = convert_primitive(primitive, layer.kind);
            drawing.add_entity(entity);
        }
    }

    drawing
}

/// Writes a panel document to a `.dxf` file.
pub fn write_dxf(doc: &VectorPanelDocument, path: &Path) -> GeometryResult<()> {
    let drawing = to_drawing(doc);
    drawing
        .save_file(path)
        .map_err(|e| GeometryError::Dxf(e.to_string()))?;
    tracing::info!(panel = %doc.panel_id, path = %path.display(), "wrote DXF document");
    Ok(())
}

fn convert_primitive(primitive: &Primitive, kind: LayerKind) -> Entity {
    let specific = match primitive {
        Primitive::Polyline(polyline) => {
            let mut lwpoly = LwPolyline::default();
            lwpoly.set_is_closed(polyline.closed);
            lwpoly.vertices = polyline
                .points
                .iter()
                .map(|p| {
                    let mut vertex = LwPolylineVertex::default();
                    vertex.x = p.x;
                    vertex.y = p.y;
                    vertex
                })
                .collect();
            EntityType::LwPolyline(lwpoly)
        }

        Primitive::Circle(circle) => {
            let mut dxf_circle = DxfCircle::default();
            dxf_circle.center = dxf::Point::new(circle.center.x, circle.center.y, 0.0);
            dxf_circle.radius = circle.radius_mm;
            EntityType::Circle(dxf_circle)
        }

        Primitive::Annotation(annotation) => {
            let mut text = Text::default();
            text.location = dxf::Point::new(annotation.position.x, annotation.position.y, 0.0);
            text.text_height = annotation.height_mm;
            text.value = annotation.text.clone();
            EntityType::Text(text)
        }
    };

    let mut entity = Entity::new(specific);
    entity.common.layer = kind.name().to_string();
    entity
}
