//! Layered vector documents, one per panel.

use caisson_core::PointMm;
use caisson_engine::{DrillPurpose, DrillingPoint, Panel};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// Named layers of a panel document. `name()` strings are a stable
/// contract with CNC post-processors; do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Outline,
    Hinge,
    ShelfPin,
    Fastener,
    Annotation,
}

impl LayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outline => "OUTLINE",
            Self::Hinge => "HINGE",
            Self::ShelfPin => "SHELF_PIN",
            Self::Fastener => "FASTENER",
            Self::Annotation => "ANNOTATION",
        }
    }

    /// AutoCAD color index used when writing DXF layers.
    pub fn aci_color(&self) -> u8 {
        match self {
            Self::Outline => 7,    // white
            Self::Hinge => 1,      // red
            Self::ShelfPin => 5,   // blue
            Self::Fastener => 3,   // green
            Self::Annotation => 2, // yellow
        }
    }
}

impl From<DrillPurpose> for LayerKind {
    fn from(purpose: DrillPurpose) -> Self {
        match purpose {
            DrillPurpose::HingeCup | DrillPurpose::MountingPlate => Self::Hinge,
            DrillPurpose::ShelfPin => Self::ShelfPin,
            DrillPurpose::Fastener => Self::Fastener,
        }
    }
}

/// A polyline at true scale, closed for panel outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<PointMm>,
    pub closed: bool,
}

/// A drill circle: center plus radius, tagged by purpose through its layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: PointMm,
    pub radius_mm: f64,
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: PointMm,
    pub text: String,
    pub height_mm: f64,
}

/// One vector primitive on a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Polyline(Polyline),
    Circle(Circle),
    Annotation(Annotation),
}

/// All primitives of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayer {
    pub kind: LayerKind,
    pub primitives: Vec<Primitive>,
}

/// Machine-ready vector geometry for one panel: outline plus drill
/// circles, grouped into named layers. Stateless; regenerated on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPanelDocument {
    pub panel_id: caisson_core::PanelId,
    pub label: String,
    pub length_mm: f64,
    pub width_mm: f64,
    pub layers: Vec<DocumentLayer>,
}

impl VectorPanelDocument {
    pub fn layer(&self, kind: LayerKind) -> Option<&DocumentLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

/// Builds the vector document for one panel from already-validated data.
///
/// Fails only on structurally impossible input (non-positive dimensions);
/// conflict handling happened upstream in the drilling calculator.
pub fn generate_document(
    panel: &Panel,
    drillings: &[DrillingPoint],
) -> GeometryResult<VectorPanelDocument> {
    if panel.length_mm <= 0.0 || panel.width_mm <= 0.0 {
        return Err(GeometryError::DegeneratePanel {
            label: panel.label.clone(),
            length_mm: panel.length_mm,
            width_mm: panel.width_mm,
        });
    }

    let outline = Polyline {
        points: vec![
            PointMm::new(0.0, 0.0),
            PointMm::new(panel.length_mm, 0.0),
            PointMm::new(panel.length_mm, panel.width_mm),
            PointMm::new(0.0, panel.width_mm),
        ],
        closed: true,
    };

    let mut layers = vec![DocumentLayer {
        kind: LayerKind::Outline,
        primitives: vec![Primitive::Polyline(outline)],
    }];

    for point in drillings {
        let kind = LayerKind::from(point.purpose);
        let circle = Primitive::Circle(Circle {
            center: point.center(),
            radius_mm: point.diameter_mm / 2.0,
        });
        match layers.iter_mut().find(|l| l.kind == kind) {
            Some(layer) => layer.primitives.push(circle),
            None => layers.push(DocumentLayer {
                kind,
                primitives: vec![circle],
            }),
        }
    }

    layers.push(DocumentLayer {
        kind: LayerKind::Annotation,
        primitives: vec![Primitive::Annotation(Annotation {
            position: PointMm::new(5.0, panel.width_mm + 5.0),
            text: format!(
                "{} {:.0}x{:.0}x{:.0}mm x{}",
                panel.label, panel.length_mm, panel.width_mm, panel.thickness_mm, panel.quantity
            ),
            height_mm: 10.0,
        })],
    });

    tracing::debug!(panel = %panel.id, layers = layers.len(), drill_points = drillings.len(), "generated panel document");

    Ok(VectorPanelDocument {
        panel_id: panel.id,
        label: panel.label.clone(),
        length_mm: panel.length_mm,
        width_mm: panel.width_mm,
        layers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use caisson_engine::{compute_drillings, decompose, CabinetConfig, PanelRole};

    #[test]
    fn test_layer_names_are_stable() {
        assert_eq!(LayerKind::Outline.name(), "OUTLINE");
        assert_eq!(LayerKind::Hinge.name(), "HINGE");
        assert_eq!(LayerKind::ShelfPin.name(), "SHELF_PIN");
        assert_eq!(LayerKind::Fastener.name(), "FASTENER");
        assert_eq!(LayerKind::Annotation.name(), "ANNOTATION");
    }

    #[test]
    fn test_door_document_layers() {
        let config = CabinetConfig::default();
        let result = decompose(&config);
        let plan = compute_drillings(&result.panels, &config);
        let door = result.panels_with_role(PanelRole::Door).next().unwrap();
        let doc = generate_document(door, plan.points_for(door.id)).unwrap();

        let outline = doc.layer(LayerKind::Outline).unwrap();
        assert_eq!(outline.primitives.len(), 1);
        match &outline.primitives[0] {
            Primitive::Polyline(p) => {
                assert!(p.closed);
                assert_eq!(p.points.len(), 4);
            }
            other => panic!("expected outline polyline, got {other:?}"),
        }

        // Two hinge cups, radius 17.5.
        let hinge = doc.layer(LayerKind::Hinge).unwrap();
        assert_eq!(hinge.primitives.len(), 2);
        match &hinge.primitives[0] {
            Primitive::Circle(c) => assert_eq!(c.radius_mm, 17.5),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_panel_rejected() {
        let config = CabinetConfig::default();
        let result = decompose(&config);
        let mut panel = result.panels[0].clone();
        panel.length_mm = 0.0;
        assert!(matches!(
            generate_document(&panel, &[]),
            Err(GeometryError::DegeneratePanel { .. })
        ));
    }
}
