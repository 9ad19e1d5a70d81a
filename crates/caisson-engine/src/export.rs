//! Export adapter for the external quoting system.
//!
//! Pure data reshaping: one line item per panel, no pricing, no geometry.
//! The serde field names below are a long-lived compatibility surface;
//! downstream consumers parse them by name. Evolve the internal `Panel`
//! model freely, but keep this shape stable.

use serde::{Deserialize, Serialize};

use crate::decompose::DecompositionResult;
use crate::panel::Panel;

/// One cut-list row for the quoting system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLineItem {
    /// Stable role key, e.g. `"side"` or `"drawer_front"`.
    pub reference: String,
    pub label: String,
    pub length_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
    pub quantity: u32,
    /// Banding flags in fixed order: left, right, bottom, top.
    pub edge_banding: [bool; 4],
    pub material_ref: Option<String>,
}

impl ExternalLineItem {
    fn from_panel(panel: &Panel, quantity: u32) -> Self {
        Self {
            reference: panel.role.key().to_string(),
            label: panel.label.clone(),
            length_mm: panel.length_mm,
            width_mm: panel.width_mm,
            thickness_mm: panel.thickness_mm,
            quantity,
            edge_banding: panel.banding.as_array(),
            material_ref: panel.material_ref.clone(),
        }
    }
}

/// Flattens a decomposition result into quoting line items.
///
/// With `expand_quantities` set, a quantity-N panel becomes N rows of
/// quantity 1; otherwise one row carries the quantity.
pub fn to_line_items(
    result: &DecompositionResult,
    expand_quantities: bool,
) -> Vec<ExternalLineItem> {
    let mut items = Vec::new();
    for panel in &result.panels {
        if expand_quantities {
            for _ in 0..panel.quantity {
                items.push(ExternalLineItem::from_panel(panel, 1));
            }
        } else {
            items.push(ExternalLineItem::from_panel(panel, panel.quantity));
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CabinetConfig;
    use crate::decompose::decompose;

    #[test]
    fn test_one_item_per_panel_entry() {
        let result = decompose(&CabinetConfig::default());
        let items = to_line_items(&result, false);
        assert_eq!(items.len(), result.panels.len());
        let side = items.iter().find(|i| i.reference == "side").unwrap();
        assert_eq!(side.quantity, 2);
    }

    #[test]
    fn test_expanded_quantities() {
        let result = decompose(&CabinetConfig::default());
        let items = to_line_items(&result, true);
        let total_pieces: u32 = result.panels.iter().map(|p| p.quantity).sum();
        assert_eq!(items.len() as u32, total_pieces);
        assert!(items.iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        let result = decompose(&CabinetConfig::default());
        let items = to_line_items(&result, false);
        let json = serde_json::to_value(&items[0]).unwrap();
        for field in [
            "reference",
            "label",
            "length_mm",
            "width_mm",
            "thickness_mm",
            "quantity",
            "edge_banding",
            "material_ref",
        ] {
            assert!(json.get(field).is_some(), "missing field '{field}'");
        }
    }
}
