//! Edge-banding policy per cabinet family and panel role.
//!
//! Exposed outer edges are banded; edges that meet another panel in a
//! joint are not. The mapping is table-driven so manufacturing intent
//! lives in one place.
//!
//! Edge labels are frame-anchored (see [`crate::panel::EdgeBanding`]).
//! Per role, the face frame lies as follows:
//! - side: x runs front-to-back, y bottom-to-top. Front edge = `left`.
//! - top/bottom/shelf: x runs left-to-right, y front-to-back. Front
//!   edge = `bottom`.
//! - door/drawer front: x left-to-right, y bottom-to-top.

use crate::config::{AssemblyStyle, CabinetFamily};
use crate::panel::{EdgeBanding, PanelRole};

/// Returns the edge-banding flags for one panel role.
///
/// Shelves keep front-edge banding only, in both assembly styles: a
/// shelf's other three edges always face carcass interior regardless of
/// how the carcass corners join. The assembly style moves joints between
/// panels but never exposes a previously hidden edge, so it does not
/// enter the table.
pub fn banding_for(
    family: CabinetFamily,
    role: PanelRole,
    _assembly: AssemblyStyle,
) -> EdgeBanding {
    match (family, role) {
        // Carcass front edges are visible on every family.
        (_, PanelRole::Side) => EdgeBanding {
            left: true,
            ..EdgeBanding::NONE
        },
        // Floor-standing tops disappear under the worktop, front edge
        // included.
        (CabinetFamily::Base | CabinetFamily::DrawerUnit, PanelRole::Top) => EdgeBanding::NONE,
        (_, PanelRole::Top) | (_, PanelRole::Bottom) => EdgeBanding {
            bottom: true,
            ..EdgeBanding::NONE
        },
        (_, PanelRole::Shelf) => EdgeBanding {
            bottom: true,
            ..EdgeBanding::NONE
        },
        // Fronts are visible all round.
        (_, PanelRole::Door) | (_, PanelRole::DrawerFront) => EdgeBanding::ALL,
        // Hidden panels.
        (_, PanelRole::Back)
        | (_, PanelRole::DrawerSide)
        | (_, PanelRole::DrawerBack)
        | (_, PanelRole::DrawerBottom) => EdgeBanding::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_banded_all_round() {
        let banding = banding_for(CabinetFamily::Base, PanelRole::Door, AssemblyStyle::Butt);
        assert_eq!(banding, EdgeBanding::ALL);
    }

    #[test]
    fn test_back_never_banded() {
        for family in [
            CabinetFamily::Base,
            CabinetFamily::Wall,
            CabinetFamily::Column,
            CabinetFamily::DrawerUnit,
        ] {
            for assembly in [AssemblyStyle::Butt, AssemblyStyle::Rebated] {
                assert_eq!(
                    banding_for(family, PanelRole::Back, assembly),
                    EdgeBanding::NONE
                );
            }
        }
    }

    #[test]
    fn test_shelf_front_edge_only_in_both_styles() {
        for assembly in [AssemblyStyle::Butt, AssemblyStyle::Rebated] {
            let banding = banding_for(CabinetFamily::Base, PanelRole::Shelf, assembly);
            assert!(banding.bottom);
            assert_eq!(banding.banded_edge_count(), 1);
        }
    }

    #[test]
    fn test_base_top_hidden_under_worktop() {
        for family in [CabinetFamily::Base, CabinetFamily::DrawerUnit] {
            assert_eq!(
                banding_for(family, PanelRole::Top, AssemblyStyle::Butt),
                EdgeBanding::NONE
            );
        }
        // Wall and column tops keep the front edge banded.
        let banding = banding_for(CabinetFamily::Wall, PanelRole::Top, AssemblyStyle::Butt);
        assert!(banding.bottom);
        assert_eq!(banding.banded_edge_count(), 1);
    }

    #[test]
    fn test_side_front_edge_only() {
        let banding = banding_for(CabinetFamily::Wall, PanelRole::Side, AssemblyStyle::Rebated);
        assert!(banding.left);
        assert_eq!(banding.banded_edge_count(), 1);
    }
}
