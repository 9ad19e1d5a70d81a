//! 2D geometry primitives in millimeters.

use serde::{Deserialize, Serialize};

/// A point on a panel face, millimeters from the panel's bottom-left corner
/// as viewed from the cabinet interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMm {
    pub x: f64,
    pub y: f64,
}

impl PointMm {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in millimeters.
    pub fn distance_to(&self, other: &PointMm) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = PointMm::new(0.0, 0.0);
        let b = PointMm::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
