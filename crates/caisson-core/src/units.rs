//! Millimeter unit discipline.
//!
//! The engine computes exclusively in millimeters (`f64`). Mixing units is
//! the classic source of scrap panels, so the only conversion offered here
//! is a display-side helper to inches; nothing in the computation path ever
//! consumes inch values.

/// Tolerance for coordinate comparison. Two positions closer than this are
/// considered the same drill location.
pub const MM_EPSILON: f64 = 0.01;

/// Millimeters per inch, for display conversion only.
pub const MM_PER_INCH: f64 = 25.4;

/// Compares two millimeter values within [`MM_EPSILON`].
pub fn approx_eq_mm(a: f64, b: f64) -> bool {
    (a - b).abs() < MM_EPSILON
}

/// Formats a millimeter value for display with machining precision.
pub fn format_mm(value_mm: f64) -> String {
    format!("{:.3}", value_mm)
}

/// Converts millimeters to inches for display.
pub fn mm_to_inches(value_mm: f64) -> f64 {
    value_mm / MM_PER_INCH
}

/// Converts a surface in mm² to m² for aggregate totals.
pub fn mm2_to_m2(value_mm2: f64) -> f64 {
    value_mm2 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_epsilon() {
        assert!(approx_eq_mm(21.5, 21.505));
        assert!(!approx_eq_mm(21.5, 21.52));
    }

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(21.5), "21.500");
        assert_eq!(format_mm(0.0), "0.000");
    }

    #[test]
    fn test_mm_to_inches() {
        assert!((mm_to_inches(25.4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mm2_to_m2() {
        // A 600 x 720 panel is 0.432 m².
        assert!((mm2_to_m2(600.0 * 720.0) - 0.432).abs() < 1e-12);
    }
}
