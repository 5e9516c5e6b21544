//! # Strip Cross-Section Formulas
//!
//! Sizing of the earthing strip for the short-time fault current. Areas in
//! this module are in mm², matching how strip sizes are specified.

/// Minimum strip cross-section for a fault current
///
/// # Formula
/// A_min = I √t / K
///
/// # Arguments
/// * `fault_current_a` - Fault current I (A)
/// * `clearing_time_s` - Fault clearing time t (s)
/// * `k` - Material constant K (IS 3043 Table 11A)
///
/// # Returns
/// Area in mm²
///
/// # Example
/// ```rust
/// use earthing_core::equations::strip::min_strip_cross_section;
///
/// // 10 kA for 1 s on copper (K = 205)
/// let a = min_strip_cross_section(10_000.0, 1.0, 205.0);
/// assert!((a - 48.78).abs() < 0.01);
/// ```
#[inline]
pub fn min_strip_cross_section(fault_current_a: f64, clearing_time_s: f64, k: f64) -> f64 {
    fault_current_a * clearing_time_s.sqrt() / k
}

/// Cross-section provided by the selected strips
///
/// # Formula
/// A = w × t × n
///
/// # Returns
/// Area in mm²
#[inline]
pub fn selected_strip_cross_section(width_mm: f64, thickness_mm: f64, strips: u32) -> f64 {
    width_mm * thickness_mm * f64::from(strips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_area_per_material() {
        let cu = min_strip_cross_section(10_000.0, 1.0, 205.0);
        let gi = min_strip_cross_section(10_000.0, 1.0, 80.0);
        assert!((gi - 125.0).abs() < 1e-9);
        assert!(gi > cu);
    }

    #[test]
    fn test_min_area_clearing_time() {
        // Four times the clearing time doubles the requirement
        let a1 = min_strip_cross_section(5_000.0, 0.25, 126.0);
        let a4 = min_strip_cross_section(5_000.0, 1.0, 126.0);
        assert!((a4 / a1 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_selected_area() {
        assert_eq!(selected_strip_cross_section(50.0, 6.0, 1), 300.0);
        assert_eq!(selected_strip_cross_section(25.0, 3.0, 2), 150.0);
    }
}
