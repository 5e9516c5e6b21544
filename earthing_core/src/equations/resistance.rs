//! # Earth Resistance Formulas
//!
//! Resistance to earth of pipe electrodes, plate electrodes and buried strip
//! conductors, and the parallel combinations used to get the net resistance
//! of the installation.
//!
//! ## Conventions
//!
//! - Resistivity `ρ` in Ω·m; results in Ω.
//! - The pipe and strip formulas are written with lengths in centimetres
//!   (hence the `100·ρ` numerator).
//! - π is the rounded [`PI_APPROX`] throughout this module.
//! - Electrodes of one kind are treated as ideal parallel resistors. No
//!   mutual-coupling (screening) correction is applied.

use crate::constants::PI_APPROX;
use crate::units::{Centimeters, Meters, Millimeters};

/// Resistance of a single pipe (rod) electrode
///
/// # Formula
/// R = (100 ρ / (2π L)) · ln(2L / d)
///
/// with `L` and `d` in cm.
///
/// # Arguments
/// * `resistivity_ohm_m` - Soil resistivity ρ (Ω·m)
/// * `length_m` - Pipe length (m)
/// * `diameter_mm` - Pipe diameter (mm)
///
/// # Example
/// ```rust
/// use earthing_core::equations::resistance::pipe_resistance;
///
/// let r = pipe_resistance(100.0, 3.0, 15.0);
/// assert!((r - 31.80).abs() < 0.01);
/// ```
pub fn pipe_resistance(resistivity_ohm_m: f64, length_m: f64, diameter_mm: f64) -> f64 {
    let l_cm = Centimeters::from(Meters(length_m)).value();
    let d_cm = Centimeters::from(Millimeters(diameter_mm)).value();
    (100.0 * resistivity_ohm_m / (2.0 * PI_APPROX * l_cm)) * ((2.0 * l_cm) / d_cm).ln()
}

/// Resistance of a single plate electrode
///
/// # Formula
/// R = (ρ / 4) · √(π / A), A = L × W in m²
///
/// # Example
/// ```rust
/// use earthing_core::equations::resistance::plate_resistance;
///
/// let r = plate_resistance(100.0, 600.0, 600.0);
/// assert!((r - 73.83).abs() < 0.01);
/// ```
pub fn plate_resistance(resistivity_ohm_m: f64, length_mm: f64, width_mm: f64) -> f64 {
    let l_m = Meters::from(Millimeters(length_mm)).value();
    let w_m = Meters::from(Millimeters(width_mm)).value();
    (resistivity_ohm_m / 4.0) * (PI_APPROX / (l_m * w_m)).sqrt()
}

/// Resistance of a single buried strip
///
/// # Formula
/// R = (100 ρ / (2π L)) · ln(4L / w)
///
/// with strip length `L` and width `w` in cm.
pub fn strip_resistance(resistivity_ohm_m: f64, length_m: f64, width_mm: f64) -> f64 {
    let l_cm = Centimeters::from(Meters(length_m)).value();
    let w_cm = Centimeters::from(Millimeters(width_mm)).value();
    (100.0 * resistivity_ohm_m / (2.0 * PI_APPROX * l_cm)) * ((4.0 * l_cm) / w_cm).ln()
}

/// `count` identical resistors in parallel: R / n
#[inline]
pub fn parallel_identical(each_ohm: f64, count: u32) -> f64 {
    each_ohm / f64::from(count)
}

/// Two resistors in parallel: R1 R2 / (R1 + R2)
#[inline]
pub fn parallel_pair(r1_ohm: f64, r2_ohm: f64) -> f64 {
    (r1_ohm * r2_ohm) / (r1_ohm + r2_ohm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_resistance_reference() {
        // (10000 / 1884) · ln(400)
        let expected = (10_000.0 / 1884.0) * 400.0_f64.ln();
        assert!((pipe_resistance(100.0, 3.0, 15.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pipe_resistance_uses_rounded_pi() {
        let exact_pi = (100.0 * 100.0 / (2.0 * std::f64::consts::PI * 300.0)) * 400.0_f64.ln();
        let r = pipe_resistance(100.0, 3.0, 15.0);
        assert!(r > exact_pi);
    }

    #[test]
    fn test_strip_resistance_reference() {
        let expected = (10_000.0 / 6280.0) * 800.0_f64.ln();
        assert!((strip_resistance(100.0, 10.0, 50.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_plate_resistance_scales_with_resistivity() {
        let r1 = plate_resistance(50.0, 1200.0, 1200.0);
        let r2 = plate_resistance(100.0, 1200.0, 1200.0);
        assert!((r2 - 2.0 * r1).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_identical() {
        assert_eq!(parallel_identical(30.0, 3), 10.0);
        assert_eq!(parallel_identical(7.5, 1), 7.5);
    }

    #[test]
    fn test_parallel_pair() {
        assert!((parallel_pair(6.0, 3.0) - 2.0).abs() < 1e-12);
        // Net is always below the smaller branch
        let net = parallel_pair(15.9, 10.64);
        assert!(net < 10.64);
    }
}
