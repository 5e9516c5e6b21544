//! # Heat Dissipation Formulas
//!
//! During a fault the electrode system must pass the fault current into the
//! soil without the current density at the electrode surface exceeding what
//! the soil can dissipate as heat. These formulas give the area the current
//! needs and the area the installation actually offers.
//!
//! ## Notation
//!
//! - `ρ` = Soil resistivity (Ω·m)
//! - `t` = Fault clearing time (s)
//! - `I` = Fault current (A)
//! - `i` = Permissible current density (A/m²)
//!
//! All areas are returned in m². Millimetre dimensions are converted to
//! metres before use.

use std::f64::consts::PI;

use crate::constants::CURRENT_DENSITY_COEFFICIENT;
use crate::units::{Meters, Millimeters};

/// Maximum permissible current density at the electrode surface
///
/// # Formula
/// i = 7.57 × 10³ / √(ρ t)
///
/// # Arguments
/// * `resistivity_ohm_m` - Soil resistivity ρ (Ω·m)
/// * `clearing_time_s` - Fault clearing time t (s)
///
/// # Returns
/// Current density in A/m²
///
/// # Example
/// ```rust
/// use earthing_core::equations::heat::permissible_current_density;
///
/// // ρ = 100 Ω·m, t = 1 s → 7570 / 10
/// let i = permissible_current_density(100.0, 1.0);
/// assert!((i - 757.0).abs() < 1e-9);
/// ```
#[inline]
pub fn permissible_current_density(resistivity_ohm_m: f64, clearing_time_s: f64) -> f64 {
    CURRENT_DENSITY_COEFFICIENT / (resistivity_ohm_m * clearing_time_s).sqrt()
}

/// Surface area needed to dissipate the fault current
///
/// # Formula
/// A_req = I / i
///
/// # Returns
/// Required area in m²
#[inline]
pub fn required_dissipation_area(fault_current_a: f64, current_density_a_m2: f64) -> f64 {
    fault_current_a / current_density_a_m2
}

/// Surface area of cylindrical pipe electrodes (lateral surface plus both end caps)
///
/// ```text
///        ┌─┐  ← end cap π r²
///        │ │
///      h │ │
///        │ │
///        └─┘
///        2r
/// ```
///
/// # Formula
/// A = 2π r (h + r) · n
///
/// # Arguments
/// * `radius_m` - Pipe radius r (m)
/// * `length_m` - Driven length h (m)
/// * `pits` - Number of electrode pits n
///
/// # Example
/// ```rust
/// use earthing_core::equations::heat::pipe_surface_area;
///
/// let area = pipe_surface_area(0.0075, 3.0, 2);
/// assert!((area - 0.2835).abs() < 1e-3);
/// ```
#[inline]
pub fn pipe_surface_area(radius_m: f64, length_m: f64, pits: u32) -> f64 {
    2.0 * PI * radius_m * (length_m + radius_m) * f64::from(pits)
}

/// Surface area of plate electrodes
///
/// Two faces plus four edge strips, each edge taken as length × thickness.
///
/// # Formula
/// A = [2 (L W) + 4 (L T)] · n
///
/// # Arguments
/// * `length_mm` - Plate length L (mm)
/// * `width_mm` - Plate width W (mm)
/// * `thickness_mm` - Plate thickness T (mm)
/// * `pits` - Number of electrode pits n
///
/// # Returns
/// Area in m²
///
/// # Example
/// ```rust
/// use earthing_core::equations::heat::plate_surface_area;
///
/// // 600 x 600 x 3 mm plate, one pit: 2(0.36) + 4(0.0018) = 0.7272 m²
/// let area = plate_surface_area(600.0, 600.0, 3.0, 1);
/// assert!((area - 0.7272).abs() < 1e-9);
/// ```
#[inline]
pub fn plate_surface_area(length_mm: f64, width_mm: f64, thickness_mm: f64, pits: u32) -> f64 {
    let l = Meters::from(Millimeters(length_mm)).value();
    let w = Meters::from(Millimeters(width_mm)).value();
    let t = Meters::from(Millimeters(thickness_mm)).value();
    (2.0 * (l * w) + 4.0 * (l * t)) * f64::from(pits)
}

/// Surface area of the interconnecting strips (perimeter × length)
///
/// # Formula
/// A = 2 (w + t) · L · n
///
/// # Arguments
/// * `width_mm` - Strip width w (mm)
/// * `thickness_mm` - Strip thickness t (mm)
/// * `length_m` - Strip length L (m)
/// * `strips` - Number of strips n
///
/// # Returns
/// Area in m²
#[inline]
pub fn strip_surface_area(width_mm: f64, thickness_mm: f64, length_m: f64, strips: u32) -> f64 {
    let w = Meters::from(Millimeters(width_mm)).value();
    let t = Meters::from(Millimeters(thickness_mm)).value();
    2.0 * (w + t) * length_m * f64::from(strips)
}
