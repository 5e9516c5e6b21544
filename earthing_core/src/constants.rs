//! Fixed constants used by the IS 3043 earthing formulas.

/// Standard every evaluation is checked against
pub const STANDARD: &str = "IS 3043:2018";

/// Rounded π used by the resistance formulas.
///
/// The area formulas use full-precision [`std::f64::consts::PI`]. The two
/// must stay separate: the reference tables for resistance were produced
/// with 3.14 and switching would shift every resistance result.
pub const PI_APPROX: f64 = 3.14;

/// Numerator of the permissible current density formula, 7.57 × 10³ (A·√(Ω·s)/m²)
pub const CURRENT_DENSITY_COEFFICIENT: f64 = 7570.0;

/// Net earthing resistance must be strictly below this value (Ω)
pub const MAX_EARTH_RESISTANCE_OHMS: f64 = 4.0;

/// Decimal places kept in presented results
pub const RESULT_DECIMALS: i32 = 2;
