//! # Materials Database
//!
//! Conductor materials for earthing strips and their IS 3043 constants.
//!
//! ## Example
//!
//! ```rust
//! use earthing_core::materials::{material_constant, StripMaterial};
//!
//! assert_eq!(material_constant("gi").unwrap(), 80.0);
//! assert_eq!(StripMaterial::Copper.k_constant(), 205.0);
//! ```

pub mod conductor;

pub use conductor::StripMaterial;

use crate::errors::CalcResult;

/// Look up the material constant K for a strip material code.
///
/// The code is matched case-insensitively against `CU`, `AL` and `GI`.
/// Any other code fails with [`CalcError::UnknownMaterial`](crate::errors::CalcError::UnknownMaterial).
pub fn material_constant(code: &str) -> CalcResult<f64> {
    StripMaterial::from_code(code).map(|mat| mat.k_constant())
}
