//! # earthing_core - IS 3043 Earthing Evaluation Engine
//!
//! `earthing_core` checks a proposed earthing installation (pipe or plate
//! electrodes plus buried strips) against IS 3043:2018. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use earthing_core::{evaluate_request, EarthingRequest};
//!
//! let request = EarthingRequest::from_json(r#"{
//!     "earth_resistivity": 100.0,
//!     "fault_current": 10000.0,
//!     "fault_clearing_time": 1.0,
//!     "earthing_type": "pipe",
//!     "rod_diameter_mm": 15.0,
//!     "rod_radius_m": 0.0075,
//!     "rod_length_m": 3.0,
//!     "number_of_pits": 2,
//!     "strip_width_mm": 50.0,
//!     "strip_thickness_mm": 6.0,
//!     "number_of_strips": 1,
//!     "strip_length_m": 10.0,
//!     "strip_material": "CU"
//! }"#).unwrap();
//!
//! let result = evaluate_request(&request).unwrap();
//! assert!(!result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Request parsing, evaluation and the summary
//! - [`electrodes`] - Pipe and plate electrode geometry
//! - [`equations`] - Formulas and the equation registry
//! - [`materials`] - Strip conductor materials and their K constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod electrodes;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    evaluate,
    evaluate_request,
    EarthingDesignInput,
    EarthingEvaluationResult,
    EarthingRequest,
    OverallStatus,
    Remark,
};
pub use electrodes::{EarthingType, ElectrodeConfiguration, PipeElectrode, PlateElectrode};
pub use errors::{CalcError, CalcResult};
pub use materials::StripMaterial;
