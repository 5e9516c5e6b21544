//! # Earthing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `evaluate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`earthing`] - IS 3043 evaluation of a pipe or plate earthing design

pub mod earthing;

// Re-export commonly used types
pub use earthing::{
    aggregate,
    analyze,
    analyze_request,
    evaluate,
    evaluate_request,
    Criterion,
    CriterionResult,
    EarthingBreakdown,
    EarthingDesignInput,
    EarthingEvaluationResult,
    EarthingRequest,
    OverallStatus,
    Remark,
};
