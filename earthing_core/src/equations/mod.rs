//! # Earthing Equations
//!
//! This module contains every formula used to evaluate an earthing design.
//! Having equations in one place enables:
//! - Easy verification against IS 3043
//! - Documentation of units and assumptions
//! - A single place where the two π constants are kept apart
//!
//! ## Modules
//!
//! - [`heat`] - Permissible current density and surface areas
//! - [`strip`] - Strip cross-section sizing
//! - [`resistance`] - Electrode and strip resistance, parallel combination
//! - [`registry`] - Equation metadata, usage tracking, EQUATIONS.md generation
//!
//! ## References
//!
//! - IS 3043:2018: Code of Practice for Earthing

pub mod heat;
pub mod registry;
pub mod resistance;
pub mod strip;

pub use heat::{
    permissible_current_density,
    pipe_surface_area,
    plate_surface_area,
    required_dissipation_area,
    strip_surface_area,
};

pub use strip::{min_strip_cross_section, selected_strip_cross_section};

pub use resistance::{
    parallel_identical,
    parallel_pair,
    pipe_resistance,
    plate_resistance,
    strip_resistance,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
