//! # Earth Electrodes
//!
//! Geometry of the two supported electrode kinds and the dispatch from an
//! electrode configuration to its surface-area and resistance formulas.
//!
//! Exactly one geometry is present per evaluation. The discriminator is the
//! `earthing_type` field (`"pipe"` or `"plate"`) and is resolved once, when
//! the configuration is built; after that every formula choice is a `match`
//! on the variant.
//!
//! ## JSON Serialization
//!
//! ```json
//! { "earthing_type": "pipe", "rod_radius_m": 0.0075, "rod_length_m": 3.0, "rod_diameter_mm": 15.0 }
//!
//! { "earthing_type": "plate", "plate_length_mm": 600.0, "plate_width_mm": 600.0, "plate_thickness_mm": 3.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::{heat, resistance};
use crate::errors::{CalcError, CalcResult};

/// Electrode kind selected by the `earthing_type` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthingType {
    /// Driven pipe (rod) electrode
    Pipe,
    /// Buried plate electrode
    Plate,
}

impl EarthingType {
    /// All earthing types, for listings
    pub const ALL: [EarthingType; 2] = [EarthingType::Pipe, EarthingType::Plate];

    /// Wire label ("pipe", "plate")
    pub fn label(&self) -> &'static str {
        match self {
            EarthingType::Pipe => "pipe",
            EarthingType::Plate => "plate",
        }
    }

    /// Parse the discriminator, ignoring letter case.
    ///
    /// Anything other than pipe or plate fails with
    /// [`CalcError::InvalidElectrodeType`].
    pub fn parse(value: &str) -> CalcResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "pipe" => Ok(EarthingType::Pipe),
            "plate" => Ok(EarthingType::Plate),
            _ => Err(CalcError::invalid_electrode_type(value)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EarthingType::Pipe => "Pipe Earthing",
            EarthingType::Plate => "Plate Earthing",
        }
    }
}

impl std::fmt::Display for EarthingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for EarthingType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Driven pipe electrode geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeElectrode {
    /// Pipe radius in metres (used for surface area)
    pub rod_radius_m: f64,
    /// Driven length in metres
    pub rod_length_m: f64,
    /// Pipe diameter in millimetres (used for resistance)
    pub rod_diameter_mm: f64,
}

/// Plate electrode geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateElectrode {
    /// Plate length in millimetres
    pub plate_length_mm: f64,
    /// Plate width in millimetres
    pub plate_width_mm: f64,
    /// Plate thickness in millimetres
    pub plate_thickness_mm: f64,
}

/// Electrode configuration, one variant per supported electrode kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "earthing_type", rename_all = "lowercase")]
pub enum ElectrodeConfiguration {
    Pipe(PipeElectrode),
    Plate(PlateElectrode),
}

impl ElectrodeConfiguration {
    /// The discriminator for this configuration
    pub fn earthing_type(&self) -> EarthingType {
        match self {
            ElectrodeConfiguration::Pipe(_) => EarthingType::Pipe,
            ElectrodeConfiguration::Plate(_) => EarthingType::Plate,
        }
    }

    /// Heat dissipation surface of all electrodes (m²)
    pub fn surface_area_m2(&self, pits: u32, tracker: &mut EquationTracker) -> f64 {
        match self {
            ElectrodeConfiguration::Pipe(pipe) => {
                tracker.record(Equation::PipeSurfaceArea, "Electrode surface area");
                heat::pipe_surface_area(pipe.rod_radius_m, pipe.rod_length_m, pits)
            }
            ElectrodeConfiguration::Plate(plate) => {
                tracker.record(Equation::PlateSurfaceArea, "Electrode surface area");
                heat::plate_surface_area(
                    plate.plate_length_mm,
                    plate.plate_width_mm,
                    plate.plate_thickness_mm,
                    pits,
                )
            }
        }
    }

    /// Resistance to earth of a single electrode (Ω)
    pub fn resistance_each_ohm(&self, resistivity_ohm_m: f64, tracker: &mut EquationTracker) -> f64 {
        match self {
            ElectrodeConfiguration::Pipe(pipe) => {
                tracker.record(Equation::PipeResistance, "Electrode resistance");
                resistance::pipe_resistance(resistivity_ohm_m, pipe.rod_length_m, pipe.rod_diameter_mm)
            }
            ElectrodeConfiguration::Plate(plate) => {
                tracker.record(Equation::PlateResistance, "Electrode resistance");
                resistance::plate_resistance(resistivity_ohm_m, plate.plate_length_mm, plate.plate_width_mm)
            }
        }
    }
}

impl From<PipeElectrode> for ElectrodeConfiguration {
    fn from(pipe: PipeElectrode) -> Self {
        ElectrodeConfiguration::Pipe(pipe)
    }
}

impl From<PlateElectrode> for ElectrodeConfiguration {
    fn from(plate: PlateElectrode) -> Self {
        ElectrodeConfiguration::Plate(plate)
    }
}
