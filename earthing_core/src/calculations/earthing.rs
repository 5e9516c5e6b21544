//! # Earthing Design Evaluation
//!
//! Checks a proposed earthing installation against IS 3043:2018 on three
//! criteria, in this order:
//!
//! 1. **Heat dissipation** - electrode + strip surface must exceed the area
//!    needed to pass the fault current into the soil.
//! 2. **Strip cross-section** - selected strips must exceed the minimum
//!    cross-section for the fault current and clearing time.
//! 3. **Earthing resistance** - electrodes and strips in parallel must come
//!    out below 4 Ω.
//!
//! The overall status is `PASS` only when all three rows are `Acceptable`.
//!
//! ## Assumptions
//!
//! - Homogeneous soil of the given resistivity
//! - Electrodes of one kind behave as ideal parallel resistors (no screening)
//! - Inputs have already passed [`EarthingRequest::validate`]; [`evaluate`]
//!   does not re-check physical quantities
//!
//! ## Example
//!
//! ```rust
//! use earthing_core::calculations::earthing::{evaluate, EarthingDesignInput, OverallStatus};
//! use earthing_core::electrodes::PipeElectrode;
//!
//! let input = EarthingDesignInput {
//!     earth_resistivity: 100.0,
//!     fault_current: 10_000.0,
//!     fault_clearing_time: 1.0,
//!     strip_width_mm: 50.0,
//!     strip_thickness_mm: 6.0,
//!     strip_length_m: 10.0,
//!     number_of_strips: 1,
//!     strip_material: "CU".to_string(),
//!     electrode: PipeElectrode {
//!         rod_radius_m: 0.0075,
//!         rod_length_m: 3.0,
//!         rod_diameter_mm: 15.0,
//!     }
//!     .into(),
//!     number_of_pits: 2,
//! };
//!
//! let result = evaluate(&input).unwrap();
//! assert_eq!(result.overall_status, OverallStatus::Fail);
//! assert_eq!(result.summary[2].result, 6.38);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::{MAX_EARTH_RESISTANCE_OHMS, RESULT_DECIMALS, STANDARD};
use crate::electrodes::{EarthingType, ElectrodeConfiguration, PipeElectrode, PlateElectrode};
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::{heat, resistance, strip};
use crate::errors::{CalcError, CalcResult};
use crate::materials::StripMaterial;
use crate::units::{Meters, Millimeters};

// ============================================================================
// Input Records
// ============================================================================

/// Typed input record for one evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "earth_resistivity": 100.0,
///   "fault_current": 10000.0,
///   "fault_clearing_time": 1.0,
///   "strip_width_mm": 50.0,
///   "strip_thickness_mm": 6.0,
///   "strip_length_m": 10.0,
///   "number_of_strips": 1,
///   "strip_material": "CU",
///   "earthing_type": "pipe",
///   "rod_radius_m": 0.0075,
///   "rod_length_m": 3.0,
///   "rod_diameter_mm": 15.0,
///   "number_of_pits": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthingDesignInput {
    /// Soil resistivity ρ (Ω·m)
    pub earth_resistivity: f64,

    /// Prospective fault current (A)
    pub fault_current: f64,

    /// Fault clearing time (s)
    pub fault_clearing_time: f64,

    /// Strip width (mm)
    pub strip_width_mm: f64,

    /// Strip thickness (mm)
    pub strip_thickness_mm: f64,

    /// Length of each strip (m)
    pub strip_length_m: f64,

    /// Number of strips in parallel
    pub number_of_strips: u32,

    /// Strip material code ("CU", "AL", "GI"; any letter case)
    pub strip_material: String,

    /// Electrode geometry, tagged by `earthing_type`
    #[serde(flatten)]
    pub electrode: ElectrodeConfiguration,

    /// Number of electrode pits
    pub number_of_pits: u32,
}

fn default_earthing_type() -> String {
    EarthingType::Pipe.label().to_string()
}

/// Flat request record as received from a caller.
///
/// Unlike [`EarthingDesignInput`] the discriminator is a free string and the
/// geometry of both electrode kinds is optional, so that a malformed request
/// can be rejected with a precise error instead of a deserialization failure.
/// A request without `earthing_type` is treated as a pipe installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthingRequest {
    pub earth_resistivity: f64,
    pub fault_current: f64,
    pub fault_clearing_time: f64,

    #[serde(default = "default_earthing_type")]
    pub earthing_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rod_diameter_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rod_radius_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rod_length_m: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_length_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_width_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_thickness_mm: Option<f64>,

    pub number_of_pits: u32,

    pub strip_width_mm: f64,
    pub strip_thickness_mm: f64,
    pub number_of_strips: u32,
    pub strip_length_m: f64,

    pub strip_material: String,
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

fn require_count(field: &str, value: u32) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::invalid_input(field, "0", "Count must be at least 1"));
    }
    Ok(())
}

/// `ln(ratio · length / size)` in the resistance formulas must stay positive,
/// i.e. `length > size / ratio` once both are in the same unit.
fn require_log_argument(field: &str, length_m: f64, size_mm: f64, ratio: f64, reason: &str) -> CalcResult<()> {
    let length_mm = Millimeters::from(Meters(length_m)).value();
    if ratio * length_mm <= size_mm {
        return Err(CalcError::invalid_input(field, length_m.to_string(), reason));
    }
    Ok(())
}

fn require_field(field: &str, value: Option<f64>) -> CalcResult<f64> {
    let value = value.ok_or_else(|| CalcError::missing_field(field))?;
    require_positive(field, value)?;
    Ok(value)
}

impl EarthingRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Caller-side precondition checks.
    ///
    /// Every physical quantity must be finite and positive, every count at
    /// least 1, and the geometry of the selected electrode kind present.
    /// Pipe length must exceed half the pipe diameter and strip length a
    /// quarter of the strip width, or the resistance logarithms go non-positive.
    /// The material and discriminator are checked in the same order as
    /// [`evaluate_request`], so both report the same error for a request.
    pub fn validate(&self) -> CalcResult<()> {
        StripMaterial::from_code(&self.strip_material)?;
        require_positive("earth_resistivity", self.earth_resistivity)?;
        require_positive("fault_current", self.fault_current)?;
        require_positive("fault_clearing_time", self.fault_clearing_time)?;
        require_positive("strip_width_mm", self.strip_width_mm)?;
        require_positive("strip_thickness_mm", self.strip_thickness_mm)?;
        require_positive("strip_length_m", self.strip_length_m)?;
        require_count("number_of_strips", self.number_of_strips)?;
        require_count("number_of_pits", self.number_of_pits)?;

        if let ElectrodeConfiguration::Pipe(pipe) = self.electrode()? {
            require_log_argument(
                "rod_length_m",
                pipe.rod_length_m,
                pipe.rod_diameter_mm,
                2.0,
                "Pipe length must exceed half the pipe diameter",
            )?;
        }
        require_log_argument(
            "strip_length_m",
            self.strip_length_m,
            self.strip_width_mm,
            4.0,
            "Strip length must exceed a quarter of the strip width",
        )
    }

    /// Resolve the discriminator and pull out the matching geometry.
    pub fn electrode(&self) -> CalcResult<ElectrodeConfiguration> {
        match EarthingType::parse(&self.earthing_type)? {
            EarthingType::Pipe => Ok(PipeElectrode {
                rod_radius_m: require_field("rod_radius_m", self.rod_radius_m)?,
                rod_length_m: require_field("rod_length_m", self.rod_length_m)?,
                rod_diameter_mm: require_field("rod_diameter_mm", self.rod_diameter_mm)?,
            }
            .into()),
            EarthingType::Plate => Ok(PlateElectrode {
                plate_length_mm: require_field("plate_length_mm", self.plate_length_mm)?,
                plate_width_mm: require_field("plate_width_mm", self.plate_width_mm)?,
                plate_thickness_mm: require_field("plate_thickness_mm", self.plate_thickness_mm)?,
            }
            .into()),
        }
    }

    /// Convert into the typed input record.
    pub fn to_design_input(&self) -> CalcResult<EarthingDesignInput> {
        Ok(EarthingDesignInput {
            earth_resistivity: self.earth_resistivity,
            fault_current: self.fault_current,
            fault_clearing_time: self.fault_clearing_time,
            strip_width_mm: self.strip_width_mm,
            strip_thickness_mm: self.strip_thickness_mm,
            strip_length_m: self.strip_length_m,
            number_of_strips: self.number_of_strips,
            strip_material: self.strip_material.clone(),
            electrode: self.electrode()?,
            number_of_pits: self.number_of_pits,
        })
    }
}

// ============================================================================
// Results
// ============================================================================

/// Verdict for a single criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remark {
    #[serde(rename = "Acceptable")]
    Acceptable,
    #[serde(rename = "Not Acceptable")]
    NotAcceptable,
}

impl Remark {
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Remark::Acceptable
        } else {
            Remark::NotAcceptable
        }
    }

    pub fn is_acceptable(&self) -> bool {
        matches!(self, Remark::Acceptable)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Remark::Acceptable => "Acceptable",
            Remark::NotAcceptable => "Not Acceptable",
        }
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall verdict of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl OverallStatus {
    /// `Pass` iff every row is acceptable
    pub fn from_rows(rows: &[CriterionResult]) -> Self {
        if rows.iter().all(|row| row.remarks.is_acceptable()) {
            OverallStatus::Pass
        } else {
            OverallStatus::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "PASS",
            OverallStatus::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three criteria, in summary order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    HeatDissipation,
    StripCrossSection,
    EarthingResistance,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [
        Criterion::HeatDissipation,
        Criterion::StripCrossSection,
        Criterion::EarthingResistance,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::HeatDissipation => "Net Heat Dissipation Area Available",
            Criterion::StripCrossSection => "Minimum Cross Sectional Area Required for Strip",
            Criterion::EarthingResistance => "Net Earthing Resistance",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Criterion::HeatDissipation => "Sqmt",
            Criterion::StripCrossSection => "Sqmm",
            Criterion::EarthingResistance => "Ohm",
        }
    }

    pub fn condition(&self) -> &'static str {
        match self {
            Criterion::HeatDissipation => "Must be higher than required heat dissipation area",
            Criterion::StripCrossSection => "Must be lower than selected earth strip",
            Criterion::EarthingResistance => "Preferably lower than 4 Ohm",
        }
    }

    /// Build the summary row. `value` is rounded for presentation only.
    pub fn row(&self, value: f64, remarks: Remark) -> CriterionResult {
        CriterionResult {
            description: self.description().to_string(),
            result: round_result(value),
            unit: self.unit().to_string(),
            condition: self.condition().to_string(),
            remarks,
        }
    }
}

/// One row of the evaluation summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub description: String,
    /// Result rounded to 2 decimals
    pub result: f64,
    pub unit: String,
    /// Pass condition in words
    pub condition: String,
    pub remarks: Remark,
}

/// Result of an evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "standard": "IS 3043:2018",
///   "earthing_type": "pipe",
///   "summary": [
///     { "description": "Net Heat Dissipation Area Available", "result": 1.4, "unit": "Sqmt",
///       "condition": "Must be higher than required heat dissipation area", "remarks": "Not Acceptable" },
///     { "description": "Minimum Cross Sectional Area Required for Strip", "result": 48.78, "unit": "Sqmm",
///       "condition": "Must be lower than selected earth strip", "remarks": "Acceptable" },
///     { "description": "Net Earthing Resistance", "result": 6.38, "unit": "Ohm",
///       "condition": "Preferably lower than 4 Ohm", "remarks": "Not Acceptable" }
///   ],
///   "overall_status": "FAIL"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthingEvaluationResult {
    /// Standard the design was checked against
    pub standard: String,
    /// Electrode kind that was evaluated
    pub earthing_type: EarthingType,
    /// Heat, strip and resistance rows, always in that order
    pub summary: [CriterionResult; 3],
    pub overall_status: OverallStatus,
}

impl EarthingEvaluationResult {
    /// Check if the design passes every criterion
    pub fn passes(&self) -> bool {
        self.overall_status == OverallStatus::Pass
    }

    /// Row for a given criterion
    pub fn row(&self, criterion: Criterion) -> &CriterionResult {
        match criterion {
            Criterion::HeatDissipation => &self.summary[0],
            Criterion::StripCrossSection => &self.summary[1],
            Criterion::EarthingResistance => &self.summary[2],
        }
    }

    /// Criteria that were not acceptable, in summary order
    pub fn failed_criteria(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| !self.row(*c).remarks.is_acceptable())
            .collect()
    }
}

/// Round to the presentation precision.
pub fn round_result(value: f64) -> f64 {
    let factor = 10f64.powi(RESULT_DECIMALS);
    (value * factor).round() / factor
}

// ============================================================================
// Intermediate Quantities
// ============================================================================

/// Every intermediate quantity behind the three verdicts, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthingBreakdown {
    pub earthing_type: EarthingType,
    pub strip_material: StripMaterial,

    // === Heat Dissipation ===
    /// Permissible current density (A/m²)
    pub permissible_current_density: f64,
    /// Area needed to dissipate the fault current (m²)
    pub required_area_m2: f64,
    /// Electrode surface, all pits (m²)
    pub electrode_area_m2: f64,
    /// Strip surface, all strips (m²)
    pub strip_area_m2: f64,
    /// Electrode + strip surface (m²)
    pub net_area_m2: f64,

    // === Strip Cross-Section ===
    /// Material constant K
    pub k_constant: f64,
    /// Minimum strip cross-section (mm²)
    pub min_strip_area_mm2: f64,
    /// Selected strip cross-section (mm²)
    pub selected_strip_area_mm2: f64,

    // === Resistance ===
    /// One electrode (Ω)
    pub electrode_resistance_each_ohm: f64,
    /// All electrodes in parallel (Ω)
    pub electrode_resistance_ohm: f64,
    /// One strip (Ω)
    pub strip_resistance_each_ohm: f64,
    /// All strips in parallel (Ω)
    pub strip_resistance_ohm: f64,
    /// Electrodes and strips in parallel (Ω)
    pub net_resistance_ohm: f64,

    /// Formulas applied, in order
    pub equations: EquationTracker,
}

impl EarthingBreakdown {
    pub fn heat_dissipation_ok(&self) -> bool {
        self.net_area_m2 > self.required_area_m2
    }

    pub fn strip_cross_section_ok(&self) -> bool {
        self.selected_strip_area_mm2 > self.min_strip_area_mm2
    }

    /// A non-positive or non-finite net resistance is never acceptable
    pub fn earthing_resistance_ok(&self) -> bool {
        self.net_resistance_ohm.is_finite()
            && self.net_resistance_ohm > 0.0
            && self.net_resistance_ohm < MAX_EARTH_RESISTANCE_OHMS
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Compute every intermediate quantity for a design.
///
/// The strip material is resolved first, so an unknown material fails
/// before any area or resistance is computed.
pub fn analyze(input: &EarthingDesignInput) -> CalcResult<EarthingBreakdown> {
    let material = StripMaterial::from_code(&input.strip_material)?;
    let k = material.k_constant();
    let mut eqs = EquationTracker::new();

    let rho = input.earth_resistivity;
    let i_sc = input.fault_current;
    let t = input.fault_clearing_time;

    // Heat dissipation
    eqs.record(Equation::PermissibleCurrentDensity, "Heat dissipation");
    let i_perm = heat::permissible_current_density(rho, t);
    eqs.record(Equation::RequiredDissipationArea, "Heat dissipation");
    let required_area = heat::required_dissipation_area(i_sc, i_perm);
    let electrode_area = input.electrode.surface_area_m2(input.number_of_pits, &mut eqs);
    eqs.record(Equation::StripSurfaceArea, "Strip surface area");
    let strip_area = heat::strip_surface_area(
        input.strip_width_mm,
        input.strip_thickness_mm,
        input.strip_length_m,
        input.number_of_strips,
    );
    let net_area = electrode_area + strip_area;
    debug!(i_perm, required_area, electrode_area, strip_area, net_area, "heat dissipation");

    // Strip cross-section
    eqs.record(Equation::MinStripCrossSection, "Strip cross-section");
    let min_strip_area = strip::min_strip_cross_section(i_sc, t, k);
    eqs.record(Equation::SelectedStripCrossSection, "Strip cross-section");
    let selected_strip_area = strip::selected_strip_cross_section(
        input.strip_width_mm,
        input.strip_thickness_mm,
        input.number_of_strips,
    );
    debug!(k, min_strip_area, selected_strip_area, "strip cross-section");

    // Resistance
    let r_electrode_each = input.electrode.resistance_each_ohm(rho, &mut eqs);
    eqs.record(Equation::ParallelIdentical, "Electrodes in parallel");
    let r_electrode = resistance::parallel_identical(r_electrode_each, input.number_of_pits);
    eqs.record(Equation::StripResistance, "Strip resistance");
    let r_strip_each = resistance::strip_resistance(rho, input.strip_length_m, input.strip_width_mm);
    eqs.record(Equation::ParallelIdentical, "Strips in parallel");
    let r_strip = resistance::parallel_identical(r_strip_each, input.number_of_strips);
    eqs.record(Equation::ParallelPair, "Net resistance");
    let r_net = resistance::parallel_pair(r_electrode, r_strip);
    debug!(r_electrode_each, r_electrode, r_strip_each, r_strip, r_net, "earthing resistance");

    eqs.record(Equation::HeatDissipationCheck, "Design checks");
    eqs.record(Equation::StripSizeCheck, "Design checks");
    eqs.record(Equation::ResistanceLimitCheck, "Design checks");

    Ok(EarthingBreakdown {
        earthing_type: input.electrode.earthing_type(),
        strip_material: material,
        permissible_current_density: i_perm,
        required_area_m2: required_area,
        electrode_area_m2: electrode_area,
        strip_area_m2: strip_area,
        net_area_m2: net_area,
        k_constant: k,
        min_strip_area_mm2: min_strip_area,
        selected_strip_area_mm2: selected_strip_area,
        electrode_resistance_each_ohm: r_electrode_each,
        electrode_resistance_ohm: r_electrode,
        strip_resistance_each_ohm: r_strip_each,
        strip_resistance_ohm: r_strip,
        net_resistance_ohm: r_net,
        equations: eqs,
    })
}

/// Turn a breakdown into the three summary rows and the overall verdict.
pub fn aggregate(breakdown: &EarthingBreakdown) -> EarthingEvaluationResult {
    let summary = [
        Criterion::HeatDissipation.row(
            breakdown.net_area_m2,
            Remark::from_pass(breakdown.heat_dissipation_ok()),
        ),
        Criterion::StripCrossSection.row(
            breakdown.min_strip_area_mm2,
            Remark::from_pass(breakdown.strip_cross_section_ok()),
        ),
        Criterion::EarthingResistance.row(
            breakdown.net_resistance_ohm,
            Remark::from_pass(breakdown.earthing_resistance_ok()),
        ),
    ];
    let overall_status = OverallStatus::from_rows(&summary);
    info!(
        earthing_type = %breakdown.earthing_type,
        overall = %overall_status,
        "earthing evaluation complete"
    );

    EarthingEvaluationResult {
        standard: STANDARD.to_string(),
        earthing_type: breakdown.earthing_type,
        summary,
        overall_status,
    }
}

/// Evaluate a design.
///
/// # Returns
///
/// * `Ok(EarthingEvaluationResult)` - Three rows and the overall verdict
/// * `Err(CalcError::UnknownMaterial)` - Strip material is not CU, AL or GI
pub fn evaluate(input: &EarthingDesignInput) -> CalcResult<EarthingEvaluationResult> {
    analyze(input).map(|breakdown| aggregate(&breakdown))
}

/// Compute the breakdown for a raw request.
///
/// The material is checked first, then the electrode discriminator, then the
/// selected geometry is extracted and [`analyze`] runs.
pub fn analyze_request(request: &EarthingRequest) -> CalcResult<EarthingBreakdown> {
    let outcome = StripMaterial::from_code(&request.strip_material)
        .and_then(|_| request.to_design_input())
        .and_then(|input| analyze(&input));
    if let Err(e) = &outcome {
        warn!(code = e.error_code(), "earthing request rejected: {}", e);
    }
    outcome
}

/// Evaluate a raw request. Same error order as [`analyze_request`].
pub fn evaluate_request(request: &EarthingRequest) -> CalcResult<EarthingEvaluationResult> {
    analyze_request(request).map(|breakdown| aggregate(&breakdown))
}
