//! # Equation Registry
//!
//! Central registry of all earthing equations used in evaluations.
//! Each equation has metadata including the standard reference, formula, and
//! variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for audit trails and the generated EQUATIONS.md
//! - An [`EquationTracker`] that records which formulas an evaluation used
//!
//! ## Usage
//!
//! ```rust
//! use earthing_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::PipeResistance, "Electrode resistance");
//!
//! let meta = Equation::PipeResistance.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard or textbook a formula comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// IS 3043 - Code of Practice for Earthing
    IS3043 {
        year: u16,
        topic: &'static str,
    },
    /// Circuit theory (series/parallel combination, no code reference needed)
    CircuitTheory,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::IS3043 { year, topic } => format!("IS 3043:{}, {}", year, topic),
            CodeReference::CircuitTheory => "Circuit Theory".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::IS3043 { .. } => "IS 3043",
            CodeReference::CircuitTheory => "Circuit Theory",
        }
    }
}

const IS3043_YEAR: u16 = 2018;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Fault-current heat dissipation (current density, surface areas)
    HeatDissipation,
    /// Strip conductor sizing
    ConductorSizing,
    /// Resistance to earth and parallel combination
    Resistance,
    /// Pass/fail criteria
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::HeatDissipation => "Heat Dissipation",
            EquationCategory::ConductorSizing => "Conductor Sizing",
            EquationCategory::Resistance => "Earth Resistance",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order (lower = earlier), matches the order of the summary rows
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::HeatDissipation => 1,
            EquationCategory::ConductorSizing => 2,
            EquationCategory::Resistance => 3,
            EquationCategory::DesignChecks => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "ρ", "L", "I")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "Ω·m", "mm", "A")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an earthing equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Pipe Electrode Resistance")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All earthing equations used by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Heat Dissipation
    // -------------------------------------------------------------------------
    /// i = 7570 / sqrt(ρ t)
    PermissibleCurrentDensity,
    /// A_req = I / i
    RequiredDissipationArea,
    /// A = 2π r (h + r) n
    PipeSurfaceArea,
    /// A = [2 L W + 4 L T] n
    PlateSurfaceArea,
    /// A = 2 (w + t) L n
    StripSurfaceArea,

    // -------------------------------------------------------------------------
    // Conductor Sizing
    // -------------------------------------------------------------------------
    /// A_min = I sqrt(t) / K
    MinStripCrossSection,
    /// A = w t n
    SelectedStripCrossSection,

    // -------------------------------------------------------------------------
    // Earth Resistance
    // -------------------------------------------------------------------------
    /// R = (100ρ / 2πL) ln(2L/d)
    PipeResistance,
    /// R = (ρ/4) sqrt(π/A)
    PlateResistance,
    /// R = (100ρ / 2πL) ln(4L/w)
    StripResistance,
    /// R / n
    ParallelIdentical,
    /// R1 R2 / (R1 + R2)
    ParallelPair,

    // -------------------------------------------------------------------------
    // Design Checks
    // -------------------------------------------------------------------------
    /// A_net > A_req
    HeatDissipationCheck,
    /// A_sel > A_min
    StripSizeCheck,
    /// 0 < R_net < 4 Ω
    ResistanceLimitCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PermissibleCurrentDensity => EquationMetadata {
                name: "Permissible Current Density",
                description: "Maximum current density the soil can carry at the electrode surface for the fault duration",
                formula_plain: "i = 7.57e3 / sqrt(rho * t)",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Current density at electrode surface" },
                variables: vec![
                    Variable::new("i", "Permissible current density", "A/m^2"),
                    Variable::new("rho", "Soil resistivity", "ohm-m"),
                    Variable::new("t", "Fault clearing time", "s"),
                ],
                assumptions: vec!["Uniform soil resistivity"],
                category: EquationCategory::HeatDissipation,
                source_module: "equations/heat.rs",
                source_function: "permissible_current_density",
            },

            Equation::RequiredDissipationArea => EquationMetadata {
                name: "Required Heat Dissipation Area",
                description: "Electrode surface area needed to pass the fault current at the permissible density",
                formula_plain: "A_req = I / i",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Current density at electrode surface" },
                variables: vec![
                    Variable::new("A_req", "Required area", "m^2"),
                    Variable::new("I", "Fault current", "A"),
                    Variable::new("i", "Permissible current density", "A/m^2"),
                ],
                assumptions: vec![],
                category: EquationCategory::HeatDissipation,
                source_module: "equations/heat.rs",
                source_function: "required_dissipation_area",
            },

            Equation::PipeSurfaceArea => EquationMetadata {
                name: "Pipe Electrode Surface Area",
                description: "Lateral and end-cap surface of cylindrical pipe electrodes, summed over all pits",
                formula_plain: "A = 2 * pi * r * (h + r) * n",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Pipe electrodes" },
                variables: vec![
                    Variable::new("r", "Pipe radius", "m"),
                    Variable::new("h", "Pipe length", "m"),
                    Variable::new("n", "Number of pits", "-"),
                ],
                assumptions: vec!["Full-precision pi"],
                category: EquationCategory::HeatDissipation,
                source_module: "equations/heat.rs",
                source_function: "pipe_surface_area",
            },

            Equation::PlateSurfaceArea => EquationMetadata {
                name: "Plate Electrode Surface Area",
                description: "Two faces plus four length-by-thickness edges of each plate, summed over all pits",
                formula_plain: "A = [2 * (L * W) + 4 * (L * T)] * n",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Plate electrodes" },
                variables: vec![
                    Variable::new("L", "Plate length", "mm"),
                    Variable::new("W", "Plate width", "mm"),
                    Variable::new("T", "Plate thickness", "mm"),
                    Variable::new("n", "Number of pits", "-"),
                ],
                assumptions: vec!["Dimensions converted to m before use"],
                category: EquationCategory::HeatDissipation,
                source_module: "equations/heat.rs",
                source_function: "plate_surface_area",
            },

            Equation::StripSurfaceArea => EquationMetadata {
                name: "Strip Surface Area",
                description: "Perimeter times length of the interconnecting strips",
                formula_plain: "A = 2 * (w + t) * L * n",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Strip or conductor electrodes" },
                variables: vec![
                    Variable::new("w", "Strip width", "mm"),
                    Variable::new("t", "Strip thickness", "mm"),
                    Variable::new("L", "Strip length", "m"),
                    Variable::new("n", "Number of strips", "-"),
                ],
                assumptions: vec!["Dimensions converted to m before use"],
                category: EquationCategory::HeatDissipation,
                source_module: "equations/heat.rs",
                source_function: "strip_surface_area",
            },

            Equation::MinStripCrossSection => EquationMetadata {
                name: "Minimum Strip Cross-Section",
                description: "Smallest strip cross-section that carries the fault current for the clearing time",
                formula_plain: "A_min = I * sqrt(t) / K",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Table 11A" },
                variables: vec![
                    Variable::new("A_min", "Minimum cross-section", "mm^2"),
                    Variable::new("I", "Fault current", "A"),
                    Variable::new("t", "Fault clearing time", "s"),
                    Variable::new("K", "Material constant (CU 205, AL 126, GI 80)", "-"),
                ],
                assumptions: vec!["Adiabatic heating during the fault"],
                category: EquationCategory::ConductorSizing,
                source_module: "equations/strip.rs",
                source_function: "min_strip_cross_section",
            },

            Equation::SelectedStripCrossSection => EquationMetadata {
                name: "Selected Strip Cross-Section",
                description: "Total cross-section of the selected strips",
                formula_plain: "A_sel = w * t * n",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Table 11A" },
                variables: vec![
                    Variable::new("w", "Strip width", "mm"),
                    Variable::new("t", "Strip thickness", "mm"),
                    Variable::new("n", "Number of strips", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::ConductorSizing,
                source_module: "equations/strip.rs",
                source_function: "selected_strip_cross_section",
            },

            Equation::PipeResistance => EquationMetadata {
                name: "Pipe Electrode Resistance",
                description: "Resistance to earth of one driven pipe electrode",
                formula_plain: "R = (100 * rho / (2 * pi * L)) * ln(2 * L / d)",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Resistance of pipe electrodes" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "ohm-m"),
                    Variable::new("L", "Pipe length", "cm"),
                    Variable::new("d", "Pipe diameter", "cm"),
                ],
                assumptions: vec!["pi = 3.14", "Homogeneous soil"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "pipe_resistance",
            },

            Equation::PlateResistance => EquationMetadata {
                name: "Plate Electrode Resistance",
                description: "Resistance to earth of one buried plate electrode",
                formula_plain: "R = (rho / 4) * sqrt(pi / A)",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Resistance of plate electrodes" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "ohm-m"),
                    Variable::new("A", "Plate face area L * W", "m^2"),
                ],
                assumptions: vec!["pi = 3.14", "Homogeneous soil"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "plate_resistance",
            },

            Equation::StripResistance => EquationMetadata {
                name: "Strip Resistance",
                description: "Resistance to earth of one buried strip conductor",
                formula_plain: "R = (100 * rho / (2 * pi * L)) * ln(4 * L / w)",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Resistance of strip or conductor electrodes" },
                variables: vec![
                    Variable::new("rho", "Soil resistivity", "ohm-m"),
                    Variable::new("L", "Strip length", "cm"),
                    Variable::new("w", "Strip width", "cm"),
                ],
                assumptions: vec!["pi = 3.14", "Homogeneous soil"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "strip_resistance",
            },

            Equation::ParallelIdentical => EquationMetadata {
                name: "Identical Resistors in Parallel",
                description: "Combined resistance of n identical electrodes or strips",
                formula_plain: "R_p = R / n",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("R", "Resistance of one element", "ohm"),
                    Variable::new("n", "Number of elements", "-"),
                ],
                assumptions: vec!["No mutual screening between elements"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "parallel_identical",
            },

            Equation::ParallelPair => EquationMetadata {
                name: "Net Earthing Resistance",
                description: "Electrode group and strip group combined as two resistors in parallel",
                formula_plain: "R_net = R_e * R_s / (R_e + R_s)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("R_e", "Electrodes in parallel", "ohm"),
                    Variable::new("R_s", "Strips in parallel", "ohm"),
                ],
                assumptions: vec!["No mutual screening between electrodes and strips"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "parallel_pair",
            },

            Equation::HeatDissipationCheck => EquationMetadata {
                name: "Heat Dissipation Check",
                description: "Net available surface must exceed the required dissipation area",
                formula_plain: "A_net = A_electrode + A_strip > A_req",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Current density at electrode surface" },
                variables: vec![
                    Variable::new("A_net", "Net available area", "m^2"),
                    Variable::new("A_req", "Required area", "m^2"),
                ],
                assumptions: vec!["Comparison at full precision"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/earthing.rs",
                source_function: "EarthingBreakdown::heat_dissipation_ok",
            },

            Equation::StripSizeCheck => EquationMetadata {
                name: "Strip Size Check",
                description: "Selected strip cross-section must exceed the minimum",
                formula_plain: "A_sel > A_min",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Table 11A" },
                variables: vec![
                    Variable::new("A_sel", "Selected cross-section", "mm^2"),
                    Variable::new("A_min", "Minimum cross-section", "mm^2"),
                ],
                assumptions: vec!["Comparison at full precision"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/earthing.rs",
                source_function: "EarthingBreakdown::strip_cross_section_ok",
            },

            Equation::ResistanceLimitCheck => EquationMetadata {
                name: "Earthing Resistance Limit",
                description: "Net earthing resistance must be positive and below 4 ohm",
                formula_plain: "0 < R_net < 4",
                reference: CodeReference::IS3043 { year: IS3043_YEAR, topic: "Resistance to earth" },
                variables: vec![Variable::new("R_net", "Net earthing resistance", "ohm")],
                assumptions: vec!["Comparison at full precision"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/earthing.rs",
                source_function: "EarthingBreakdown::earthing_resistance_ok",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories, sorted
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![DesignChecks, Resistance, ConductorSizing, HeatDissipation];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Heat dissipation
    Equation::PermissibleCurrentDensity,
    Equation::RequiredDissipationArea,
    Equation::PipeSurfaceArea,
    Equation::PlateSurfaceArea,
    Equation::StripSurfaceArea,
    // Conductor sizing
    Equation::MinStripCrossSection,
    Equation::SelectedStripCrossSection,
    // Resistance
    Equation::PipeResistance,
    Equation::PlateResistance,
    Equation::StripResistance,
    Equation::ParallelIdentical,
    Equation::ParallelPair,
    // Checks
    Equation::HeatDissipationCheck,
    Equation::StripSizeCheck,
    Equation::ResistanceLimitCheck,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Electrode resistance")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// True if the equation was recorded at least once
    pub fn contains(&self, equation: Equation) -> bool {
        self.usages.iter().any(|u| u.equation == equation)
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the EQUATIONS.md reference document from the registry.
///
/// # Example
///
/// ```rust
/// use earthing_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Earthing Equations Reference"));
/// assert!(markdown.contains("Heat Dissipation"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Earthing Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used to evaluate an earthing design against
IS 3043:2018. Each equation includes its formula, reference, source location,
and assumptions.

## Constants

| Constant | Value | Used by |
|----------|-------|---------|
| pi (areas) | 3.141592653589793 | Surface area formulas |
| pi (resistance) | 3.14 | Resistance formulas |
| Current density coefficient | 7570 | Permissible current density |
| Resistance limit | 4 ohm | Earthing resistance check |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 15);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let pipe = Equation::PipeResistance.metadata();
        assert!(pipe.formula_plain.contains("ln(2 * L / d)"));
        assert!(pipe.assumptions.contains(&"pi = 3.14"));
    }

    #[test]
    fn test_code_reference_citation() {
        let table = CodeReference::IS3043 { year: 2018, topic: "Table 11A" };
        assert_eq!(table.citation(), "IS 3043:2018, Table 11A");
        assert_eq!(CodeReference::CircuitTheory.short_form(), "Circuit Theory");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ParallelIdentical, "Electrodes");
        tracker.record(Equation::PipeResistance, "Electrodes");
        tracker.record(Equation::ParallelIdentical, "Strips");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations().len(), 2);
        assert!(tracker.contains(Equation::PipeResistance));
        assert!(!tracker.contains(Equation::PlateResistance));
    }

    #[test]
    fn test_by_category() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::PermissibleCurrentDensity, "test");
        tracker.record(Equation::MinStripCrossSection, "test");
        tracker.record(Equation::StripResistance, "test");

        let by_cat = tracker.by_category();
        let categories: Vec<_> = by_cat.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::HeatDissipation,
                EquationCategory::ConductorSizing,
                EquationCategory::Resistance,
            ]
        );
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Earthing Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Heat Dissipation"));
        assert!(markdown.contains("## Conductor Sizing"));
        assert!(markdown.contains("## Earth Resistance"));
        assert!(markdown.contains("## Design Checks"));
        assert!(markdown.contains("### Plate Electrode Resistance"));
        assert!(markdown.contains("`A_min = I * sqrt(t) / K`"));
        assert!(markdown.contains("IS 3043:2018"));
        assert!(markdown.contains("equations/resistance.rs"));
        assert!(markdown.contains("**Total Equations:** 15"));
        assert!(markdown.contains("**Categories:** 4"));
    }
}
