//! Strip Conductor Materials (IS 3043:2018 Table 11A)
//!
//! Material constant K used when sizing the earthing strip for a short-time
//! fault current. K folds together the conductor's heat capacity,
//! resistivity and permitted final temperature.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Conductor material of the earthing strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripMaterial {
    /// Copper
    #[serde(rename = "CU")]
    Copper,
    /// Aluminium
    #[serde(rename = "AL")]
    Aluminium,
    /// Galvanized iron (steel)
    #[serde(rename = "GI")]
    GalvanizedIron,
}

impl StripMaterial {
    /// All strip materials, in table order
    pub const ALL: [StripMaterial; 3] = [
        StripMaterial::Copper,
        StripMaterial::Aluminium,
        StripMaterial::GalvanizedIron,
    ];

    /// Table code ("CU", "AL", "GI")
    pub fn code(&self) -> &'static str {
        match self {
            StripMaterial::Copper => "CU",
            StripMaterial::Aluminium => "AL",
            StripMaterial::GalvanizedIron => "GI",
        }
    }

    /// Parse a material code, ignoring letter case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use earthing_core::materials::StripMaterial;
    ///
    /// assert_eq!(StripMaterial::from_code("cu").unwrap(), StripMaterial::Copper);
    /// assert!(StripMaterial::from_code("FE").is_err());
    /// ```
    pub fn from_code(code: &str) -> CalcResult<Self> {
        match code.trim().to_uppercase().as_str() {
            "CU" => Ok(StripMaterial::Copper),
            "AL" => Ok(StripMaterial::Aluminium),
            "GI" => Ok(StripMaterial::GalvanizedIron),
            _ => Err(CalcError::unknown_material(code)),
        }
    }

    /// Material constant K (dimensionless, IS 3043 Table 11A)
    pub fn k_constant(&self) -> f64 {
        match self {
            StripMaterial::Copper => 205.0,
            StripMaterial::Aluminium => 126.0,
            StripMaterial::GalvanizedIron => 80.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StripMaterial::Copper => "Copper",
            StripMaterial::Aluminium => "Aluminium",
            StripMaterial::GalvanizedIron => "Galvanized Iron",
        }
    }
}

impl std::fmt::Display for StripMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for StripMaterial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_constants() {
        assert_eq!(StripMaterial::Copper.k_constant(), 205.0);
        assert_eq!(StripMaterial::Aluminium.k_constant(), 126.0);
        assert_eq!(StripMaterial::GalvanizedIron.k_constant(), 80.0);
    }

    #[test]
    fn test_code_roundtrip() {
        for mat in StripMaterial::ALL {
            assert_eq!(StripMaterial::from_code(mat.code()).unwrap(), mat);
        }
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(StripMaterial::from_code("Cu").unwrap(), StripMaterial::Copper);
        assert_eq!(StripMaterial::from_code("al").unwrap(), StripMaterial::Aluminium);
        assert_eq!(StripMaterial::from_code(" gI ").unwrap(), StripMaterial::GalvanizedIron);
    }

    #[test]
    fn test_unknown_material() {
        let err = StripMaterial::from_code("FE").unwrap_err();
        assert_eq!(err, CalcError::unknown_material("FE"));
        assert!("".parse::<StripMaterial>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&StripMaterial::GalvanizedIron).unwrap();
        assert_eq!(json, "\"GI\"");
        let parsed: StripMaterial = serde_json::from_str("\"AL\"").unwrap();
        assert_eq!(parsed, StripMaterial::Aluminium);
    }
}
