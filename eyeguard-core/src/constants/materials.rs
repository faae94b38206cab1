//! Filter Material Corrections
//!
//! Absorbing filters thicker than 1 mm attenuate more than the reference
//! sample; the correction grows as a power of the thickness with an exponent
//! depending on the substrate.

use core::fmt;
use core::str::FromStr;

/// Filter substrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Material {
    /// Mineral glass
    Glass,
    /// Polycarbonate and other polymers
    Plastic,
}

impl Material {
    /// Thickness exponent of the correction
    pub const fn correction_exponent(self) -> f64 {
        match self {
            Self::Glass => 1.1693,
            Self::Plastic => 1.2233,
        }
    }

    /// Lower-case material name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Plastic => "plastic",
        }
    }
}

impl FromStr for Material {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glass" => Ok(Self::Glass),
            "plastic" => Ok(Self::Plastic),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference sample thickness below which no correction applies (mm).
pub const REFERENCE_THICKNESS_MM: f64 = 1.0;
