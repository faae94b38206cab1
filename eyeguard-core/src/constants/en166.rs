//! EN166 Marking Vocabulary
//!
//! Certified eyewear carries, after the optical rating, a manufacturer
//! identification and the mechanical robustness class of the frame and
//! filter. Impact classes are defined by the speed of a 6 mm steel ball the
//! eyewear must stop.
//!
//! Source: EN 166:2001, Clause 7.1.4 and Table 9

use core::fmt;

use crate::units::Quantity;

/// Mechanical robustness class of the eyewear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Robustness {
    /// Increased robustness, 22 g ball at 5.1 m/s (S)
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Increased,
    /// Low energy impact, 45 m/s (F)
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    LowEnergyImpact,
    /// Medium energy impact, 120 m/s (B)
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    MediumEnergyImpact,
    /// High energy impact, 190 m/s (A)
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    HighEnergyImpact,
    /// Impact at extreme temperatures, -5 °C and +55 °C (T)
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    ExtremeTemperature,
}

impl Robustness {
    /// Letter printed on the marking
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Increased => "S",
            Self::LowEnergyImpact => "F",
            Self::MediumEnergyImpact => "B",
            Self::HighEnergyImpact => "A",
            Self::ExtremeTemperature => "T",
        }
    }

    /// Parse a marking letter
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            Self::Increased,
            Self::LowEnergyImpact,
            Self::MediumEnergyImpact,
            Self::HighEnergyImpact,
            Self::ExtremeTemperature,
        ]
        .into_iter()
        .find(|r| r.tag() == tag)
    }

    /// Ball speed the eyewear is tested against, for the impact classes
    pub fn impact_speed(self) -> Option<Quantity> {
        let speed_m_per_s = match self {
            Self::LowEnergyImpact => 45.0,
            Self::MediumEnergyImpact => 120.0,
            Self::HighEnergyImpact => 190.0,
            Self::Increased | Self::ExtremeTemperature => return None,
        };
        Some(Quantity::meters_per_second(speed_m_per_s))
    }
}

impl fmt::Display for Robustness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Registered manufacturer identification codes.
pub static MANUFACTURERS: [(&str, &str); 2] = [
    ("RZ", "Росомз"),
    ("YL", "Yamamoto Kogaku Co.,Ltd"),
];

/// Manufacturer name for an identification code
pub fn manufacturer_name(code: &str) -> Option<&'static str> {
    MANUFACTURERS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}
