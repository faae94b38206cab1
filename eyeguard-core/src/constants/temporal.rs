//! Laser Temporal Classes
//!
//! EN207 rates a filter separately for each way a laser can deliver its
//! energy over time. The class letter is printed on the filter marking.
//!
//! ```text
//! Class | Emission          | Typical pulse duration | Assumed pulses
//! ------|-------------------|------------------------|---------------
//!   D   | Continuous wave   | ≥ 0.2 s                | 1
//!   I   | Pulsed            | 1 µs .. 0.2 s          | 100
//!   R   | Giant-pulsed (Q)  | 1 ns .. 1 µs           | 100
//!   M   | Mode-locked       | < 1 ns                 | 100
//! ```
//!
//! The duration intervals are half-open and partition `[0, ∞)`, so every
//! non-negative pulse duration maps to exactly one class.
//!
//! Source: EN 207:2017, Table B.1

use core::fmt;

/// Temporal class of a laser source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaserType {
    /// Continuous wave (D)
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Continuous,
    /// Pulsed (I)
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Pulsed,
    /// Giant-pulsed / Q-switched (R)
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    GiantPulsed,
    /// Mode-locked (M)
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    ModeLocked,
}

impl LaserType {
    /// All classes, longest pulses first
    pub const ALL: [LaserType; 4] = [
        LaserType::Continuous,
        LaserType::Pulsed,
        LaserType::GiantPulsed,
        LaserType::ModeLocked,
    ];

    /// Letter printed on the filter marking
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Continuous => "D",
            Self::Pulsed => "I",
            Self::GiantPulsed => "R",
            Self::ModeLocked => "M",
        }
    }

    /// Parse a marking letter
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.tag() == tag)
    }

    /// Short description of the emission mode
    pub const fn description(self) -> &'static str {
        match self {
            Self::Continuous => "Continuous wave",
            Self::Pulsed => "Pulsed",
            Self::GiantPulsed => "Giant-pulsed",
            Self::ModeLocked => "Mode-coupled",
        }
    }

    /// Typical pulse-duration interval `[min, max)` in seconds
    pub const fn typical_pulse_duration_s(self) -> (f64, f64) {
        match self {
            Self::Continuous => (0.2, f64::INFINITY),
            Self::Pulsed => (1e-6, 0.2),
            Self::GiantPulsed => (1e-9, 1e-6),
            Self::ModeLocked => (0.0, 1e-9),
        }
    }

    /// Number of pulses the standard assumes when testing the filter
    pub const fn assumed_pulse_count(self) -> u32 {
        match self {
            Self::Continuous => 1,
            _ => 100,
        }
    }

    /// Class whose typical duration interval contains `seconds`
    ///
    /// Returns `None` for negative or NaN durations.
    pub fn from_pulse_duration(seconds: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|class| {
            let (min, max) = class.typical_pulse_duration_s();
            min <= seconds && seconds < max
        })
    }

    /// True for continuous-wave lasers
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

impl fmt::Display for LaserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
