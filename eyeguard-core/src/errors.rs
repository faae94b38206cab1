//! Error Types for Laser Eyewear Rating Failures
//!
//! ## Design Philosophy
//!
//! The rating engine is a pure function of a handful of physical quantities, so
//! every failure is a property of the input rather than of the environment:
//!
//! 1. **Small Size**: Variants carry only numbers, dimensions and `&'static str` names, so
//!    the enum is `Copy` and can be returned from hot paths without allocation.
//!
//! 2. **No Partial Results**: An EN207 rating is mandatory. If any step of it
//!    fails the whole computation fails; there is no fallback level.
//!
//! 3. **Actionable Information**: Each variant names the offending quantity or
//!    the limits it was checked against.
//!
//! ## Error Categories
//!
//! ### Dimensional Problems
//! - `UnitMismatch`: two quantities of different dimensions were combined
//!   (e.g. a pulse energy density compared against a continuous-wave irradiance limit)
//!
//! ### Domain Problems
//! - `OutOfRange`: wavelength outside every EN207 spectral band
//! - `UndefinedLevel`: the exposure/limit ratio is not positive, so `log10` is undefined
//! - `InvalidValue`: NaN, infinite or non-positive physical input
//!
//! ### Incomplete Input
//! - `MissingParameter`: a required laser parameter was not supplied
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use eyeguard_core::{compute_required_filters_continuous, LaserSafetyError, Quantity};
//!
//! let result = compute_required_filters_continuous(
//!     Quantity::nanometers(100.0),
//!     Quantity::millimeters(2.0),
//!     Quantity::watts(1.0),
//!     false,
//! );
//!
//! match result {
//!     Ok(markings) => {
//!         // print_label(&markings);
//!     }
//!     Err(LaserSafetyError::OutOfRange { .. }) => {
//!         // No standardized filter exists for this wavelength
//!     }
//!     Err(_) => {
//!         // Reject the input
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::units::Dimension;

/// Result type for rating operations
pub type SafetyResult<T> = Result<T, LaserSafetyError>;

/// Errors raised while rating laser safety eyewear
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LaserSafetyError {
    /// Quantities of incompatible physical dimensions were combined
    #[error("Unit mismatch: expected {expected}, found {found}")]
    UnitMismatch {
        /// Dimension the operation required
        expected: Dimension,
        /// Dimension that was actually supplied
        found: Dimension,
    },

    /// Wavelength is not covered by any spectral band of the standard
    #[error("Wavelength {wavelength_nm} nm outside range [{min_nm}, {max_nm}) nm")]
    OutOfRange {
        /// Offending wavelength in nanometers
        wavelength_nm: f64,
        /// Lower edge of the first band
        min_nm: f64,
        /// Upper edge of the last band (exclusive)
        max_nm: f64,
    },

    /// The exposure/limit ratio is not positive, so no level can be derived
    #[error("Protection level undefined for exposure ratio {ratio}")]
    UndefinedLevel {
        /// Dimensionless exposure / allowed-limit ratio
        ratio: f64,
    },

    /// A parameter needed by the requested computation was not supplied
    #[error("Missing parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter
        name: &'static str,
    },

    /// Value makes no physical sense (NaN, infinity, non-positive size or duration)
    #[error("Invalid value for {name}")]
    InvalidValue {
        /// Name of the offending parameter
        name: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for LaserSafetyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnitMismatch { expected, found } =>
                defmt::write!(fmt, "Unit mismatch: {} vs {}", expected, found),
            Self::OutOfRange { wavelength_nm, min_nm, max_nm } =>
                defmt::write!(fmt, "{} nm outside [{}, {})", wavelength_nm, min_nm, max_nm),
            Self::UndefinedLevel { ratio } =>
                defmt::write!(fmt, "Level undefined for ratio {}", ratio),
            Self::MissingParameter { name } =>
                defmt::write!(fmt, "Missing {}", name),
            Self::InvalidValue { name } =>
                defmt::write!(fmt, "Invalid {}", name),
        }
    }
}
