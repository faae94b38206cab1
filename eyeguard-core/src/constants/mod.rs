//! Regulatory Tables for Laser Eyewear Rating
//!
//! This module holds the static data the rating engine reads: exposure limits,
//! duration thresholds and marking vocabularies taken from the European
//! protective-equipment standards. Everything here is a `const` or a `static`
//! with no interior mutability, so the tables are safe to read from any thread.
//!
//! ## Organization
//!
//! Constants are grouped by the standard that defines them:
//! - **EN207**: spectral bands and per-temporal-class exposure limits for filters
//! - **EN208**: power/energy thresholds for alignment eyewear
//! - **EN60825**: maximum permissible exposure and eye geometry
//! - **EN166**: mechanical robustness tags and manufacturer codes
//! - **Temporal**: laser temporal classes (D, I, R, M)
//! - **Materials**: filter thickness correction exponents
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Name constants with their unit suffix (`_NM`, `_S`, `_W`, `_J`)
//! 3. Reference the standard clause where a value comes from

/// EN207 spectral bands and exposure limits.
pub mod en207;

/// EN208 alignment eyewear thresholds.
pub mod en208;

/// EN60825 maximum permissible exposure and ocular constants.
pub mod en60825;

/// EN166 robustness tags and manufacturer identification codes.
pub mod en166;

/// Laser temporal classes and their pulse-duration intervals.
pub mod temporal;

/// Filter material correction exponents.
pub mod materials;

// Re-export commonly used constants for convenience
pub use en207::{SpectralBand, EN207_BANDS, VISIBLE_MAX_NM, VISIBLE_MIN_NM};

pub use en208::{
    EN208_CONTINUOUS_POWER_LIMIT_W, EN208_PULSE_ENERGY_LIMIT_J,
    EN208_LONG_PULSE_THRESHOLD_S, EN208_MIN_PULSE_DURATION_S,
    EN208_MAX_WAVELENGTH_NM, EN208_MIN_WAVELENGTH_NM,
};

pub use en60825::{BLINK_REFLEX_TIME_S, PUPIL_DIAMETER_MM, REPETITIVE_EXPOSURE_TIME_BASE_S};

pub use en166::{Robustness, manufacturer_name};

pub use temporal::LaserType;

pub use materials::Material;
