//! EN60825 Exposure Constants
//!
//! Maximum permissible exposure (MPE) for the eye and the geometric constants
//! behind it. These feed the hazard helpers in [`crate::hazard`].
//!
//! Source: EN 60825-1:2014, Table A.1

/// Dark-adapted pupil diameter used as the limiting aperture (mm).
///
/// Source: EN 60825-1, limiting aperture for 400..1400 nm
pub const PUPIL_DIAMETER_MM: f64 = 7.0;

/// Aversion response (blink reflex) time for visible lasers (s).
///
/// Unaided viewing of a visible beam is assumed to last no longer than this.
pub const BLINK_REFLEX_TIME_S: f64 = 0.25;

/// Observation time base for repetitive-pulse correction (s).
///
/// The pulse count in the correction `N^(1/4)` is the number of pulses
/// emitted during this window: `N = f · 5 s`.
///
/// Source: EN 207:2017, Annex B
pub const REPETITIVE_EXPOSURE_TIME_BASE_S: f64 = 5.0;

/// MPE coefficient for retinal thermal exposure (J/m²·s^-0.75).
pub const MPE_COEFFICIENT_J_PER_M2: f64 = 18.0;

/// MPE time exponent.
pub const MPE_TIME_EXPONENT: f64 = 0.75;

/// Raw MPE formula `18 · t^0.75` in J/m² for `t` in seconds.
///
/// Valid for `t > 0`; the caller checks the domain.
pub fn mpe_j_per_m2(seconds: f64) -> f64 {
    MPE_COEFFICIENT_J_PER_M2 * libm::pow(seconds, MPE_TIME_EXPONENT)
}
