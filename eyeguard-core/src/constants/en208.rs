//! EN208 Alignment Eyewear Thresholds
//!
//! Alignment (adjustment) eyewear deliberately lets a fraction of the beam
//! through so the operator can still see it. EN208 therefore rates against
//! absolute power and energy reaching the eye rather than densities: a level
//! `RBn` filter reduces the beam to at most `1 mW · 10^n` (continuous or long
//! pulses) or `0.2 µJ · 10^n` (short pulses).
//!
//! Source: EN 208:2009, Clause 1 and Table 1

/// Shortest wavelength EN208 covers (nm).
pub const EN208_MIN_WAVELENGTH_NM: f64 = 400.0;

/// Upper edge (exclusive) of the EN208 scope (nm).
///
/// Alignment eyewear only makes sense where the beam can actually be seen,
/// so EN208 stops at the red end of the visible spectrum even though the
/// retinal hazard region extends to 1400 nm.
pub const EN208_MAX_WAVELENGTH_NM: f64 = 700.0;

/// Power a class 2 laser may deliver to the eye after the filter (W).
///
/// Applies to continuous-wave lasers and to pulses longer than
/// [`EN208_LONG_PULSE_THRESHOLD_S`].
pub const EN208_CONTINUOUS_POWER_LIMIT_W: f64 = 1e-3;

/// Energy per pulse allowed after the filter for short pulses (J).
pub const EN208_PULSE_ENERGY_LIMIT_J: f64 = 2e-7;

/// Pulse duration above which a pulsed laser is rated like a continuous one (s).
pub const EN208_LONG_PULSE_THRESHOLD_S: f64 = 2e-4;

/// Shortest pulse duration EN208 defines a protection class for (s).
///
/// Below 1 ns there is no RB level; alignment eyewear is not rated.
pub const EN208_MIN_PULSE_DURATION_S: f64 = 1e-9;
