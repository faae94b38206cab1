//! Spectral and temporal classification of a laser
//!
//! Decides which EN207 band a wavelength falls into, whether the beam lies
//! in the retinal hazard region, and whether (and in which regime) EN208
//! alignment eyewear can be rated at all.

use crate::{
    constants::{
        en207::{SpectralBand, EN207_BANDS, VISIBLE_MAX_NM, VISIBLE_MIN_NM},
        en208::{
            EN208_LONG_PULSE_THRESHOLD_S, EN208_MAX_WAVELENGTH_NM, EN208_MIN_PULSE_DURATION_S,
            EN208_MIN_WAVELENGTH_NM,
        },
    },
    errors::{LaserSafetyError, SafetyResult},
    units::{Quantity, Unit},
};

/// Which EN208 threshold governs the rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum En208Regime {
    /// Continuous wave or pulses longer than 2e-4 s: rated by power
    LongPulse,
    /// Pulses between 1 ns and 2e-4 s: rated by energy per pulse
    ShortPulse,
}

/// EN207 band containing `wavelength`
///
/// First match wins over the ordered band table, with the half-open
/// `low <= λ < high` convention, so a boundary wavelength belongs to the
/// upper band.
pub fn classify_spectral_band(wavelength: Quantity) -> SafetyResult<&'static SpectralBand> {
    let wavelength_nm = wavelength.value_in(Unit::Nanometer)?;

    EN207_BANDS
        .iter()
        .find(|band| band.contains(wavelength_nm))
        .ok_or(LaserSafetyError::OutOfRange {
            wavelength_nm,
            min_nm: EN207_BANDS[0].low_nm,
            max_nm: EN207_BANDS[EN207_BANDS.len() - 1].high_nm,
        })
}

/// True when `wavelength` lies in `[400 nm, 1400 nm)`
pub fn is_visible(wavelength: Quantity) -> SafetyResult<bool> {
    let wavelength_nm = wavelength.value_in(Unit::Nanometer)?;
    Ok((VISIBLE_MIN_NM..VISIBLE_MAX_NM).contains(&wavelength_nm))
}

/// True when `wavelength` lies in the EN208 scope `[400 nm, 700 nm)`
///
/// Near-infrared beams are a retinal hazard but cannot be seen, so they are
/// never rated for alignment eyewear.
pub fn in_en208_scope(wavelength: Quantity) -> SafetyResult<bool> {
    let wavelength_nm = wavelength.value_in(Unit::Nanometer)?;
    Ok((EN208_MIN_WAVELENGTH_NM..EN208_MAX_WAVELENGTH_NM).contains(&wavelength_nm))
}

/// Whether EN208 alignment eyewear can be rated for this laser
///
/// `is_visible` is the EN208 scope test ([`in_en208_scope`]). Requires a
/// visible beam, a need for direct viewing, and either continuous
/// emission or pulses longer than 1 ns. An absent pulse duration on a pulsed
/// laser counts as not exceeding the floor.
pub fn en208_applies(
    is_visible: bool,
    needs_direct_view: bool,
    is_continuous: bool,
    pulse_duration: Option<Quantity>,
) -> SafetyResult<bool> {
    if !(is_visible && needs_direct_view) {
        return Ok(false);
    }
    if is_continuous {
        return Ok(true);
    }
    exceeds(pulse_duration, EN208_MIN_PULSE_DURATION_S)
}

/// EN208 regime; `LongPulse` for continuous lasers or pulses above 2e-4 s
pub fn en208_regime(is_continuous: bool, pulse_duration: Option<Quantity>) -> SafetyResult<En208Regime> {
    if is_continuous || exceeds(pulse_duration, EN208_LONG_PULSE_THRESHOLD_S)? {
        Ok(En208Regime::LongPulse)
    } else {
        Ok(En208Regime::ShortPulse)
    }
}

fn exceeds(duration: Option<Quantity>, threshold_s: f64) -> SafetyResult<bool> {
    match duration {
        Some(duration) => Ok(duration.value_in(Unit::Second)? > threshold_s),
        None => Ok(false),
    }
}
