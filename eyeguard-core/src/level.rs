//! Protection Level Calculation
//!
//! ## Log-Scale Levels
//!
//! A filter of level `n` attenuates by `10^n`. The level a laser requires is
//! therefore the order of magnitude by which its exposure exceeds the limit:
//!
//! ```text
//! level(E, L) = ceil(log10(E / L))
//! allowed(n, L) = L · 10^n
//! ```
//!
//! The ceiling guarantees `allowed(level(E, L), L) >= E`: rounding always
//! goes towards more protection. An exposure already below the limit needs
//! no attenuation and yields level 0.
//!
//! ## Worst Case Governs
//!
//! Eyewear must survive the steady-state average exposure and every single
//! pulse. Both are leveled against their own limit and the larger level wins.
//!
//! ## Repetitive-Pulse Correction
//!
//! For retinal-hazard wavelengths a pulse train is more dangerous than one
//! pulse. The single-pulse exposure is scaled by `N^(1/4)` where
//! `N = f · 5 s` is the number of pulses in the observation window.
//!
//! ```rust
//! use eyeguard_core::level::{exposure_to_level, level_to_exposure};
//! use eyeguard_core::Quantity;
//!
//! let limit = Quantity::watts_per_square_meter(10.0);
//! let exposure = Quantity::watts_per_square_meter(318_310.0);
//!
//! let level = exposure_to_level(exposure, limit).unwrap();
//! assert_eq!(level.value(), 5);
//!
//! let covered = level_to_exposure(level, limit);
//! assert!(covered.si_value() >= exposure.si_value());
//! ```

use core::fmt;

use crate::{
    classifier::En208Regime,
    constants::{
        en207::SpectralBand,
        en208::{EN208_CONTINUOUS_POWER_LIMIT_W, EN208_PULSE_ENERGY_LIMIT_J},
        LaserType,
    },
    errors::{LaserSafetyError, SafetyResult},
    units::{Dimension, Quantity},
};

/// Order-of-magnitude attenuation a filter must provide (the `LB`/`RB` number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectionLevel(u32);

impl ProtectionLevel {
    /// Wrap a raw level number
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Raw level number
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Attenuation factor `10^level`
    pub fn attenuation(self) -> f64 {
        libm::pow(10.0, self.0 as f64)
    }
}

impl fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Level needed to bring `exposure` down to `allowed`
///
/// Both quantities must share a dimension. Fails with
/// [`LaserSafetyError::UndefinedLevel`] when the ratio is not a positive
/// finite number.
pub fn exposure_to_level(exposure: Quantity, allowed: Quantity) -> SafetyResult<ProtectionLevel> {
    let ratio = exposure.ratio(&allowed)?;
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(LaserSafetyError::UndefinedLevel { ratio });
    }

    let raw = libm::ceil(libm::log10(ratio));
    if raw < 0.0 {
        log_warn!("Exposure ratio {} below limit, no attenuation required", ratio);
        return Ok(ProtectionLevel(0));
    }
    Ok(ProtectionLevel(raw as u32))
}

/// Highest exposure a filter of `level` reduces to `allowed`
pub fn level_to_exposure(level: ProtectionLevel, allowed: Quantity) -> Quantity {
    allowed * level.attenuation()
}

/// Exposure limits a rating compares against
///
/// One implementation per standard: EN207 limits are densities chosen by
/// spectral band and temporal class, EN208 limits are absolute power or
/// energy chosen by pulse regime.
pub trait ExposureLimits {
    /// Limit for the average (continuous-wave) exposure
    fn continuous_limit(&self) -> Quantity;

    /// Limit for a single pulse
    fn pulsed_limit(&self) -> Quantity;
}

/// EN207 limits of one band for a declared temporal class
#[derive(Debug, Clone, Copy)]
pub struct En207Limits<'a> {
    /// Band the wavelength was classified into
    pub band: &'a SpectralBand,
    /// Declared temporal class of the laser
    pub laser_type: LaserType,
}

impl ExposureLimits for En207Limits<'_> {
    fn continuous_limit(&self) -> Quantity {
        self.band.limit_for(LaserType::Continuous)
    }

    fn pulsed_limit(&self) -> Quantity {
        self.band.limit_for(self.laser_type)
    }
}

/// EN208 limits for a pulse regime
#[derive(Debug, Clone, Copy)]
pub struct En208Limits {
    /// Regime selected from the pulse duration
    pub regime: En208Regime,
}

impl En208Limits {
    /// Power limit per RB step
    pub fn power_limit() -> Quantity {
        Quantity::watts(EN208_CONTINUOUS_POWER_LIMIT_W)
    }

    /// Energy limit per RB step
    pub fn energy_limit() -> Quantity {
        Quantity::joules(EN208_PULSE_ENERGY_LIMIT_J)
    }
}

impl ExposureLimits for En208Limits {
    fn continuous_limit(&self) -> Quantity {
        Self::power_limit()
    }

    fn pulsed_limit(&self) -> Quantity {
        match self.regime {
            En208Regime::LongPulse => Self::power_limit(),
            En208Regime::ShortPulse => Self::energy_limit(),
        }
    }
}

/// Factor `(f · T)^(1/4)` for a pulse train observed over `time_base`
pub fn repetitive_pulse_correction(repetition_rate: Quantity, time_base: Quantity) -> SafetyResult<f64> {
    let pulses = (repetition_rate * time_base).expect_dimension(Dimension::DIMENSIONLESS)?;
    Ok(libm::pow(pulses.si_value(), 0.25))
}

/// Inputs of a combined continuous + pulsed rating
#[derive(Debug, Clone, Copy)]
pub struct ExposureProfile {
    /// Average exposure (power or irradiance)
    pub continuous: Quantity,
    /// Single-pulse exposure, `None` for continuous-wave lasers
    pub pulsed: Option<Quantity>,
    /// Pulse repetition rate
    pub repetition_rate: Option<Quantity>,
    /// Wavelength lies in the retinal hazard region
    pub is_visible: bool,
}

/// Worst of the continuous and (corrected) single-pulse levels
///
/// Visible pulse trains are scaled by [`repetitive_pulse_correction`] before
/// leveling, which makes the repetition rate mandatory for them.
pub fn compute_required_level<L: ExposureLimits>(
    profile: &ExposureProfile,
    limits: &L,
    time_base: Quantity,
) -> SafetyResult<ProtectionLevel> {
    let level_cw = exposure_to_level(profile.continuous, limits.continuous_limit())?;

    let Some(pulsed) = profile.pulsed else {
        return Ok(level_cw);
    };

    let corrected = if profile.is_visible {
        let rate = profile
            .repetition_rate
            .ok_or(LaserSafetyError::MissingParameter { name: "repetition_rate" })?;
        pulsed * repetitive_pulse_correction(rate, time_base)?
    } else {
        pulsed
    };

    let level_pulsed = exposure_to_level(corrected, limits.pulsed_limit())?;
    log_debug!("Continuous level {}, pulsed level {}", level_cw, level_pulsed);

    Ok(level_cw.max(level_pulsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{en60825::REPETITIVE_EXPOSURE_TIME_BASE_S, EN207_BANDS};

    fn time_base() -> Quantity {
        Quantity::seconds(REPETITIVE_EXPOSURE_TIME_BASE_S)
    }

    #[test]
    fn level_at_limit_is_zero() {
        let limit = Quantity::watts_per_square_meter(10.0);
        assert_eq!(exposure_to_level(limit, limit).unwrap().value(), 0);
    }

    #[test]
    fn one_decade_is_one_level() {
        let limit = Quantity::watts_per_square_meter(10.0);
        let exposure = Quantity::watts_per_square_meter(100.0);
        assert_eq!(exposure_to_level(exposure, limit).unwrap().value(), 1);
    }

    #[test]
    fn partial_decade_rounds_up() {
        let limit = Quantity::watts_per_square_meter(10.0);
        let exposure = Quantity::watts_per_square_meter(318_309.886);
        assert_eq!(exposure_to_level(exposure, limit).unwrap().value(), 5);
    }

    #[test]
    fn below_limit_clamps_to_zero() {
        let limit = Quantity::watts_per_square_meter(10.0);
        let exposure = Quantity::watts_per_square_meter(0.01);
        assert_eq!(exposure_to_level(exposure, limit).unwrap().value(), 0);
    }

    #[test]
    fn non_positive_exposure_undefined() {
        let limit = Quantity::watts_per_square_meter(10.0);
        let zero = Quantity::watts_per_square_meter(0.0);
        let negative = Quantity::watts_per_square_meter(-1.0);

        assert_eq!(
            exposure_to_level(zero, limit),
            Err(LaserSafetyError::UndefinedLevel { ratio: 0.0 })
        );
        assert!(matches!(
            exposure_to_level(negative, limit),
            Err(LaserSafetyError::UndefinedLevel { .. })
        ));
    }

    #[test]
    fn mismatched_exposure_rejected() {
        let limit = Quantity::watts_per_square_meter(10.0);
        let energy_density = Quantity::joules_per_square_meter(1.0);
        assert!(matches!(
            exposure_to_level(energy_density, limit),
            Err(LaserSafetyError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn inverse_scales_limit() {
        let limit = Quantity::watts(1e-3);
        let allowed = level_to_exposure(ProtectionLevel::new(3), limit);
        assert!((allowed.si_value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correction_factor() {
        // 16 Hz over 5 s = 80 pulses, 80^0.25 ≈ 2.99
        let factor = repetitive_pulse_correction(Quantity::hertz(16.0), time_base()).unwrap();
        assert!((factor - libm::pow(80.0, 0.25)).abs() < 1e-12);

        // Rate must be a frequency
        assert!(repetitive_pulse_correction(Quantity::seconds(1.0), time_base()).is_err());
    }

    #[test]
    fn continuous_only_profile() {
        let limits = En207Limits { band: &EN207_BANDS[1], laser_type: LaserType::Continuous };
        let profile = ExposureProfile {
            continuous: Quantity::watts_per_square_meter(1e4),
            pulsed: None,
            repetition_rate: None,
            is_visible: true,
        };
        assert_eq!(compute_required_level(&profile, &limits, time_base()).unwrap().value(), 3);
    }

    #[test]
    fn pulsed_level_governs() {
        let limits = En207Limits { band: &EN207_BANDS[2], laser_type: LaserType::GiantPulsed };
        let profile = ExposureProfile {
            continuous: Quantity::watts_per_square_meter(1e4),
            pulsed: Some(Quantity::joules_per_square_meter(1e2)),
            repetition_rate: Some(Quantity::hertz(10.0)),
            is_visible: false,
        };
        // CW: log10(1e4 / 1e3) = 1, pulsed: log10(1e2 / 1e-4) = 6
        assert_eq!(compute_required_level(&profile, &limits, time_base()).unwrap().value(), 6);
    }

    #[test]
    fn visible_correction_raises_level() {
        let limits = En207Limits { band: &EN207_BANDS[1], laser_type: LaserType::Pulsed };
        let uncorrected = ExposureProfile {
            continuous: Quantity::watts_per_square_meter(1.0),
            pulsed: Some(Quantity::joules_per_square_meter(5.0)),
            repetition_rate: Some(Quantity::hertz(1000.0)),
            is_visible: false,
        };
        let corrected = ExposureProfile { is_visible: true, ..uncorrected };

        // 5 / 5e-3 = 1e3 -> 3, corrected by 5000^0.25 ≈ 8.4 -> 4
        assert_eq!(compute_required_level(&uncorrected, &limits, time_base()).unwrap().value(), 3);
        assert_eq!(compute_required_level(&corrected, &limits, time_base()).unwrap().value(), 4);
    }

    #[test]
    fn visible_pulse_train_needs_rate() {
        let limits = En207Limits { band: &EN207_BANDS[1], laser_type: LaserType::Pulsed };
        let profile = ExposureProfile {
            continuous: Quantity::watts_per_square_meter(100.0),
            pulsed: Some(Quantity::joules_per_square_meter(1.0)),
            repetition_rate: None,
            is_visible: true,
        };
        assert_eq!(
            compute_required_level(&profile, &limits, time_base()),
            Err(LaserSafetyError::MissingParameter { name: "repetition_rate" })
        );
    }

    #[test]
    fn en208_limits_follow_regime() {
        let long = En208Limits { regime: En208Regime::LongPulse };
        let short = En208Limits { regime: En208Regime::ShortPulse };
        assert_eq!(long.pulsed_limit(), Quantity::watts(1e-3));
        assert_eq!(short.pulsed_limit(), Quantity::joules(2e-7));
        assert_eq!(short.continuous_limit(), Quantity::watts(1e-3));
    }
}
