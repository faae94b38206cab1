//! Top-level rating of laser safety eyewear
//!
//! Data flows one way: laser parameters → classification → levels →
//! markings. EN208 is evaluated first when it applies, EN207 always last;
//! a failure anywhere on the EN207 path fails the whole computation.
//!
//! ```rust
//! use eyeguard_core::{compute_required_filters_continuous, Quantity};
//!
//! let filters = compute_required_filters_continuous(
//!     Quantity::nanometers(532.0),
//!     Quantity::millimeters(2.0),
//!     Quantity::watts(1.0),
//!     true,
//! )?;
//!
//! let labels: Vec<&str> = filters.iter().map(|m| m.as_str()).collect();
//! assert_eq!(labels, ["1W 1J 532 RB3", "532 D LB5"]);
//! # Ok::<(), eyeguard_core::LaserSafetyError>(())
//! ```

use crate::{
    classifier::{
        classify_spectral_band, en208_applies, en208_regime, in_en208_scope, is_visible, En208Regime,
    },
    constants::{en60825::REPETITIVE_EXPOSURE_TIME_BASE_S, LaserType},
    errors::{LaserSafetyError, SafetyResult},
    laser::LaserDescription,
    level::{compute_required_level, En207Limits, En208Limits, ExposureProfile},
    marking::{encode_filter_en207, encode_filter_en208, FilterMarking, MarkingOptions},
    units::{Dimension, Quantity},
};

/// Markings a laser requires, in label order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequiredFilters {
    /// Alignment eyewear rating, when EN208 applies
    pub en208: Option<FilterMarking>,
    /// Direct-beam filter rating
    pub en207: FilterMarking,
}

impl RequiredFilters {
    /// EN208 marking first (if any), then EN207
    pub fn iter(&self) -> impl Iterator<Item = &FilterMarking> {
        self.en208.iter().chain(core::iter::once(&self.en207))
    }

    /// Number of markings (1 or 2)
    pub fn len(&self) -> usize {
        1 + usize::from(self.en208.is_some())
    }

    /// Never empty: the EN207 marking is mandatory
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Rating engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCalculator {
    /// Tokens appended to every marking
    marking: MarkingOptions,
    /// Observation window of the repetitive-pulse correction
    time_base: Quantity,
}

impl Default for FilterCalculator {
    fn default() -> Self {
        Self {
            marking: MarkingOptions::default(),
            // EN207 Annex B observation window
            time_base: Quantity::seconds(REPETITIVE_EXPOSURE_TIME_BASE_S),
        }
    }
}

impl FilterCalculator {
    /// Calculator with standard settings and bare markings
    pub fn new() -> Self {
        Self::default()
    }

    /// Append manufacturer/compliance tokens to every marking
    pub fn with_marking(mut self, marking: MarkingOptions) -> Self {
        self.marking = marking;
        self
    }

    /// Override the repetitive-pulse observation window
    pub fn with_time_base(mut self, time_base: Quantity) -> SafetyResult<Self> {
        time_base.expect_dimension(Dimension::TIME)?;
        if !time_base.is_positive() {
            return Err(LaserSafetyError::InvalidValue { name: "time_base" });
        }
        self.time_base = time_base;
        Ok(self)
    }

    /// Marking options in use
    pub fn marking(&self) -> &MarkingOptions {
        &self.marking
    }

    /// Rate eyewear for `laser`
    pub fn compute_required_filters(&self, laser: &LaserDescription) -> SafetyResult<RequiredFilters> {
        laser.validate()?;

        let area = laser.beam_area();
        let power_density = laser.average_power / area;
        let visible = is_visible(laser.wavelength)?;
        let viewable = in_en208_scope(laser.wavelength)?;
        let continuous = laser.is_continuous();

        if viewable && laser.needs_direct_view && !continuous && laser.pulse_duration.is_none() {
            return Err(LaserSafetyError::MissingParameter { name: "pulse_duration" });
        }

        let en208 = if en208_applies(viewable, laser.needs_direct_view, continuous, laser.pulse_duration)? {
            Some(self.rate_en208(laser, visible)?)
        } else {
            if viewable && laser.needs_direct_view {
                log_warn!("Pulses of {:?} too short for EN208, alignment eyewear not rated", laser.pulse_duration);
            }
            None
        };

        let band = classify_spectral_band(laser.wavelength)?;
        log_debug!("Wavelength {} in EN207 band [{}, {}) nm", laser.wavelength, band.low_nm, band.high_nm);

        let profile = ExposureProfile {
            continuous: power_density,
            pulsed: laser.pulse_energy.map(|energy| energy / area),
            repetition_rate: laser.repetition_rate,
            is_visible: visible,
        };
        let limits = En207Limits { band, laser_type: laser.laser_type };
        let level = compute_required_level(&profile, &limits, self.time_base)?;
        log_debug!("EN207 level LB{} for class {}", level, laser.laser_type);

        let en207 = encode_filter_en207(laser.wavelength, laser.laser_type, level, &self.marking)?;
        Ok(RequiredFilters { en208, en207 })
    }

    /// Rate a pulsed laser; average power is `pulse_energy · repetition_rate`
    #[allow(clippy::too_many_arguments)]
    pub fn compute_required_filters_pulsed(
        &self,
        wavelength: Quantity,
        laser_type: LaserType,
        beam_waist: Quantity,
        pulse_energy: Quantity,
        pulse_duration: Quantity,
        repetition_rate: Quantity,
        needs_direct_view: bool,
    ) -> SafetyResult<RequiredFilters> {
        let laser = LaserDescription::pulsed(
            wavelength,
            laser_type,
            beam_waist,
            pulse_energy,
            pulse_duration,
            repetition_rate,
            needs_direct_view,
        );
        self.compute_required_filters(&laser)
    }

    /// Rate a continuous-wave laser
    pub fn compute_required_filters_continuous(
        &self,
        wavelength: Quantity,
        beam_waist: Quantity,
        average_power: Quantity,
        needs_direct_view: bool,
    ) -> SafetyResult<RequiredFilters> {
        let laser = LaserDescription::continuous(wavelength, beam_waist, average_power, needs_direct_view);
        self.compute_required_filters(&laser)
    }

    /// EN208 works on absolute power and energy, not densities
    fn rate_en208(&self, laser: &LaserDescription, visible: bool) -> SafetyResult<FilterMarking> {
        let regime = en208_regime(laser.is_continuous(), laser.pulse_duration)?;

        // Long pulses are compared by their peak power against the power limit
        let pulsed = match (laser.pulse_energy, regime) {
            (None, _) => None,
            (Some(energy), En208Regime::ShortPulse) => Some(energy),
            (Some(energy), En208Regime::LongPulse) => {
                let duration = laser
                    .pulse_duration
                    .ok_or(LaserSafetyError::MissingParameter { name: "pulse_duration" })?;
                Some(energy / duration)
            }
        };

        let profile = ExposureProfile {
            continuous: laser.average_power,
            pulsed,
            repetition_rate: laser.repetition_rate,
            is_visible: visible,
        };
        let level = compute_required_level(&profile, &En208Limits { regime }, self.time_base)?;
        log_debug!("EN208 level RB{} in {:?} regime", level, regime);

        encode_filter_en208(laser.wavelength, level, &self.marking)
    }
}

/// Rate eyewear for `laser` with standard settings
pub fn compute_required_filters(laser: &LaserDescription) -> SafetyResult<RequiredFilters> {
    FilterCalculator::default().compute_required_filters(laser)
}

/// Rate a pulsed laser with standard settings
pub fn compute_required_filters_pulsed(
    wavelength: Quantity,
    laser_type: LaserType,
    beam_waist: Quantity,
    pulse_energy: Quantity,
    pulse_duration: Quantity,
    repetition_rate: Quantity,
    needs_direct_view: bool,
) -> SafetyResult<RequiredFilters> {
    FilterCalculator::default().compute_required_filters_pulsed(
        wavelength,
        laser_type,
        beam_waist,
        pulse_energy,
        pulse_duration,
        repetition_rate,
        needs_direct_view,
    )
}

/// Rate a continuous-wave laser with standard settings
pub fn compute_required_filters_continuous(
    wavelength: Quantity,
    beam_waist: Quantity,
    average_power: Quantity,
    needs_direct_view: bool,
) -> SafetyResult<RequiredFilters> {
    FilterCalculator::default().compute_required_filters_continuous(
        wavelength,
        beam_waist,
        average_power,
        needs_direct_view,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Robustness;
    use alloc::vec::Vec;

    fn labels(filters: &RequiredFilters) -> Vec<&str> {
        filters.iter().map(FilterMarking::as_str).collect()
    }

    #[test]
    fn green_pointer_without_viewing() {
        let filters = compute_required_filters_continuous(
            Quantity::nanometers(532.0),
            Quantity::millimeters(2.0),
            Quantity::watts(1.0),
            false,
        )
        .unwrap();
        assert_eq!(labels(&filters), ["532 D LB5"]);
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn green_pointer_with_viewing() {
        let filters = compute_required_filters_continuous(
            Quantity::nanometers(532.0),
            Quantity::millimeters(2.0),
            Quantity::watts(1.0),
            true,
        )
        .unwrap();
        // 1 W / 1 mW = 10^3 -> RB3
        assert_eq!(labels(&filters), ["1W 1J 532 RB3", "532 D LB5"]);
    }

    #[test]
    fn infrared_never_gets_en208() {
        let filters = compute_required_filters_continuous(
            Quantity::nanometers(1064.0),
            Quantity::millimeters(2.0),
            Quantity::watts(1.0),
            true,
        )
        .unwrap();
        assert!(filters.en208.is_none());
        assert_eq!(filters.en207.as_str(), "1064 D LB5");
    }

    #[test]
    fn options_appear_on_every_marking() {
        let marking = MarkingOptions::new()
            .with_manufacturer("YL")
            .unwrap()
            .with_ce(true)
            .with_robustness(Robustness::MediumEnergyImpact);
        let calculator = FilterCalculator::new().with_marking(marking);

        let filters = calculator
            .compute_required_filters_continuous(
                Quantity::nanometers(532.0),
                Quantity::millimeters(2.0),
                Quantity::watts(1.0),
                true,
            )
            .unwrap();
        assert_eq!(labels(&filters), ["1W 1J 532 RB3 YL CE B", "532 D LB5 YL CE B"]);
    }

    #[test]
    fn pulsed_visible_without_duration() {
        let laser = LaserDescription {
            pulse_duration: None,
            ..LaserDescription::pulsed(
                Quantity::nanometers(532.0),
                LaserType::GiantPulsed,
                Quantity::millimeters(2.0),
                Quantity::joules(1e-3),
                Quantity::seconds(1e-8),
                Quantity::hertz(10.0),
                true,
            )
        };
        assert_eq!(
            compute_required_filters(&laser),
            Err(LaserSafetyError::MissingParameter { name: "pulse_duration" })
        );
    }

    #[test]
    fn out_of_range_aborts() {
        let result = compute_required_filters_continuous(
            Quantity::nanometers(150.0),
            Quantity::millimeters(2.0),
            Quantity::watts(1.0),
            false,
        );
        assert!(matches!(result, Err(LaserSafetyError::OutOfRange { .. })));
    }

    #[test]
    fn non_positive_wavelength_is_out_of_range() {
        for nanometers in [0.0, -532.0] {
            let result = compute_required_filters_continuous(
                Quantity::nanometers(nanometers),
                Quantity::millimeters(2.0),
                Quantity::watts(1.0),
                true,
            );
            assert!(matches!(result, Err(LaserSafetyError::OutOfRange { .. })));
        }
    }

    #[test]
    fn time_base_must_be_positive_time() {
        assert!(FilterCalculator::new().with_time_base(Quantity::seconds(0.0)).is_err());
        assert!(FilterCalculator::new().with_time_base(Quantity::hertz(5.0)).is_err());
        assert!(FilterCalculator::new().with_time_base(Quantity::seconds(10.0)).is_ok());
    }
}
