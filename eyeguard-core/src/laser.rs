//! Laser source description
//!
//! A [`LaserDescription`] is the single input of a rating computation. It is
//! built once, validated, and never mutated. Optional pulse fields are
//! `None` when no pulse data was supplied, which is distinct from zero.

use crate::{
    constants::LaserType,
    errors::{LaserSafetyError, SafetyResult},
    units::{Dimension, Quantity},
};

/// Physical emission parameters of a laser
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaserDescription {
    /// Emission wavelength (length)
    pub wavelength: Quantity,

    /// Declared temporal class
    pub laser_type: LaserType,

    /// Beam diameter at the waist (length)
    pub beam_waist: Quantity,

    /// Time-averaged output power
    pub average_power: Quantity,

    /// Energy of a single pulse
    #[cfg_attr(feature = "serde", serde(default))]
    pub pulse_energy: Option<Quantity>,

    /// Duration of a single pulse
    #[cfg_attr(feature = "serde", serde(default))]
    pub pulse_duration: Option<Quantity>,

    /// Pulse repetition rate (frequency)
    #[cfg_attr(feature = "serde", serde(default))]
    pub repetition_rate: Option<Quantity>,

    /// Eyewear must also allow looking into the beam (alignment work, EN208)
    #[cfg_attr(feature = "serde", serde(default = "default_direct_view"))]
    pub needs_direct_view: bool,
}

#[cfg(feature = "serde")]
fn default_direct_view() -> bool {
    true
}

impl LaserDescription {
    /// Continuous-wave laser: no pulse data
    pub fn continuous(
        wavelength: Quantity,
        beam_waist: Quantity,
        average_power: Quantity,
        needs_direct_view: bool,
    ) -> Self {
        Self {
            wavelength,
            laser_type: LaserType::Continuous,
            beam_waist,
            average_power,
            pulse_energy: None,
            pulse_duration: None,
            repetition_rate: None,
            needs_direct_view,
        }
    }

    /// Pulsed laser; the average power is `pulse_energy · repetition_rate`
    pub fn pulsed(
        wavelength: Quantity,
        laser_type: LaserType,
        beam_waist: Quantity,
        pulse_energy: Quantity,
        pulse_duration: Quantity,
        repetition_rate: Quantity,
        needs_direct_view: bool,
    ) -> Self {
        Self {
            wavelength,
            laser_type,
            beam_waist,
            average_power: pulse_energy * repetition_rate,
            pulse_energy: Some(pulse_energy),
            pulse_duration: Some(pulse_duration),
            repetition_rate: Some(repetition_rate),
            needs_direct_view,
        }
    }

    /// Start a builder
    pub fn builder() -> LaserBuilder {
        LaserBuilder::default()
    }

    /// Check dimensions and physical sanity of every supplied field
    pub fn validate(&self) -> SafetyResult<()> {
        // Non-positive wavelengths are left to the band lookup (OutOfRange)
        check_finite(self.wavelength, Dimension::LENGTH, "wavelength")?;
        check_positive(self.beam_waist, Dimension::LENGTH, "beam_waist")?;
        check_finite(self.average_power, Dimension::POWER, "average_power")?;

        if let Some(energy) = self.pulse_energy {
            check_finite(energy, Dimension::ENERGY, "pulse_energy")?;
            if self.is_continuous() {
                return Err(LaserSafetyError::InvalidValue { name: "pulse_energy" });
            }
        }
        if let Some(duration) = self.pulse_duration {
            check_finite(duration, Dimension::TIME, "pulse_duration")?;
            if duration.si_value() < 0.0 {
                return Err(LaserSafetyError::InvalidValue { name: "pulse_duration" });
            }
        }
        if let Some(rate) = self.repetition_rate {
            check_finite(rate, Dimension::FREQUENCY, "repetition_rate")?;
        }
        Ok(())
    }

    /// True for continuous-wave lasers
    pub fn is_continuous(&self) -> bool {
        self.laser_type.is_continuous()
    }

    /// Beam cross-section at the waist, `π·(d/2)²`
    pub fn beam_area(&self) -> Quantity {
        let radius = self.beam_waist / 2.0;
        radius * radius * core::f64::consts::PI
    }
}

fn check_finite(value: Quantity, dimension: Dimension, name: &'static str) -> SafetyResult<()> {
    value.expect_dimension(dimension)?;
    if value.is_finite() {
        Ok(())
    } else {
        Err(LaserSafetyError::InvalidValue { name })
    }
}

fn check_positive(value: Quantity, dimension: Dimension, name: &'static str) -> SafetyResult<()> {
    value.expect_dimension(dimension)?;
    if value.is_positive() {
        Ok(())
    } else {
        Err(LaserSafetyError::InvalidValue { name })
    }
}

/// Incremental construction of a [`LaserDescription`]
///
/// Missing mandatory fields surface as [`LaserSafetyError::MissingParameter`]
/// from [`LaserBuilder::build`]. The temporal class is inferred from the pulse
/// duration when not declared, and the average power from pulse energy and
/// repetition rate when not given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaserBuilder {
    wavelength: Option<Quantity>,
    laser_type: Option<LaserType>,
    beam_waist: Option<Quantity>,
    average_power: Option<Quantity>,
    pulse_energy: Option<Quantity>,
    pulse_duration: Option<Quantity>,
    repetition_rate: Option<Quantity>,
    needs_direct_view: Option<bool>,
}

impl LaserBuilder {
    /// Set the wavelength
    pub fn wavelength(mut self, wavelength: Quantity) -> Self {
        self.wavelength = Some(wavelength);
        self
    }

    /// Declare the temporal class
    pub fn laser_type(mut self, laser_type: LaserType) -> Self {
        self.laser_type = Some(laser_type);
        self
    }

    /// Set the beam waist diameter
    pub fn beam_waist(mut self, beam_waist: Quantity) -> Self {
        self.beam_waist = Some(beam_waist);
        self
    }

    /// Set the average power
    pub fn average_power(mut self, average_power: Quantity) -> Self {
        self.average_power = Some(average_power);
        self
    }

    /// Set the energy per pulse
    pub fn pulse_energy(mut self, pulse_energy: Quantity) -> Self {
        self.pulse_energy = Some(pulse_energy);
        self
    }

    /// Set the pulse duration
    pub fn pulse_duration(mut self, pulse_duration: Quantity) -> Self {
        self.pulse_duration = Some(pulse_duration);
        self
    }

    /// Set the repetition rate
    pub fn repetition_rate(mut self, repetition_rate: Quantity) -> Self {
        self.repetition_rate = Some(repetition_rate);
        self
    }

    /// Require (or not) EN208 alignment viewing. Defaults to `true`.
    pub fn needs_direct_view(mut self, needs_direct_view: bool) -> Self {
        self.needs_direct_view = Some(needs_direct_view);
        self
    }

    /// Assemble and validate the description
    pub fn build(self) -> SafetyResult<LaserDescription> {
        let wavelength = self
            .wavelength
            .ok_or(LaserSafetyError::MissingParameter { name: "wavelength" })?;
        let beam_waist = self
            .beam_waist
            .ok_or(LaserSafetyError::MissingParameter { name: "beam_waist" })?;

        let laser_type = match (self.laser_type, self.pulse_duration) {
            (Some(declared), _) => declared,
            (None, Some(duration)) => {
                let seconds = duration.expect_dimension(Dimension::TIME)?.si_value();
                LaserType::from_pulse_duration(seconds)
                    .ok_or(LaserSafetyError::InvalidValue { name: "pulse_duration" })?
            }
            (None, None) if self.pulse_energy.is_some() => {
                return Err(LaserSafetyError::MissingParameter { name: "pulse_duration" })
            }
            (None, None) => LaserType::Continuous,
        };

        let average_power = match (self.average_power, self.pulse_energy, self.repetition_rate) {
            (Some(power), _, _) => power,
            (None, Some(energy), Some(rate)) => energy * rate,
            (None, Some(_), None) => {
                return Err(LaserSafetyError::MissingParameter { name: "repetition_rate" })
            }
            (None, None, _) => {
                return Err(LaserSafetyError::MissingParameter { name: "average_power" })
            }
        };

        let laser = LaserDescription {
            wavelength,
            laser_type,
            beam_waist,
            average_power,
            pulse_energy: self.pulse_energy,
            pulse_duration: self.pulse_duration,
            repetition_rate: self.repetition_rate,
            needs_direct_view: self.needs_direct_view.unwrap_or(true),
        };
        laser.validate()?;
        Ok(laser)
    }
}
