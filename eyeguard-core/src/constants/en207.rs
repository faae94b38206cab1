//! EN207 Spectral Bands
//!
//! EN207 splits the optical spectrum into three bands and gives, for each,
//! the irradiance or radiant exposure a filter must withstand per temporal
//! laser class. A filter of level `LBn` attenuates the incoming exposure by
//! `10^n`, so the required level is the order of magnitude by which the
//! actual exposure exceeds the band limit.
//!
//! The bands are half-open intervals `[low, high)` in nanometers and together
//! partition 180 nm to 1 mm with no gaps or overlaps.
//!
//! Source: EN 207:2017, Table B.2

use crate::constants::temporal::LaserType;
use crate::units::Quantity;

/// Lower edge of the visible/near-infrared retinal hazard region (nm).
///
/// Radiation between 400 nm and 1400 nm is focused onto the retina, so
/// repeated pulses in this range add up and are rated with the
/// repetitive-pulse correction.
pub const VISIBLE_MIN_NM: f64 = 400.0;

/// Upper edge (exclusive) of the retinal hazard region (nm).
pub const VISIBLE_MAX_NM: f64 = 1400.0;

/// One EN207 band with its exposure limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralBand {
    /// Inclusive lower edge (nm)
    pub low_nm: f64,
    /// Exclusive upper edge (nm)
    pub high_nm: f64,
    /// Limit for continuous-wave lasers (W/m²)
    pub continuous_w_per_m2: f64,
    /// Limit for pulsed and giant-pulsed lasers (J/m²)
    pub pulsed_j_per_m2: f64,
    /// Limit for mode-locked lasers (J/m²)
    pub mode_locked_j_per_m2: f64,
}

impl SpectralBand {
    /// Half-open containment test, `low <= wavelength < high`
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        self.low_nm <= wavelength_nm && wavelength_nm < self.high_nm
    }

    /// Exposure limit applying to `laser_type` in this band
    ///
    /// Continuous lasers are limited by irradiance, every pulsed class by
    /// radiant exposure.
    pub fn limit_for(&self, laser_type: LaserType) -> Quantity {
        match laser_type {
            LaserType::Continuous => Quantity::watts_per_square_meter(self.continuous_w_per_m2),
            LaserType::Pulsed | LaserType::GiantPulsed => {
                Quantity::joules_per_square_meter(self.pulsed_j_per_m2)
            }
            LaserType::ModeLocked => Quantity::joules_per_square_meter(self.mode_locked_j_per_m2),
        }
    }
}

/// EN207 bands ordered by wavelength.
pub static EN207_BANDS: [SpectralBand; 3] = [
    // Ultraviolet: photochemical damage to cornea and lens
    SpectralBand {
        low_nm: 180.0,
        high_nm: 315.0,
        continuous_w_per_m2: 1e-3,
        pulsed_j_per_m2: 3e1,
        mode_locked_j_per_m2: 3e10,
    },
    // Retinal hazard region plus UV-A
    SpectralBand {
        low_nm: 315.0,
        high_nm: 1400.0,
        continuous_w_per_m2: 1e1,
        pulsed_j_per_m2: 5e-3,
        mode_locked_j_per_m2: 1.5e-4,
    },
    // Far infrared: thermal damage to cornea
    SpectralBand {
        low_nm: 1400.0,
        high_nm: 1_000_000.0,
        continuous_w_per_m2: 1e3,
        pulsed_j_per_m2: 1e-4,
        mode_locked_j_per_m2: 1e11,
    },
];
