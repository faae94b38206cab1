//! Ocular hazard helpers
//!
//! Quantities around the filter rating that a safety officer usually needs
//! next to it: the EN60825 maximum permissible exposure, the distance beyond
//! which the bare beam is safe, optical transmittance for a level, and the
//! thickness correction of absorbing filters.

use crate::{
    constants::{
        en60825::{mpe_j_per_m2, BLINK_REFLEX_TIME_S},
        materials::{Material, REFERENCE_THICKNESS_MM},
    },
    errors::{LaserSafetyError, SafetyResult},
    level::ProtectionLevel,
    units::{Quantity, Unit},
};

/// Fraction of light a filter of `level` lets through, `10^-level`
pub fn transmittance(level: ProtectionLevel) -> f64 {
    1.0 / level.attenuation()
}

/// EN60825 MPE `18 · t^0.75` as radiant exposure
pub fn mpe_radiant_exposure(exposure_time: Quantity) -> SafetyResult<Quantity> {
    let seconds = exposure_time.value_in(Unit::Second)?;
    if !(seconds > 0.0 && seconds.is_finite()) {
        return Err(LaserSafetyError::InvalidValue { name: "exposure_time" });
    }
    Ok(Quantity::joules_per_square_meter(mpe_j_per_m2(seconds)))
}

/// EN60825 MPE averaged over the exposure time, as irradiance
pub fn mpe_irradiance(exposure_time: Quantity) -> SafetyResult<Quantity> {
    Ok(mpe_radiant_exposure(exposure_time)? / exposure_time)
}

/// MPE irradiance for accidental viewing limited by the blink reflex
pub fn blink_limited_mpe() -> SafetyResult<Quantity> {
    mpe_irradiance(Quantity::seconds(BLINK_REFLEX_TIME_S))
}

/// Nominal ocular hazard distance of a diverging beam
///
/// ```text
/// NOHD = (sqrt(4·P / (π·E_MPE)) − a) / φ
/// ```
///
/// with `a` the beam diameter at the exit aperture and `φ` the full-angle
/// divergence in radians. A beam that is already below the MPE at the
/// aperture has a distance of zero.
pub fn nominal_ocular_hazard_distance(
    power: Quantity,
    beam_diameter: Quantity,
    divergence_rad: f64,
    mpe: Quantity,
) -> SafetyResult<Quantity> {
    let watts = power.value_in(Unit::Watt)?;
    let diameter_m = beam_diameter.value_in(Unit::Meter)?;
    let mpe_w_per_m2 = mpe.value_in(Unit::WattPerSquareMeter)?;

    if !(divergence_rad > 0.0 && divergence_rad.is_finite()) {
        return Err(LaserSafetyError::InvalidValue { name: "divergence" });
    }
    if !mpe.is_positive() {
        return Err(LaserSafetyError::InvalidValue { name: "mpe" });
    }

    let hazard_diameter_m = libm::sqrt(4.0 * watts / (core::f64::consts::PI * mpe_w_per_m2));
    let distance_m = (hazard_diameter_m - diameter_m) / divergence_rad;

    Ok(Quantity::meters(distance_m.max(0.0)))
}

/// Attenuation gain of a filter thicker than the 1 mm reference sample
///
/// `d^k` for thickness `d` in millimeters above 1 mm, `1` otherwise.
pub fn material_correction(thickness: Quantity, material: Material) -> SafetyResult<f64> {
    let millimeters = thickness.value_in(Unit::Millimeter)?;

    if millimeters > REFERENCE_THICKNESS_MM {
        Ok(libm::pow(millimeters, material.correction_exponent()))
    } else {
        Ok(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Dimension;

    #[test]
    fn transmittance_is_inverse_attenuation() {
        assert_eq!(transmittance(ProtectionLevel::new(0)), 1.0);
        assert!((transmittance(ProtectionLevel::new(3)) - 1e-3).abs() < 1e-18);
    }

    #[test]
    fn mpe_needs_positive_time() {
        assert!(mpe_radiant_exposure(Quantity::seconds(0.0)).is_err());
        assert!(mpe_radiant_exposure(Quantity::seconds(-1.0)).is_err());
        assert!(mpe_radiant_exposure(Quantity::watts(1.0)).is_err());

        let mpe = mpe_radiant_exposure(Quantity::seconds(1.0)).unwrap();
        assert_eq!(mpe.dimension(), Dimension::RADIANT_EXPOSURE);
        assert!((mpe.si_value() - 18.0).abs() < 1e-12);
    }

    #[test]
    fn blink_mpe_is_irradiance() {
        let mpe = blink_limited_mpe().unwrap();
        assert_eq!(mpe.dimension(), Dimension::IRRADIANCE);
        // 18 · 0.25^0.75 / 0.25 ≈ 25.46 W/m²
        assert!((mpe.si_value() - 25.456).abs() < 1e-2);
    }

    #[test]
    fn nohd_of_pointer() {
        // 5 mW, 1 mm exit beam, 1 mrad divergence, 25.46 W/m²
        let mpe = blink_limited_mpe().unwrap();
        let distance = nominal_ocular_hazard_distance(
            Quantity::watts(5e-3),
            Quantity::millimeters(1.0),
            1e-3,
            mpe,
        )
        .unwrap();
        let meters = distance.value_in(Unit::Meter).unwrap();
        // sqrt(4·0.005 / (π·25.456)) ≈ 15.8 mm -> (0.0158 − 0.001) / 0.001 ≈ 14.8 m
        assert!((meters - 14.8).abs() < 0.1);
    }

    #[test]
    fn nohd_clamps_to_zero() {
        let distance = nominal_ocular_hazard_distance(
            Quantity::watts(1e-6),
            Quantity::millimeters(10.0),
            1e-3,
            Quantity::watts_per_square_meter(25.0),
        )
        .unwrap();
        assert_eq!(distance.si_value(), 0.0);
    }

    #[test]
    fn nohd_rejects_bad_divergence() {
        let result = nominal_ocular_hazard_distance(
            Quantity::watts(1.0),
            Quantity::millimeters(1.0),
            0.0,
            Quantity::watts_per_square_meter(25.0),
        );
        assert_eq!(result, Err(LaserSafetyError::InvalidValue { name: "divergence" }));
    }

    #[test]
    fn thin_filters_uncorrected() {
        assert_eq!(material_correction(Quantity::millimeters(1.0), Material::Glass).unwrap(), 1.0);
        assert_eq!(material_correction(Quantity::millimeters(0.5), Material::Plastic).unwrap(), 1.0);
    }

    #[test]
    fn thick_filters_corrected() {
        let glass = material_correction(Quantity::millimeters(2.0), Material::Glass).unwrap();
        assert!((glass - libm::pow(2.0, 1.1693)).abs() < 1e-9);

        let plastic = material_correction(Quantity::millimeters(3.0), Material::Plastic).unwrap();
        assert!((plastic - libm::pow(3.0, 1.2233)).abs() < 1e-9);

        assert!(material_correction(Quantity::seconds(2.0), Material::Glass).is_err());
    }
}
