//! Continuous-Wave Laser Example
//!
//! Rates eyewear for a few common continuous-wave sources and shows the
//! hazard figures a safety officer usually reports next to the marking.
//!
//! ## What You'll Learn
//!
//! - Describing a laser with unit-checked quantities
//! - Reading EN207 and EN208 markings from a rating
//! - Computing MPE and NOHD for the bare beam
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_continuous_laser
//! ```

use eyeguard_core::{
    hazard::{blink_limited_mpe, nominal_ocular_hazard_distance, transmittance},
    FilterCalculator, LaserDescription, LaserSafetyError, MarkingOptions, Quantity, Robustness, Unit,
};

fn main() -> Result<(), LaserSafetyError> {
    println!("EyeGuard Continuous-Wave Rating");
    println!("================================\n");

    let marking = MarkingOptions::new()
        .with_manufacturer("YL")?
        .with_ce(true)
        .with_robustness(Robustness::LowEnergyImpact);
    let calculator = FilterCalculator::new().with_marking(marking);

    let sources = [
        ("HeNe 5 mW", 632.8, 1.0, 5e-3),
        ("DPSS green 1 W", 532.0, 2.0, 1.0),
        ("Nd:YAG 1 W", 1064.0, 2.0, 1.0),
        ("CO2 10 W", 10_600.0, 5.0, 10.0),
    ];

    for (name, wavelength_nm, waist_mm, power_w) in sources {
        let laser = LaserDescription::continuous(
            Quantity::nanometers(wavelength_nm),
            Quantity::millimeters(waist_mm),
            Quantity::watts(power_w),
            true,
        );

        println!("{}", name);
        let filters = calculator.compute_required_filters(&laser)?;
        for filter in filters.iter() {
            println!("  {:<6} {:<28} transmittance {:.0e}", filter.standard, filter, transmittance(filter.level));
        }
    }

    // Hazard distance of the HeNe beam with 1 mrad divergence
    let mpe = blink_limited_mpe()?;
    let nohd = nominal_ocular_hazard_distance(
        Quantity::watts(5e-3),
        Quantity::millimeters(1.0),
        1e-3,
        mpe,
    )?;

    println!("\nBlink-limited MPE: {}", mpe);
    println!("HeNe NOHD: {:.1} m", nohd.value_in(Unit::Meter)?);

    Ok(())
}
