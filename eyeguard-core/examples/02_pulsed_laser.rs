//! Pulsed Laser Example
//!
//! Rates eyewear for pulsed sources described through the builder, which
//! infers the temporal class from the pulse duration and the average power
//! from pulse energy and repetition rate.
//!
//! ## What You'll Learn
//!
//! - Building a pulsed laser description
//! - How the pulse regime changes the EN208 rating
//! - Handling missing parameters
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_pulsed_laser
//! ```

use eyeguard_core::{
    compute_required_filters, LaserDescription, LaserSafetyError, LaserType, Quantity,
};

fn rate(name: &str, laser: &LaserDescription) -> Result<(), LaserSafetyError> {
    println!("{} (class {}, {})", name, laser.laser_type, laser.laser_type.description());
    for filter in compute_required_filters(laser)?.iter() {
        println!("  {}", filter);
    }
    Ok(())
}

fn main() -> Result<(), LaserSafetyError> {
    println!("EyeGuard Pulsed Rating");
    println!("======================\n");

    let q_switched = LaserDescription::builder()
        .wavelength(Quantity::nanometers(532.0))
        .beam_waist(Quantity::millimeters(3.0))
        .pulse_energy(Quantity::joules(1e-3))
        .pulse_duration(Quantity::seconds(10e-9))
        .repetition_rate(Quantity::hertz(1_000.0))
        .build()?;
    rate("Q-switched green, 1 mJ / 10 ns @ 1 kHz", &q_switched)?;

    let long_pulse = LaserDescription::builder()
        .wavelength(Quantity::nanometers(532.0))
        .beam_waist(Quantity::millimeters(2.0))
        .pulse_energy(Quantity::joules(0.01))
        .pulse_duration(Quantity::seconds(1e-3))
        .repetition_rate(Quantity::hertz(10.0))
        .build()?;
    rate("Long-pulse green, 10 mJ / 1 ms @ 10 Hz", &long_pulse)?;

    let ti_sapphire = LaserDescription::pulsed(
        Quantity::nanometers(800.0),
        LaserType::ModeLocked,
        Quantity::millimeters(2.0),
        Quantity::joules(1e-8),
        Quantity::seconds(100e-15),
        Quantity::hertz(80e6),
        true,
    );
    rate("Ti:sapphire oscillator, 10 nJ / 100 fs @ 80 MHz", &ti_sapphire)?;

    // A pulse train in the retinal range cannot be rated without its rate
    let incomplete = LaserDescription { repetition_rate: None, ..long_pulse };
    match compute_required_filters(&incomplete) {
        Ok(_) => println!("\nunexpected rating"),
        Err(e) => println!("\nIncomplete description rejected: {}", e),
    }

    Ok(())
}
