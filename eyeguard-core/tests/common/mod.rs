//! Shared laser fixtures for integration tests
//!
//! Each fixture is a realistic source with its expected markings worked out
//! by hand from the EN207/EN208 tables.

#![allow(dead_code)]

use eyeguard_core::{LaserDescription, LaserType, Quantity};

/// Laser plus the markings it must produce, EN208 first
pub struct Scenario {
    pub name: &'static str,
    pub laser: LaserDescription,
    pub expected: &'static [&'static str],
}

/// 1 W green DPSS, 2 mm beam, operator aligns by eye
pub fn green_dpss() -> Scenario {
    Scenario {
        name: "green_dpss",
        laser: LaserDescription::continuous(
            Quantity::nanometers(532.0),
            Quantity::millimeters(2.0),
            Quantity::watts(1.0),
            true,
        ),
        expected: &["1W 1J 532 RB3", "532 D LB5"],
    }
}

/// 5 mW helium-neon, 1 mm beam
pub fn helium_neon() -> Scenario {
    Scenario {
        name: "helium_neon",
        laser: LaserDescription::continuous(
            Quantity::nanometers(633.0),
            Quantity::millimeters(1.0),
            Quantity::watts(5e-3),
            true,
        ),
        expected: &["1W 1J 633 RB1", "633 D LB3"],
    }
}

/// Q-switched Nd:YAG, 200 mJ / 8 ns at 10 Hz, 5 mm beam
pub fn q_switched_yag() -> Scenario {
    Scenario {
        name: "q_switched_yag",
        laser: LaserDescription::pulsed(
            Quantity::nanometers(1064.0),
            LaserType::GiantPulsed,
            Quantity::millimeters(5.0),
            Quantity::joules(0.2),
            Quantity::seconds(8e-9),
            Quantity::hertz(10.0),
            true,
        ),
        expected: &["1064 R LB7"],
    }
}

/// Frequency-doubled Q-switched laser, 1 mJ / 10 ns at 1 kHz, 3 mm beam
pub fn q_switched_green() -> Scenario {
    Scenario {
        name: "q_switched_green",
        laser: LaserDescription::pulsed(
            Quantity::nanometers(532.0),
            LaserType::GiantPulsed,
            Quantity::millimeters(3.0),
            Quantity::joules(1e-3),
            Quantity::seconds(10e-9),
            Quantity::hertz(1000.0),
            true,
        ),
        expected: &["100W 1J 532 RB5", "532 R LB6"],
    }
}

/// Ti:sapphire oscillator, 10 nJ / 100 fs at 80 MHz, 2 mm beam
pub fn mode_locked_ti_sapphire() -> Scenario {
    Scenario {
        name: "mode_locked_ti_sapphire",
        laser: LaserDescription::pulsed(
            Quantity::nanometers(800.0),
            LaserType::ModeLocked,
            Quantity::millimeters(2.0),
            Quantity::joules(1e-8),
            Quantity::seconds(1e-13),
            Quantity::hertz(80e6),
            true,
        ),
        expected: &["800 M LB5"],
    }
}

/// Long-pulse green laser, 10 mJ / 1 ms at 10 Hz, 2 mm beam
pub fn long_pulse_green() -> Scenario {
    Scenario {
        name: "long_pulse_green",
        laser: LaserDescription::pulsed(
            Quantity::nanometers(532.0),
            LaserType::Pulsed,
            Quantity::millimeters(2.0),
            Quantity::joules(0.01),
            Quantity::seconds(1e-3),
            Quantity::hertz(10.0),
            true,
        ),
        expected: &["100W 1J 532 RB5", "532 I LB7"],
    }
}

/// 10 mW deep-UV, 1 mm beam
pub fn deep_uv() -> Scenario {
    Scenario {
        name: "deep_uv",
        laser: LaserDescription::continuous(
            Quantity::nanometers(266.0),
            Quantity::millimeters(1.0),
            Quantity::watts(0.01),
            true,
        ),
        expected: &["266 D LB8"],
    }
}

/// 10 W CO2, 5 mm beam
pub fn carbon_dioxide() -> Scenario {
    Scenario {
        name: "carbon_dioxide",
        laser: LaserDescription::continuous(
            Quantity::nanometers(10_600.0),
            Quantity::millimeters(5.0),
            Quantity::watts(10.0),
            true,
        ),
        expected: &["10600 D LB3"],
    }
}

/// Every fixture
pub fn all_scenarios() -> Vec<Scenario> {
    vec![
        green_dpss(),
        helium_neon(),
        q_switched_yag(),
        q_switched_green(),
        mode_locked_ti_sapphire(),
        long_pulse_green(),
        deep_uv(),
        carbon_dioxide(),
    ]
}
