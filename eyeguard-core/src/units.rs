//! Physical quantities with dimension tracking
//!
//! Every magnitude that enters the rating engine is a [`Quantity`]: an SI base
//! magnitude tagged with a [`Dimension`] (integer exponents of mass, length and
//! time). Multiplication and division combine dimensions freely, while
//! addition, comparison and unit conversion reject incompatible dimensions with
//! [`LaserSafetyError::UnitMismatch`].
//!
//! ```rust
//! use eyeguard_core::units::{Quantity, Unit};
//!
//! let power = Quantity::watts(1.0);
//! let area = Quantity::millimeters(1.0) * Quantity::millimeters(1.0);
//! let irradiance = power / area;
//!
//! assert_eq!(irradiance.value_in(Unit::WattPerSquareMeter).unwrap(), 1.0e6);
//! assert!(irradiance.value_in(Unit::Joule).is_err());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul};

use crate::errors::{LaserSafetyError, SafetyResult};

/// Exponents of the base dimensions (kg, m, s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Mass exponent
    pub mass: i8,
    /// Length exponent
    pub length: i8,
    /// Time exponent
    pub time: i8,
}

impl Dimension {
    /// Pure number
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0);
    /// m
    pub const LENGTH: Self = Self::new(0, 1, 0);
    /// m²
    pub const AREA: Self = Self::new(0, 2, 0);
    /// s
    pub const TIME: Self = Self::new(0, 0, 1);
    /// 1/s
    pub const FREQUENCY: Self = Self::new(0, 0, -1);
    /// m/s
    pub const SPEED: Self = Self::new(0, 1, -1);
    /// W = kg·m²/s³
    pub const POWER: Self = Self::new(1, 2, -3);
    /// J = kg·m²/s²
    pub const ENERGY: Self = Self::new(1, 2, -2);
    /// W/m² = kg/s³
    pub const IRRADIANCE: Self = Self::new(1, 0, -3);
    /// J/m² = kg/s²
    pub const RADIANT_EXPOSURE: Self = Self::new(1, 0, -2);

    /// Build a dimension from its exponents
    pub const fn new(mass: i8, length: i8, time: i8) -> Self {
        Self { mass, length, time }
    }

    /// Dimension of a product
    pub const fn product(self, other: Self) -> Self {
        Self::new(
            self.mass + other.mass,
            self.length + other.length,
            self.time + other.time,
        )
    }

    /// Dimension of a quotient
    pub const fn quotient(self, other: Self) -> Self {
        Self::new(
            self.mass - other.mass,
            self.length - other.length,
            self.time - other.time,
        )
    }

    /// Conventional name, if the dimension has one
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::DIMENSIONLESS => "dimensionless",
            Self::LENGTH => "length",
            Self::AREA => "area",
            Self::TIME => "time",
            Self::FREQUENCY => "frequency",
            Self::SPEED => "speed",
            Self::POWER => "power",
            Self::ENERGY => "energy",
            Self::IRRADIANCE => "irradiance",
            Self::RADIANT_EXPOSURE => "radiant exposure",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "kg^{} m^{} s^{}", self.mass, self.length, self.time),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Dimension {
    fn format(&self, fmt: defmt::Formatter) {
        match self.name() {
            Some(name) => defmt::write!(fmt, "{}", name),
            None => defmt::write!(fmt, "kg^{} m^{} s^{}", self.mass, self.length, self.time),
        }
    }
}

/// Units accepted at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// nm
    Nanometer,
    /// mm
    Millimeter,
    /// m
    Meter,
    /// m²
    SquareMeter,
    /// s
    Second,
    /// Hz
    Hertz,
    /// W
    Watt,
    /// J
    Joule,
    /// W/m²
    WattPerSquareMeter,
    /// J/m²
    JoulePerSquareMeter,
    /// m/s
    MeterPerSecond,
}

impl Unit {
    /// Dimension measured by this unit
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Nanometer | Self::Millimeter | Self::Meter => Dimension::LENGTH,
            Self::SquareMeter => Dimension::AREA,
            Self::Second => Dimension::TIME,
            Self::Hertz => Dimension::FREQUENCY,
            Self::Watt => Dimension::POWER,
            Self::Joule => Dimension::ENERGY,
            Self::WattPerSquareMeter => Dimension::IRRADIANCE,
            Self::JoulePerSquareMeter => Dimension::RADIANT_EXPOSURE,
            Self::MeterPerSecond => Dimension::SPEED,
        }
    }

    /// Size of one unit in SI base units
    pub const fn scale(self) -> f64 {
        match self {
            Self::Nanometer => 1e-9,
            Self::Millimeter => 1e-3,
            _ => 1.0,
        }
    }

    /// Printed symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanometer => "nm",
            Self::Millimeter => "mm",
            Self::Meter => "m",
            Self::SquareMeter => "m²",
            Self::Second => "s",
            Self::Hertz => "Hz",
            Self::Watt => "W",
            Self::Joule => "J",
            Self::WattPerSquareMeter => "W/m²",
            Self::JoulePerSquareMeter => "J/m²",
            Self::MeterPerSecond => "m/s",
        }
    }
}

/// Magnitude in SI base units tagged with its dimension
///
/// Immutable value type. Construct it through [`Quantity::new`] or one of the
/// per-unit shorthands; read it back through [`Quantity::value_in`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Bind a magnitude to a unit
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: value * unit.scale(),
            dimension: unit.dimension(),
        }
    }

    /// Pure number
    pub const fn dimensionless(value: f64) -> Self {
        Self { value, dimension: Dimension::DIMENSIONLESS }
    }

    /// Length in nanometers
    pub fn nanometers(value: f64) -> Self {
        Self::new(value, Unit::Nanometer)
    }

    /// Length in millimeters
    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    /// Length in meters
    pub fn meters(value: f64) -> Self {
        Self::new(value, Unit::Meter)
    }

    /// Duration in seconds
    pub fn seconds(value: f64) -> Self {
        Self::new(value, Unit::Second)
    }

    /// Rate in hertz
    pub fn hertz(value: f64) -> Self {
        Self::new(value, Unit::Hertz)
    }

    /// Power in watts
    pub fn watts(value: f64) -> Self {
        Self::new(value, Unit::Watt)
    }

    /// Energy in joules
    pub fn joules(value: f64) -> Self {
        Self::new(value, Unit::Joule)
    }

    /// Irradiance in W/m²
    pub fn watts_per_square_meter(value: f64) -> Self {
        Self::new(value, Unit::WattPerSquareMeter)
    }

    /// Radiant exposure in J/m²
    pub fn joules_per_square_meter(value: f64) -> Self {
        Self::new(value, Unit::JoulePerSquareMeter)
    }

    /// Speed in m/s
    pub fn meters_per_second(value: f64) -> Self {
        Self::new(value, Unit::MeterPerSecond)
    }

    /// Dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Raw SI magnitude
    pub fn si_value(&self) -> f64 {
        self.value
    }

    /// Magnitude expressed in `unit`
    pub fn value_in(&self, unit: Unit) -> SafetyResult<f64> {
        self.expect_dimension(unit.dimension())?;
        Ok(self.value / unit.scale())
    }

    /// Fail unless the quantity has dimension `expected`
    pub fn expect_dimension(&self, expected: Dimension) -> SafetyResult<Self> {
        if self.dimension == expected {
            Ok(*self)
        } else {
            Err(LaserSafetyError::UnitMismatch {
                expected,
                found: self.dimension,
            })
        }
    }

    /// Sum of two quantities of the same dimension
    pub fn try_add(self, other: Self) -> SafetyResult<Self> {
        other.expect_dimension(self.dimension)?;
        Ok(Self { value: self.value + other.value, dimension: self.dimension })
    }

    /// Total ordering between two quantities of the same dimension
    pub fn try_cmp(&self, other: &Self) -> SafetyResult<Ordering> {
        other.expect_dimension(self.dimension)?;
        Ok(self.value.total_cmp(&other.value))
    }

    /// Dimensionless ratio `self / other`
    pub fn ratio(&self, other: &Self) -> SafetyResult<f64> {
        other.expect_dimension(self.dimension)?;
        Ok(self.value / other.value)
    }

    /// True when the magnitude is neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// True for finite magnitudes strictly above zero
    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value * rhs.value,
            dimension: self.dimension.product(rhs.dimension),
        }
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value / rhs.value,
            dimension: self.dimension.quotient(rhs.dimension),
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { value: self.value * rhs, dimension: self.dimension }
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Self::Output {
        Self { value: self.value / rhs, dimension: self.dimension }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.dimension)
    }
}
