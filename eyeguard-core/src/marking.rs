//! Filter Marking Encoder
//!
//! ## Marking Grammar
//!
//! Certified laser eyewear carries one line per standard it is rated for:
//!
//! ```text
//! EN207:  <λ nm> <class> LB<n> [manufacturer] [DIN] [CE] [robustness]
//! EN208:  <P max>W <E max>J <λ nm> RB<n> [manufacturer] [DIN] [CE] [robustness]
//! ```
//!
//! The wavelength is printed as an integer number of nanometers, rounded to
//! the nearest integer with ties to even. `P max` and `E max` are the power
//! and energy an `RBn` filter reduces to the EN208 limits, rounded up.
//!
//! Optional tokens that are absent or false are left out entirely: the
//! marking never contains empty tokens or doubled separators.
//!
//! ```rust
//! use eyeguard_core::marking::{encode_filter_en207, MarkingOptions};
//! use eyeguard_core::{LaserType, ProtectionLevel, Quantity};
//!
//! let marking = encode_filter_en207(
//!     Quantity::nanometers(650.0),
//!     LaserType::Pulsed,
//!     ProtectionLevel::new(3),
//!     &MarkingOptions::default(),
//! ).unwrap();
//! assert_eq!(marking.as_str(), "650 I LB3");
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{
    constants::{en166::Robustness, LaserType},
    errors::{LaserSafetyError, SafetyResult},
    level::{level_to_exposure, En208Limits, ProtectionLevel},
    units::{Quantity, Unit},
};

/// Longest manufacturer identification accepted on a marking
pub const MAX_MANUFACTURER_CODE_LEN: usize = 8;

/// Manufacturer identification code
pub type ManufacturerCode = heapless::String<MAX_MANUFACTURER_CODE_LEN>;

/// Standard a marking certifies against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standard {
    /// Filters against direct laser radiation
    En207,
    /// Alignment eyewear
    En208,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En207 => f.pad("EN207"),
            Self::En208 => f.pad("EN208"),
        }
    }
}

/// Metadata printed after the optical rating
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkingOptions {
    /// Manufacturer identification, omitted when empty
    #[cfg_attr(feature = "serde", serde(default))]
    pub manufacturer: ManufacturerCode,

    /// Certified to DIN requirements
    #[cfg_attr(feature = "serde", serde(default))]
    pub din: bool,

    /// Carries the CE conformity mark
    #[cfg_attr(feature = "serde", serde(default))]
    pub ce: bool,

    /// EN166 mechanical robustness class
    #[cfg_attr(feature = "serde", serde(default))]
    pub robustness: Option<Robustness>,
}

impl MarkingOptions {
    /// No optional tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manufacturer code
    pub fn with_manufacturer(mut self, code: &str) -> SafetyResult<Self> {
        self.manufacturer = ManufacturerCode::try_from(code)
            .map_err(|_| LaserSafetyError::InvalidValue { name: "manufacturer" })?;
        Ok(self)
    }

    /// Mark DIN compliance
    pub fn with_din(mut self, din: bool) -> Self {
        self.din = din;
        self
    }

    /// Mark CE conformity
    pub fn with_ce(mut self, ce: bool) -> Self {
        self.ce = ce;
        self
    }

    /// Set the robustness class
    pub fn with_robustness(mut self, robustness: Robustness) -> Self {
        self.robustness = Some(robustness);
        self
    }
}

/// One rendered marking line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterMarking {
    /// Standard this line certifies against
    pub standard: Standard,
    /// Required level
    pub level: ProtectionLevel,
    text: String,
}

impl FilterMarking {
    /// Rendered text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FilterMarking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

/// Space-joined token sink that drops empty tokens
struct TokenWriter {
    text: String,
}

impl TokenWriter {
    fn new() -> Self {
        Self { text: String::new() }
    }

    fn token(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let start = self.text.len();
        if start > 0 {
            self.text.push(' ');
        }
        self.text.write_fmt(args)?;
        if self.text.len() == start + usize::from(start > 0) {
            self.text.truncate(start);
        }
        Ok(())
    }

    fn options(&mut self, options: &MarkingOptions) -> fmt::Result {
        self.token(format_args!("{}", options.manufacturer))?;
        if options.din {
            self.token(format_args!("DIN"))?;
        }
        if options.ce {
            self.token(format_args!("CE"))?;
        }
        if let Some(robustness) = options.robustness {
            self.token(format_args!("{}", robustness))?;
        }
        Ok(())
    }

    fn finish(self, standard: Standard, level: ProtectionLevel) -> FilterMarking {
        FilterMarking { standard, level, text: self.text }
    }
}

/// Wavelength as printed on markings: nearest integer nanometer, ties to even
pub fn wavelength_label_nm(wavelength: Quantity) -> SafetyResult<i64> {
    let nanometers = wavelength.value_in(Unit::Nanometer)?;
    if !nanometers.is_finite() {
        return Err(LaserSafetyError::InvalidValue { name: "wavelength" });
    }
    Ok(libm::rint(nanometers) as i64)
}

/// EN207 marking, e.g. `532 D LB5`
pub fn encode_filter_en207(
    wavelength: Quantity,
    laser_type: LaserType,
    level: ProtectionLevel,
    options: &MarkingOptions,
) -> SafetyResult<FilterMarking> {
    let wavelength_nm = wavelength_label_nm(wavelength)?;

    let mut writer = TokenWriter::new();
    write_tokens(&mut writer, |w| {
        w.token(format_args!("{}", wavelength_nm))?;
        w.token(format_args!("{}", laser_type.tag()))?;
        w.token(format_args!("LB{}", level))?;
        w.options(options)
    })?;
    Ok(writer.finish(Standard::En207, level))
}

/// EN208 marking, e.g. `1W 2J 633 RB3`
pub fn encode_filter_en208(
    wavelength: Quantity,
    level: ProtectionLevel,
    options: &MarkingOptions,
) -> SafetyResult<FilterMarking> {
    let wavelength_nm = wavelength_label_nm(wavelength)?;
    let max_power_w = ceil_label(level_to_exposure(level, En208Limits::power_limit()).value_in(Unit::Watt)?);
    let max_energy_j = ceil_label(level_to_exposure(level, En208Limits::energy_limit()).value_in(Unit::Joule)?);

    let mut writer = TokenWriter::new();
    write_tokens(&mut writer, |w| {
        w.token(format_args!("{}W", max_power_w))?;
        w.token(format_args!("{}J", max_energy_j))?;
        w.token(format_args!("{}", wavelength_nm))?;
        w.token(format_args!("RB{}", level))?;
        w.options(options)
    })?;
    Ok(writer.finish(Standard::En208, level))
}

fn ceil_label(value: f64) -> u64 {
    libm::ceil(value) as u64
}

fn write_tokens<F>(writer: &mut TokenWriter, body: F) -> SafetyResult<()>
where
    F: FnOnce(&mut TokenWriter) -> fmt::Result,
{
    body(writer).map_err(|_| LaserSafetyError::InvalidValue { name: "marking" })
}
