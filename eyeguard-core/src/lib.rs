//! Core rating engine for EyeGuard
//!
//! Computes the optical-density rating laser safety eyewear needs for a given
//! laser, per EN207 (filters against direct radiation) and EN208 (alignment
//! eyewear), and renders it as the marking printed on certified filters.
//!
//! Key properties:
//! - Pure and synchronous: every rating is a function of its inputs only
//! - Read-only regulatory tables, safe to share across threads
//! - `no_std` + `alloc` capable, math through `libm`
//!
//! ```no_run
//! use eyeguard_core::{compute_required_filters_pulsed, LaserType, Quantity};
//!
//! let filters = compute_required_filters_pulsed(
//!     Quantity::nanometers(1064.0),
//!     LaserType::GiantPulsed,
//!     Quantity::millimeters(5.0),
//!     Quantity::joules(0.2),
//!     Quantity::seconds(8e-9),
//!     Quantity::hertz(10.0),
//!     false,
//! );
//!
//! match filters {
//!     Ok(filters) => for marking in filters.iter() { println!("{}", marking) },
//!     Err(e) => eprintln!("cannot rate: {}", e),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod calculator;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod hazard;
pub mod laser;
pub mod level;
pub mod marking;
pub mod units;

// Public API
pub use calculator::{
    compute_required_filters,
    compute_required_filters_continuous,
    compute_required_filters_pulsed,
    FilterCalculator,
    RequiredFilters,
};
pub use constants::{LaserType, Material, Robustness};
pub use errors::{LaserSafetyError, SafetyResult};
pub use laser::{LaserBuilder, LaserDescription};
pub use level::ProtectionLevel;
pub use marking::{FilterMarking, MarkingOptions, Standard};
pub use units::{Dimension, Quantity, Unit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
