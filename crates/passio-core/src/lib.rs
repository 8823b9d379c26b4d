//! Core contracts shared by the Passio crates.
//!
//! Defines the validated inputs of a run (alphabet and length range), the
//! named charset presets, and small formatting helpers used for reporting.

pub mod charset;
pub mod error;
pub mod format;
pub mod range;

pub use charset::{Alphabet, PRESETS, Preset, preset_names};
pub use error::{Error, Result};
pub use format::group_thousands;
pub use range::LengthRange;

/// Report interval used by the file consumer when none is configured.
pub const DEFAULT_REPORT_INTERVAL: u64 = 100_000;
