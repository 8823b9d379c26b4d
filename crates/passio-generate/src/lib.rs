//! Enumeration engine for Passio.
//!
//! This crate turns a validated alphabet and length range into a lazy,
//! deterministic sequence of candidate strings, counts that sequence without
//! materialising it, and drains it into the console or a file.

pub mod counter;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod sequence;
pub mod signal;

pub use counter::count_combinations;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use model::{GenerateOptions, RunStats, RunSummary, StopReason};
pub use sequence::{Cursor, SequenceGenerator};
pub use signal::StopSignal;
