//! Writers and status reporting used by the consumers.

pub mod status;

pub use status::{write_completion, write_progress};
