use std::path::PathBuf;

use thiserror::Error;

use passio_core::group_thousands;

/// Errors emitted while consuming a generated sequence.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot open output file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing output: {0}")]
    Io(#[from] std::io::Error),
    #[error("interrupted after generating {} passwords", group_thousands(produced))]
    Interrupted { produced: u64 },
}
