use std::io::{self, Write};

use passio_core::group_thousands;

use crate::model::{RunStats, RunSummary};

/// Overwrite the current status line with the running count and rate.
pub fn write_progress<S: Write>(status: &mut S, stats: &RunStats) -> io::Result<()> {
    write!(
        status,
        "\rGenerated: {} passwords ({:.0}/sec)",
        group_thousands(stats.produced()),
        stats.rate()
    )?;
    status.flush()
}

/// Final totals printed after a file run finishes.
pub fn write_completion<S: Write>(status: &mut S, summary: &RunSummary) -> io::Result<()> {
    writeln!(status)?;
    writeln!(
        status,
        "Completed! Generated {} passwords in {:.2} seconds",
        group_thousands(summary.produced),
        summary.elapsed.as_secs_f64()
    )?;
    if !summary.elapsed.is_zero() {
        writeln!(
            status,
            "Average speed: {:.0} passwords/second",
            summary.rate()
        )?;
    }
    status.flush()
}
