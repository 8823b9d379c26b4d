use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, RunStats, RunSummary, StopReason};
use crate::output::{write_completion, write_progress};
use crate::sequence::SequenceGenerator;
use crate::signal::StopSignal;

/// Entry point for draining a [`SequenceGenerator`] into an output.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    stop: StopSignal,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions, stop: StopSignal) -> Self {
        Self { options, stop }
    }

    /// Write one candidate per line to `out`, without progress reporting.
    pub fn run_console<W: Write>(
        &self,
        generator: &mut SequenceGenerator,
        mut out: W,
    ) -> Result<RunSummary, GenerationError> {
        self.drive(generator, &mut out, |_| Ok(()))
    }

    /// Create (or truncate) `path` and write every candidate to it, reporting
    /// progress and final totals on `status`.
    pub fn run_file<S: Write>(
        &self,
        generator: &mut SequenceGenerator,
        path: &Path,
        status: &mut S,
    ) -> Result<RunSummary, GenerationError> {
        let file = File::create(path).map_err(|source| GenerationError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "output opened");

        self.run_with_progress(generator, BufWriter::new(file), status)
    }

    /// File-mode loop over an arbitrary writer.
    pub fn run_with_progress<W: Write, S: Write>(
        &self,
        generator: &mut SequenceGenerator,
        mut out: W,
        status: &mut S,
    ) -> Result<RunSummary, GenerationError> {
        let summary = self.drive(generator, &mut out, |stats| {
            if self.options.is_report_point(stats.produced()) {
                debug!(produced = stats.produced(), rate = stats.rate(), "progress");
                write_progress(status, stats)?;
            }
            Ok(())
        })?;

        write_completion(status, &summary)?;
        Ok(summary)
    }

    fn drive<W, F>(
        &self,
        generator: &mut SequenceGenerator,
        out: &mut W,
        mut on_written: F,
    ) -> Result<RunSummary, GenerationError>
    where
        W: Write,
        F: FnMut(&RunStats) -> std::io::Result<()>,
    {
        let mut stats = RunStats::start();
        let mut line = String::new();

        info!(
            alphabet_size = generator.alphabet().len(),
            min_len = generator.range().min(),
            max_len = generator.range().max(),
            max_count = self.options.max_count,
            "generation started"
        );

        let stop_reason = loop {
            if self.options.cap_reached(stats.produced()) {
                break StopReason::CapReached;
            }
            if self.stop.is_raised() {
                out.flush()?;
                info!(produced = stats.produced(), "generation interrupted");
                return Err(GenerationError::Interrupted {
                    produced: stats.produced(),
                });
            }
            if !generator.next_into(&mut line) {
                break StopReason::Exhausted;
            }

            line.push('\n');
            out.write_all(line.as_bytes())?;
            stats.record();

            if !self.options.cap_reached(stats.produced()) {
                on_written(&stats)?;
            }
        };

        out.flush()?;

        let summary = RunSummary {
            produced: stats.produced(),
            elapsed: stats.elapsed(),
            stop_reason,
        };

        info!(
            produced = summary.produced,
            duration_ms = summary.elapsed.as_millis() as u64,
            stop_reason = ?summary.stop_reason,
            "generation completed"
        );

        Ok(summary)
    }
}
