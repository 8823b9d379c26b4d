mod logging;
mod summary;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use passio_core::{
    Alphabet, DEFAULT_REPORT_INTERVAL, Error as CoreError, LengthRange, group_thousands,
};
use passio_generate::{
    GenerateOptions, GenerationEngine, GenerationError, RunSummary, SequenceGenerator, StopSignal,
};
use thiserror::Error;

use logging::{LoggingError, init_logging};
use summary::write_summary;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("cannot install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "passio", version, about = "Crunch-like password list generator")]
struct Cli {
    /// Minimum password length.
    #[arg(allow_negative_numbers = true)]
    min_len: i64,
    /// Maximum password length.
    #[arg(allow_negative_numbers = true)]
    max_len: i64,
    /// Character set, or a predefined charset as @name.
    charset: String,
    /// Output file (default: stdout).
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Maximum number of passwords to generate (0 means no limit).
    #[arg(short, long, value_name = "N")]
    count: Option<u64>,
    /// Passwords between progress updates when writing to a file.
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_REPORT_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    buffer_size: u64,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Skip the banner and run summary.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_count: self.count.filter(|count| *count > 0),
            report_interval: self.buffer_size,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = init_logging(cli.log_file.as_deref())
        .map_err(CliError::from)
        .and_then(|()| run(cli));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, &mut io::stderr().lock()),
    }
}

fn run(cli: Cli) -> Result<RunSummary, CliError> {
    let range = LengthRange::new(cli.min_len, cli.max_len)?;
    let alphabet = Alphabet::resolve(&cli.charset)?;
    let options = cli.generate_options();
    let mut generator = SequenceGenerator::new(alphabet, range);

    let mut status = io::stderr().lock();
    if !cli.quiet {
        write_summary(&mut status, &generator, &options, cli.output.as_deref())?;
    }

    let stop = StopSignal::new();
    let handler = stop.clone();
    ctrlc::set_handler(move || handler.raise())?;

    let engine = GenerationEngine::new(options, stop);
    let summary = match cli.output.as_deref() {
        Some(path) => engine.run_file(&mut generator, path, &mut status)?,
        None => engine.run_console(&mut generator, BufWriter::new(io::stdout().lock()))?,
    };

    Ok(summary)
}

/// Print `err` the way users see it and pick the process exit status.
fn report_error<W: Write>(err: &CliError, out: &mut W) -> ExitCode {
    let written = match err {
        CliError::Generation(GenerationError::Interrupted { produced }) => writeln!(
            out,
            "\nInterrupted! Generated {} passwords",
            group_thousands(produced)
        ),
        CliError::Generation(GenerationError::Open { .. } | GenerationError::Io(_)) => {
            writeln!(out, "\nError: {err}")
        }
        CliError::Core(CoreError::UnknownPreset { name, available }) => {
            writeln!(out, "Error: Unknown charset '{name}'").and_then(|()| {
                writeln!(out, "Available charsets: {}", available.join(", "))
            })
        }
        _ => writeln!(out, "Error: {err}"),
    };
    written.ok();

    ExitCode::FAILURE
}
