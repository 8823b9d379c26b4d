use std::io::{self, Write};
use std::path::Path;

use num_bigint::BigUint;

use passio_core::group_thousands;
use passio_generate::{GenerateOptions, SequenceGenerator};

const BANNER: &str = "
+==============================================================+
|                  PASSIO  WORDLIST GENERATOR                  |
+==============================================================+
";

/// Print the banner and what the run is about to produce.
pub fn write_summary<W: Write>(
    out: &mut W,
    generator: &SequenceGenerator,
    options: &GenerateOptions,
    output: Option<&Path>,
) -> io::Result<()> {
    let total = generator.total();
    tracing::info!(
        charset_size = generator.alphabet().len(),
        range = %generator.range(),
        total = %total,
        "run planned"
    );

    writeln!(out, "{BANNER}")?;
    writeln!(out, "Charset: {}", generator.alphabet())?;
    writeln!(out, "Length range: {}", generator.range())?;
    writeln!(out, "Total combinations: {}", group_thousands(&total))?;

    if let Some(cap) = options.max_count {
        if BigUint::from(cap) < total {
            writeln!(out, "Will generate: {} combinations", group_thousands(cap))?;
        }
    }

    if let Some(path) = output {
        writeln!(out, "Saving to: {}", path.display())?;
    }

    out.flush()
}
