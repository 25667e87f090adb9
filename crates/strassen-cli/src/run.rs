use std::io::Write;

use strassen_core::verify::compare;
use strassen_core::{linear_multiply, Multiplier, OpStats, StrassenConfig, StrassenMultiplier};

use crate::args::{DebugFlags, RunConfig, Source};
use crate::error::Result;
use crate::input::read_operands;
use crate::random::{make_rng, random_binary};
use crate::report::{format_duration, timed};

/// Execute one decoded command line, writing all output to `out`.
///
/// With no debug flags set, prints the diagonal of the product, one entry
/// per line.
///
/// # Errors
/// Ingestion and I/O failures, and `VerificationMismatch` when VERIFY is set
/// and the Strassen product disagrees with the linear one.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let flags = config.flags;
    let n = config.dimension;

    let (a, b) = match &config.source {
        Source::Random => {
            let mut rng = make_rng(config.seed);
            (random_binary(n, &mut rng), random_binary(n, &mut rng))
        }
        Source::File(path) => read_operands(path, n)?,
    };

    let multiplier = StrassenMultiplier::new(StrassenConfig::new(config.cutoff)?);
    let mut stats = OpStats::new();
    let (product, elapsed) =
        timed(|| multiplier.multiply_with_stats(a.view(), b.view(), &mut stats));
    let c = product?;

    if flags.contains(DebugFlags::TIME) {
        writeln!(out, "strassen: {}", format_duration(elapsed))?;
    }
    if flags.contains(DebugFlags::PRINT) {
        write!(out, "A:\n{a}B:\n{b}C:\n{c}")?;
    }

    if flags.contains(DebugFlags::VERIFY) {
        let (check, elapsed) = timed(|| linear_multiply(&a, &b));
        let check = check?;
        if flags.contains(DebugFlags::TIME) {
            writeln!(out, "linear: {}", format_duration(elapsed))?;
        }
        if flags.contains(DebugFlags::PRINT) {
            write!(out, "check:\n{check}")?;
        }
        compare(&check, &c)?;
    }

    if flags.contains(DebugFlags::STATS) {
        writeln!(out, "{stats}")?;
    }

    if flags.is_empty() {
        for value in c.diagonal() {
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}
