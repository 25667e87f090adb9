use std::fmt;
use std::path::PathBuf;

use log::debug;
use strassen_core::DEFAULT_CUTOFF;

use crate::error::{CliError, Result};

/// Environment variable that seeds the random matrix generator.
pub const SEED_VAR: &str = "STRASSEN_SEED";

/// Bit set decoded from the `DEBUG` argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags(u32);

impl DebugFlags {
    /// Generate random 0/1 matrices instead of reading a file.
    pub const RANDOM: DebugFlags = DebugFlags(0x01);
    /// Print A, B and C (and the check matrix when verifying).
    pub const PRINT: DebugFlags = DebugFlags(0x02);
    /// Cross-check the result against the linear multiplier.
    pub const VERIFY: DebugFlags = DebugFlags(0x04);
    /// Print wall-clock time of each multiplication.
    pub const TIME: DebugFlags = DebugFlags(0x08);
    /// Print operation counts.
    pub const STATS: DebugFlags = DebugFlags(0x10);

    pub fn from_bits(bits: u32) -> Self {
        DebugFlags(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: DebugFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for DebugFlags {
    type Output = DebugFlags;

    fn bitor(self, rhs: DebugFlags) -> DebugFlags {
        DebugFlags(self.0 | rhs.0)
    }
}

/// Where the input matrices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Random 0/1 entries.
    Random,
    /// One integer per line: A's entries row-major, then B's.
    File(PathBuf),
}

/// A fully decoded command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub flags: DebugFlags,
    pub dimension: usize,
    pub cutoff: usize,
    pub source: Source,
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Decode `DEBUG DIMENSION INPUT` (program name already stripped).
    ///
    /// In random mode `INPUT` is the cutoff, clamped to at least 1. Otherwise
    /// it is a path and the cutoff is [`DEFAULT_CUTOFF`].
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<RunConfig> {
        let [debug, dimension, input] = args else {
            return Err(CliError::Usage(format!(
                "expected 3 arguments, got {}",
                args.len()
            )));
        };

        let flags = DebugFlags::from_bits(parse_number(debug.as_ref(), "DEBUG")?);
        let dimension: usize = parse_number(dimension.as_ref(), "DIMENSION")?;
        if dimension == 0 {
            return Err(CliError::Usage("DIMENSION must be positive".to_string()));
        }

        let (source, cutoff) = if flags.contains(DebugFlags::RANDOM) {
            let cutoff: i64 = parse_number(input.as_ref(), "cutoff")?;
            (Source::Random, cutoff.max(1) as usize)
        } else {
            (Source::File(PathBuf::from(input.as_ref())), DEFAULT_CUTOFF)
        };

        debug!(
            "args: flags={:#x}, dimension={}, cutoff={}, source={:?}",
            flags.bits(),
            dimension,
            cutoff,
            source
        );

        Ok(RunConfig {
            flags,
            dimension,
            cutoff,
            source,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Read the RNG seed override from [`SEED_VAR`], if set.
pub fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var(SEED_VAR) {
        Ok(value) => parse_number(&value, SEED_VAR).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_number<N: std::str::FromStr>(value: &str, name: &str) -> Result<N> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{name}: not a valid integer: {value:?}")))
}

/// Usage text listing the positional arguments and debug flags.
pub struct Usage;

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Usage: strassen [DEBUG] [DIMENSION] [INPUT]")?;
        writeln!(f, "    debug flags:")?;
        for (name, flag) in [
            ("RANDOM", DebugFlags::RANDOM),
            ("PRINT", DebugFlags::PRINT),
            ("VERIFY", DebugFlags::VERIFY),
            ("TIME", DebugFlags::TIME),
            ("STATS", DebugFlags::STATS),
        ] {
            writeln!(f, "        {name:<8}: {}", flag.bits())?;
        }
        write!(
            f,
            "    INPUT is a file path, or the cutoff when RANDOM is set ({SEED_VAR} seeds the generator)"
        )
    }
}
