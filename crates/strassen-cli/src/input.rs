use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use strassen_core::Buffer;

use crate::error::{CliError, Result};

/// Read both operands from a file holding one integer per line.
///
/// The first `dimension²` values fill A row-major, the next `dimension²`
/// fill B. Blank lines are skipped.
pub fn read_operands(path: &Path, dimension: usize) -> Result<(Buffer, Buffer)> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading {}x{} operands from {}", dimension, dimension, path.display());
    parse_operands(BufReader::new(file), dimension)
}

/// Parse both operands from any line-oriented reader.
pub fn parse_operands<R: BufRead>(reader: R, dimension: usize) -> Result<(Buffer, Buffer)> {
    let per_matrix = dimension * dimension;
    let mut values = Vec::with_capacity(2 * per_matrix);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value = text.parse::<i32>().map_err(|_| CliError::InvalidInteger {
            line: index + 1,
            value: text.to_string(),
        })?;
        values.push(value);
    }

    if values.len() != 2 * per_matrix {
        return Err(CliError::EntryCount {
            expected: 2 * per_matrix,
            got: values.len(),
        });
    }

    let b = values.split_off(per_matrix);
    Ok((
        Buffer::from_vec(dimension, values)?,
        Buffer::from_vec(dimension, b)?,
    ))
}
