//! Command-line driver: validates the statistic flag, then reduces each file in turn.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::error::UsageError;
use crate::stats::{Statistic, reduce_rows};
use crate::types::Value;
use crate::utils::{Args, load_matrix};

pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when an input file cannot be read or parsed.
pub const EXIT_LOAD_FAILURE: u8 = 3;

/// Picks the statistic from the first positional argument.
pub fn parse_statistic(args: &Args) -> Result<Statistic, UsageError> {
    args.action
        .as_deref()
        .ok_or(UsageError::MissingArguments)?
        .parse()
}

/// Loads `path` and writes one reduced value per row to `out`.
pub fn process<W: Write>(path: &Path, statistic: Statistic, out: &mut W) -> Result<()> {
    let matrix = load_matrix(path)?;
    if matrix.is_empty() {
        warn!("{} contains no data rows", path.display());
    }

    for value in reduce_rows(&matrix, statistic) {
        writeln!(out, "{}", format_value(value)).context("writing output")?;
    }
    Ok(())
}

/// Renders a value the way it is printed: shortest round-trip form, with a
/// trailing `.0` on integral values. Magnitudes below `1e-4` or from `1e16` up
/// use an exponent with an explicit sign and at least two digits (`1e+16`,
/// `2.5e-05`); non-finite values print as `nan`, `inf` and `-inf`.
pub fn format_value(value: Value) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Runs the whole program against already-parsed arguments and returns the
/// process exit status.
///
/// Usage problems are reported on `out` with their own exit status. A file
/// that fails to load stops the run; output for earlier files is kept.
pub fn run<W: Write>(args: &Args, out: &mut W) -> u8 {
    let statistic = match parse_statistic(args) {
        Ok(stat) => stat,
        Err(e) => {
            // Nothing useful to do if stdout itself is gone.
            let _ = writeln!(out, "{e}");
            return e.exit_code();
        }
    };

    debug!("Computing {statistic} over {} file(s)", args.files.len());

    for path in &args.files {
        if let Err(e) = process(path, statistic, out)
            .with_context(|| format!("failed to process '{}'", path.display()))
        {
            let _ = out.flush();
            eprintln!("Error: {e:#}");
            return EXIT_LOAD_FAILURE;
        }
    }

    match out.flush() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: writing output: {e}");
            EXIT_LOAD_FAILURE
        }
    }
}
