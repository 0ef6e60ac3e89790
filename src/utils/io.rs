use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;

use crate::error::LoadError;
use crate::types::{LineNo, Value};
use crate::utils::Matrix;

#[derive(Parser, Debug)]
#[command(version, about = "Print the minimum, mean or maximum of every row of comma-separated numeric files")]
pub struct Args {
    /// Statistic to compute per row: --min, --mean or --max
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    pub action: Option<String>,

    /// Files to process, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Loads a comma-separated numeric matrix from `path`.
///
/// The file is read in one go and closed before returning.
pub fn load_matrix(path: &Path) -> Result<Matrix<Value>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_matrix(file, path)
}

/// Parses comma-separated numbers from `reader`. `path` is only used in errors.
///
/// There is no header. Everything from a `#` to the end of its line is a
/// comment, fields are trimmed, blank lines are skipped, and every row must
/// have as many fields as the first one.
pub fn read_matrix<R: Read>(mut reader: R, path: &Path) -> Result<Matrix<Value>, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    // Physical line of every data line handed to the csv reader, so that
    // record `i` came from `lines[i]`.
    let mut lines: Vec<LineNo> = Vec::new();
    let mut data = String::with_capacity(text.len());
    for (idx, raw) in text.lines().enumerate() {
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }
        data.push_str(content);
        data.push('\n');
        lines.push(idx as LineNo + 1);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quoting(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(lines.len());

    for (result, &line) in reader.records().zip(&lines) {
        let record = result.map_err(|source| csv_error(path, source))?;

        let row = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<Value>().map_err(|_| LoadError::Parse {
                    path: path.to_path_buf(),
                    line,
                    column: col + 1,
                    text: field.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    let matrix = Matrix::from_rows(rows).map_err(|ragged| LoadError::Ragged {
        path: path.to_path_buf(),
        line: lines[ragged.row],
        expected: ragged.expected,
        found: ragged.found,
    })?;

    debug!(
        "Loaded {}: {} rows x {} columns",
        path.display(),
        matrix.rows(),
        matrix.cols()
    );

    Ok(matrix)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
