/// Scalar stored in a loaded matrix and produced by a row reduction.
pub type Value = f64;

/// 1-based line number in an input file.
pub type LineNo = u64;

/// 0-indexed row of a loaded matrix.
pub type RowIdx = usize;
