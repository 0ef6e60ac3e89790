use log::trace;

use crate::stats::Statistic;
use crate::types::Value;
use crate::utils::Matrix;

/// Applies `statistic` to every row of `matrix`, in row order.
pub fn reduce_rows(matrix: &Matrix<Value>, statistic: Statistic) -> Vec<Value> {
    matrix
        .iter_rows()
        .enumerate()
        .map(|(row, values)| {
            let reduced = statistic.reduce(values);
            trace!("row {row}: {statistic} = {reduced}");
            reduced
        })
        .collect()
}

/// Smallest value of `row`. NaN anywhere in the row, or an empty row, gives NaN.
pub fn row_min(row: &[Value]) -> Value {
    extremum(row, Value::min)
}

/// Largest value of `row`. NaN anywhere in the row, or an empty row, gives NaN.
pub fn row_max(row: &[Value]) -> Value {
    extremum(row, Value::max)
}

fn extremum(row: &[Value], pick: fn(Value, Value) -> Value) -> Value {
    row.iter()
        .copied()
        .reduce(|acc, x| if acc.is_nan() || x.is_nan() { Value::NAN } else { pick(acc, x) })
        .unwrap_or(Value::NAN)
}

/// Arithmetic mean of `row`, NaN when empty.
///
/// The sum is taken pairwise (see [`pairwise_sum`]). A row whose values are
/// all equal yields exactly that value.
pub fn mean(row: &[Value]) -> Value {
    match row {
        [] => Value::NAN,
        [first, ..] if row_min(row) == row_max(row) => *first,
        _ => pairwise_sum(row) / row.len() as Value,
    }
}

const PAIRWISE_BLOCK: usize = 128;

/// Sums `values` with eight interleaved accumulators per block of up to
/// 128 values, splitting longer slices in two at a multiple of eight.
/// Slices shorter than eight are summed left to right.
pub fn pairwise_sum(values: &[Value]) -> Value {
    let n = values.len();
    if n < 8 {
        return values.iter().fold(0.0, |acc, &x| acc + x);
    }
    if n <= PAIRWISE_BLOCK {
        let mut acc = [0.0; 8];
        acc.copy_from_slice(&values[..8]);
        let whole = n - n % 8;
        for chunk in values[8..whole].chunks_exact(8) {
            for (a, &x) in acc.iter_mut().zip(chunk) {
                *a += x;
            }
        }
        let head = ((acc[0] + acc[1]) + (acc[2] + acc[3])) + ((acc[4] + acc[5]) + (acc[6] + acc[7]));
        return values[whole..].iter().fold(head, |acc, &x| acc + x);
    }
    let mut half = n / 2;
    half -= half % 8;
    pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
}
