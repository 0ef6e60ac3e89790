use super::*;
use crate::types::Value;
use crate::utils::Matrix;
use proptest::prelude::*;

fn matrix(rows: &[&[Value]]) -> Matrix<Value> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec())).unwrap()
}

#[test]
fn test_parse_flags() {
    assert_eq!("--min".parse::<Statistic>(), Ok(Statistic::Min));
    assert_eq!("--mean".parse::<Statistic>(), Ok(Statistic::Mean));
    assert_eq!("--max".parse::<Statistic>(), Ok(Statistic::Max));
    for stat in Statistic::ALL {
        assert_eq!(stat.to_string().parse::<Statistic>(), Ok(stat));
    }
}

#[test]
fn test_parse_rejects_other_tokens() {
    for token in ["--median", "min", "--MIN", "", "-m"] {
        let err = token.parse::<Statistic>().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            format!("Action is not one of --min, --mean, or --max: {token}")
        );
    }
}

#[test]
fn test_reduce_rows_in_order() {
    let m = matrix(&[&[0.0, 1.0, 2.0], &[4.0, -3.0, 8.0], &[1.5, 1.5, 0.0]]);
    assert_eq!(reduce_rows(&m, Statistic::Min), vec![0.0, -3.0, 0.0]);
    assert_eq!(reduce_rows(&m, Statistic::Max), vec![2.0, 8.0, 1.5]);
    assert_eq!(reduce_rows(&m, Statistic::Mean), vec![1.0, 3.0, 1.0]);
}

#[test]
fn test_single_cell() {
    let m = matrix(&[&[7.25]]);
    for stat in Statistic::ALL {
        assert_eq!(reduce_rows(&m, stat), vec![7.25]);
    }
}

#[test]
fn test_empty_matrix_has_no_output() {
    let m = Matrix::<Value>::from_rows(Vec::new()).unwrap();
    for stat in Statistic::ALL {
        assert!(reduce_rows(&m, stat).is_empty());
    }
}

#[test]
fn test_nan_propagates() {
    let row = [1.0, Value::NAN, 3.0];
    assert!(row_min(&row).is_nan());
    assert!(row_max(&row).is_nan());
    assert!(mean(&row).is_nan());
}

#[test]
fn test_empty_row_is_nan() {
    assert!(row_min(&[]).is_nan());
    assert!(row_max(&[]).is_nan());
    assert!(mean(&[]).is_nan());
}

#[test]
fn test_mean_with_infinities() {
    assert_eq!(mean(&[Value::INFINITY, 1.0]), Value::INFINITY);
    assert_eq!(mean(&[Value::INFINITY, Value::INFINITY]), Value::INFINITY);
    assert!(mean(&[Value::INFINITY, Value::NEG_INFINITY]).is_nan());
}

#[test]
fn test_mean_of_integer_row() {
    let row: Vec<Value> = [
        16, 12, 11, 15, 0, 15, 1, 9, 19, 18, 18, 12, 20, 5, 5, 16, 7, 0, 6, 17, 17, 7, 12, 16,
        11, 18, 11, 14, 8, 17, 19, 0, 12, 16, 4, 16, 17, 6, 13, 1,
    ]
    .iter()
    .map(|&v| v as Value)
    .collect();
    assert_eq!(mean(&row), 11.425);
    assert_eq!(pairwise_sum(&row), 457.0);
}

#[test]
fn test_mean_sums_pairwise() {
    // Left-to-right summation gives 0.4999999999999999 for this row.
    let row = [
        0.2, 0.5, 0.4, 0.6, 0.6, 0.1, 0.0, 0.8, 0.3, 0.2, 1.0, 0.5, 0.8, 0.5, 0.6, 0.2, 0.6, 0.9,
        0.5, 0.7,
    ];
    assert_eq!(mean(&row), 0.5);

    // Short rows are summed left to right.
    assert_eq!(mean(&[0.1, 0.2, 0.3]), 0.20000000000000004);
}

#[test]
fn test_mean_of_long_row_splits_blocks() {
    let row: Vec<Value> = (0..300).map(|i| 0.1 * (i % 7) as Value).collect();
    assert_eq!(mean(&row), 0.29900000000000004);
}

#[test]
fn test_mean_does_not_overflow() {
    assert_eq!(mean(&[Value::MAX, -Value::MAX]), 0.0);
}

proptest! {
    #[test]
    fn constant_row_reduces_to_its_value(v in -1.0e12f64..1.0e12, n in 1usize..64) {
        let row = vec![v; n];
        prop_assert_eq!(row_min(&row), v);
        prop_assert_eq!(row_max(&row), v);
        prop_assert_eq!(mean(&row), v);
    }

    #[test]
    fn mean_lies_between_min_and_max(row in prop::collection::vec(-1.0e6f64..1.0e6, 1..32)) {
        let lo = row_min(&row);
        let hi = row_max(&row);
        let avg = mean(&row);
        // Allow for rounding in the running mean.
        let eps = 1e-9 * hi.abs().max(lo.abs()).max(1.0);
        prop_assert!(lo <= hi);
        prop_assert!(avg >= lo - eps && avg <= hi + eps, "{} not in [{}, {}]", avg, lo, hi);
    }

    #[test]
    fn one_value_per_row(rows in 0usize..16, cols in 1usize..8, seed in -100.0f64..100.0) {
        let data: Vec<Vec<Value>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed + (r * cols + c) as Value).collect())
            .collect();
        let m = Matrix::from_rows(data).unwrap();
        for stat in Statistic::ALL {
            prop_assert_eq!(reduce_rows(&m, stat).len(), rows);
        }
    }
}
