use crate::types::RowIdx;

/// A row-major 2D matrix that wraps a flat Vec.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Returned by [`Matrix::from_rows`] when a row's length differs from the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaggedRow {
    pub row: RowIdx,
    pub expected: usize,
    pub found: usize,
}

impl<T> Matrix<T> {
    /// Flattens `rows` into a matrix. The first row fixes the column count.
    pub fn from_rows<I>(rows: I) -> Result<Self, RaggedRow>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut data = Vec::new();
        let mut n_rows = 0;
        let mut n_cols = None;

        for (idx, row) in rows.into_iter().enumerate() {
            let expected = *n_cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(RaggedRow {
                    row: idx,
                    expected,
                    found: row.len(),
                });
            }
            data.extend(row);
            n_rows += 1;
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols.unwrap_or(0),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row(&self, row: RowIdx) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over the rows in order. Yields `rows()` slices even when `cols()` is zero.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }
}
