mod reduce;
mod statistic;

pub use reduce::{mean, pairwise_sum, reduce_rows, row_max, row_min};
pub use statistic::Statistic;

#[cfg(test)]
mod tests;
