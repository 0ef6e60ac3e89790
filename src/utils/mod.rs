mod interval;
pub mod matrix;
mod io;

pub use interval::{Interval, IntervalError, overlap};
pub use matrix::Matrix;

pub use io::{Args, load_matrix, read_matrix};
pub use clap::Parser;
