use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;
use crate::stats::{mean, row_max, row_min};
use crate::types::Value;

/// How a row is collapsed to a single value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Statistic {
    Min,
    Mean,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Min, Statistic::Mean, Statistic::Max];

    /// The command-line token selecting this statistic.
    pub fn flag(self) -> &'static str {
        match self {
            Statistic::Min => "--min",
            Statistic::Mean => "--mean",
            Statistic::Max => "--max",
        }
    }

    #[inline]
    pub fn reduce(self, row: &[Value]) -> Value {
        match self {
            Statistic::Min => row_min(row),
            Statistic::Mean => mean(row),
            Statistic::Max => row_max(row),
        }
    }
}

impl FromStr for Statistic {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .into_iter()
            .find(|stat| stat.flag() == s)
            .ok_or_else(|| UsageError::UnknownStatistic(s.to_string()))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}
