use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    Inverted { lower: String, upper: String },
}

/// A closed range `[lower, upper]`.
///
/// `lower <= upper` is expected but only checked by [`Interval::try_new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T = f64> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Like [`Interval::new`], but rejects `lower > upper`.
    /// Incomparable bounds (NaN) are rejected as well.
    pub fn try_new(lower: T, upper: T) -> Result<Self, IntervalError>
    where
        T: fmt::Display,
    {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(IntervalError::Inverted {
                lower: lower.to_string(),
                upper: upper.to_string(),
            })
        }
    }

    #[inline(always)]
    pub fn lower(&self) -> T {
        self.lower
    }

    #[inline(always)]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// True when `value` lies in `[lower, upper]`.
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns the closed range shared by `self` and `other`, or `None` if they
    /// are disjoint. Touching intervals share a single point.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        overlap(*self, *other)
    }
}

/// Intersection of two closed intervals.
///
/// Computes `lo = max(a.lower, b.lower)` and `hi = min(a.upper, b.upper)` and
/// returns `[lo, hi]` when `lo <= hi`. Bounds are not validated: an inverted
/// input simply flows through the same comparison.
pub fn overlap<T: PartialOrd + Copy>(a: Interval<T>, b: Interval<T>) -> Option<Interval<T>> {
    let lo = partial_max(a.lower, b.lower)?;
    let hi = partial_min(a.upper, b.upper)?;

    if lo <= hi {
        Some(Interval::new(lo, hi))
    } else {
        None
    }
}

// Unordered bounds (NaN) have no maximum, which keeps `overlap` symmetric.
fn partial_max<T: PartialOrd + Copy>(x: T, y: T) -> Option<T> {
    match x.partial_cmp(&y)? {
        Ordering::Less => Some(y),
        _ => Some(x),
    }
}

fn partial_min<T: PartialOrd + Copy>(x: T, y: T) -> Option<T> {
    match x.partial_cmp(&y)? {
        Ordering::Greater => Some(y),
        _ => Some(x),
    }
}

impl<T: Copy> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        Self {
            lower: *range.start(),
            upper: *range.end(),
        }
    }
}

impl<T> From<Interval<T>> for RangeInclusive<T> {
    fn from(interval: Interval<T>) -> Self {
        interval.lower..=interval.upper
    }
}

impl<T: Copy> From<(T, T)> for Interval<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Self { lower, upper }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
