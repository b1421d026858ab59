use std::cmp::Ordering;
use std::fmt::Display;

use num_traits::Num;

use crate::graph::{GraphError, Result};

/// Asserts that `value` lies in the interval bounded by `low` and `high`.
///
/// A missing bound leaves that side of the interval open to infinity.
/// Values that cannot be compared with a bound (NaN) are always outside.
pub fn assert_interval<T>(
    name: &str,
    value: T,
    low: Option<T>,
    high: Option<T>,
    inclusive_low: bool,
    inclusive_high: bool,
) -> Result<()>
where
    T: Num + PartialOrd + Display + Copy,
{
    let below = low.map_or(false, |low| match value.partial_cmp(&low) {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => !inclusive_low,
        Some(Ordering::Greater) => false,
        None => true,
    });
    let above = high.map_or(false, |high| match value.partial_cmp(&high) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => !inclusive_high,
        Some(Ordering::Less) => false,
        None => true,
    });
    // With both bounds open, a NaN still has to be rejected.
    let incomparable = value.partial_cmp(&value).is_none();

    if below || above || incomparable {
        return Err(GraphError::OutOfInterval {
            name: name.to_string(),
            value: value.to_string(),
            interval: format!(
                "{}{}, {}{}",
                if inclusive_low { '[' } else { '(' },
                low.map_or_else(|| "-inf".to_string(), |low| low.to_string()),
                high.map_or_else(|| "inf".to_string(), |high| high.to_string()),
                if inclusive_high { ']' } else { ')' },
            ),
        });
    }
    Ok(())
}

/// Asserts that `value` is a probability, i.e. lies in `[0, 1]`.
pub fn assert_probability(name: &str, value: f64) -> Result<()> {
    assert_interval(name, value, Some(0.0), Some(1.0), true, true)
}
