//! Relative lift and winner selection.

use std::fmt;

use serde::Serialize;

use super::{round::round_to, SIGNIFICANCE_LEVEL};

/// Which side of a comparison won, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    A,
    B,
    #[serde(rename = "none")]
    None,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::A => f.write_str("A"),
            Winner::B => f.write_str("B"),
            Winner::None => f.write_str("none"),
        }
    }
}

/// Percentage lift of `value_a` over `value_b`; `0` when `value_b` is zero.
pub fn relative_lift(value_a: f64, value_b: f64) -> f64 {
    if value_b == 0.0 {
        return 0.0;
    }
    round_to((value_a - value_b) / value_b * 100.0, 2)
}

/// Pick a winner only when the difference is significant.
///
/// Equal rates resolve to `B`: only a strictly greater `rate_a` wins for `A`.
pub fn determine_winner(rate_a: f64, rate_b: f64, p_value: f64) -> Winner {
    if p_value >= SIGNIFICANCE_LEVEL {
        Winner::None
    } else if rate_a > rate_b {
        Winner::A
    } else {
        Winner::B
    }
}
