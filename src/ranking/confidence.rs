//! Discrete confidence labels for the strongest comparison.

use std::fmt;

use serde::Serialize;

/// Confidence bucket derived from a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "99.9%")]
    VeryHigh,
    #[serde(rename = "99%")]
    High,
    #[serde(rename = "95%")]
    Standard,
    #[serde(rename = "Not significant")]
    NotSignificant,
}

impl ConfidenceLevel {
    /// Thresholds are strict and checked from most to least confident.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < 0.001 {
            Self::VeryHigh
        } else if p_value < 0.01 {
            Self::High
        } else if p_value < 0.05 {
            Self::Standard
        } else {
            Self::NotSignificant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "99.9%",
            Self::High => "99%",
            Self::Standard => "95%",
            Self::NotSignificant => "Not significant",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
