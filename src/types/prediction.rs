use crate::types::risk_band::RiskBand;
use std::fmt;

/// Flood probability produced by a [`crate::FloodModel`], always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prediction(f64);

impl Prediction {
    /// Wraps a raw model output, clamping it into `[0, 1]`.
    ///
    /// Returns `None` for NaN or infinite values, which no risk band can describe.
    pub fn clamped(raw: f64) -> Option<Self> {
        if raw.is_finite() {
            Some(Self(raw.clamp(0.0, 1.0)))
        } else {
            None
        }
    }

    pub fn probability(&self) -> f64 {
        self.0
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::classify(self.0)
    }
}

/// Formats as a percentage with two decimals, e.g. `42.00%`.
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_out_of_range_output() {
        assert_eq!(Prediction::clamped(1.7).unwrap().probability(), 1.0);
        assert_eq!(Prediction::clamped(-0.2).unwrap().probability(), 0.0);
        assert_eq!(Prediction::clamped(0.42).unwrap().probability(), 0.42);
    }

    #[test]
    fn test_rejects_non_finite_output() {
        assert!(Prediction::clamped(f64::NAN).is_none());
        assert!(Prediction::clamped(f64::INFINITY).is_none());
    }

    #[test]
    fn test_display_as_percentage() {
        assert_eq!(Prediction::clamped(0.42).unwrap().to_string(), "42.00%");
        assert_eq!(Prediction::clamped(0.0).unwrap().to_string(), "0.00%");
    }
}
