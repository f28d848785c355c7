//! Defines the `RiskBand` enum, mapping a flood probability onto three severity levels.

use std::fmt;

/// Upper bound (exclusive) of the [`RiskBand::Low`] band.
pub const MODERATE_THRESHOLD: f64 = 0.30;
/// Upper bound (exclusive) of the [`RiskBand::Moderate`] band.
pub const HIGH_THRESHOLD: f64 = 0.60;

/// Severity color used when rendering a [`RiskBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    Green,
    Yellow,
    Red,
}

/// Flood risk level derived from a thresholded prediction.
///
/// Each band lower bound is inclusive: exactly `0.30` is [`RiskBand::Moderate`] and
/// exactly `0.60` is [`RiskBand::High`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    /// Probability below 0.30.
    Low,
    /// Probability in `[0.30, 0.60)`.
    Moderate,
    /// Probability of 0.60 or more.
    High,
}

impl RiskBand {
    /// Maps a probability onto its band.
    ///
    /// Values outside `[0, 1]` are not rejected: anything below 0.30 is `Low` and
    /// anything that is not below 0.60 (NaN included) is `High`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_sight::RiskBand;
    ///
    /// assert_eq!(RiskBand::classify(0.29), RiskBand::Low);
    /// assert_eq!(RiskBand::classify(0.30), RiskBand::Moderate);
    /// assert_eq!(RiskBand::classify(0.60), RiskBand::High);
    /// ```
    pub fn classify(probability: f64) -> Self {
        if probability < MODERATE_THRESHOLD {
            RiskBand::Low
        } else if probability < HIGH_THRESHOLD {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low flood risk expected. Conditions appear manageable.",
            RiskBand::Moderate => "Moderate flood risk. Stay alert and follow advisories.",
            RiskBand::High => {
                "High flood risk! Prepare for emergency and follow local authority guidance."
            }
        }
    }

    pub fn color(&self) -> IndicatorColor {
        match self {
            RiskBand::Low => IndicatorColor::Green,
            RiskBand::Moderate => IndicatorColor::Yellow,
            RiskBand::High => IndicatorColor::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskBand::Low => "🟢",
            RiskBand::Moderate => "🟡",
            RiskBand::High => "🔴",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
