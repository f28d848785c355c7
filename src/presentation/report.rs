use crate::features::FeatureVector;
use crate::presentation::gradient::{GradientBar, DEFAULT_BAR_WIDTH};
use crate::presentation::{Style, StyledDisplay};
use crate::types::prediction::Prediction;
use crate::types::risk_band::RiskBand;
use std::fmt;

/// Outcome of a successful prediction for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    /// City name as the user entered it.
    pub city: String,
    pub prediction: Prediction,
    pub band: RiskBand,
    /// Model input the prediction was made from.
    pub features: FeatureVector,
}

impl RiskReport {
    pub fn new(city: impl Into<String>, prediction: Prediction, features: FeatureVector) -> Self {
        Self {
            city: city.into(),
            band: prediction.risk_band(),
            prediction,
            features,
        }
    }

    pub fn explanation(&self) -> &'static str {
        self.band.explanation()
    }

    pub fn gradient(&self) -> GradientBar {
        GradientBar::new(self.prediction, DEFAULT_BAR_WIDTH)
    }

    /// Probability metric, gradient indicator, band label and explanation.
    pub fn render(&self, style: Style) -> String {
        self.styled(style).to_string()
    }
}

impl StyledDisplay for RiskReport {
    fn fmt_styled(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        writeln!(f, "Flood Probability: {}", self.prediction)?;
        writeln!(f, "{}", self.gradient().styled(style))?;

        let (icon, label) = (self.band.icon(), self.band.label());
        match style {
            Style::Ansi => writeln!(
                f,
                "\x1b[1;{}m{} {}\x1b[0m",
                self.band.color().ansi_code(),
                icon,
                label
            )?,
            Style::Plain => writeln!(f, "{} {}", icon, label)?,
        }
        write!(f, "📘 Explanation: {}", self.explanation())
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_styled(f, Style::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(p: f64) -> RiskReport {
        let prediction = Prediction::clamped(p).expect("finite prediction");
        RiskReport::new("Chennai", prediction, FeatureVector::from(vec![0.0; 6]))
    }

    #[test]
    fn test_plain_rendering() {
        let rendered = report(0.42).to_string();

        assert!(rendered.starts_with("Flood Probability: 42.00%\n"));
        assert!(rendered.contains("🟡 Moderate Risk"));
        assert!(rendered
            .ends_with("📘 Explanation: Moderate flood risk. Stay alert and follow advisories."));
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn test_ansi_rendering_colors_label() {
        let rendered = report(0.75).render(Style::Ansi);

        assert_eq!(report(0.75).band, RiskBand::High);
        assert!(rendered.contains("\x1b[1;31m🔴 High Risk\x1b[0m"));
    }

    #[test]
    fn test_styled_writes_into_formatter() {
        let report = report(0.42);
        let embedded = format!("== {} ==", report.styled(Style::Plain));

        assert_eq!(embedded, format!("== {} ==", report.render(Style::Plain)));
        assert!(embedded.contains(" 42.00%\n"));
    }

    #[test]
    fn test_low_band_report() {
        let low = report(0.1);
        assert_eq!(low.band, RiskBand::Low);
        assert_eq!(
            low.explanation(),
            "Low flood risk expected. Conditions appear manageable."
        );
    }
}
