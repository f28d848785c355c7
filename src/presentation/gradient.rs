use crate::presentation::{Style, StyledDisplay};
use crate::types::prediction::Prediction;
use crate::types::risk_band::IndicatorColor;
use std::fmt;

pub const DEFAULT_BAR_WIDTH: usize = 50;

const GREEN: (u8, u8, u8) = (0, 128, 0);
const YELLOW: (u8, u8, u8) = (255, 255, 0);
const RED: (u8, u8, u8) = (255, 0, 0);

impl IndicatorColor {
    /// Foreground SGR code for the 8-color palette.
    pub fn ansi_code(&self) -> u8 {
        match self {
            IndicatorColor::Green => 32,
            IndicatorColor::Yellow => 33,
            IndicatorColor::Red => 31,
        }
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Color of the green → yellow → red gradient at `t` in `[0, 1]`.
pub fn color_at(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (GREEN, YELLOW, t * 2.0)
    } else {
        (YELLOW, RED, (t - 0.5) * 2.0)
    };
    (
        lerp(from.0, to.0, local),
        lerp(from.1, to.1, local),
        lerp(from.2, to.2, local),
    )
}

/// A horizontal gradient bar with the prediction marked at its percentage position.
#[derive(Debug, Clone, Copy)]
pub struct GradientBar {
    prediction: Prediction,
    width: usize,
}

impl GradientBar {
    pub fn new(prediction: Prediction, width: usize) -> Self {
        Self {
            prediction,
            width: width.max(2),
        }
    }

    /// Cell index of the marker: `prediction * 100 %` along the bar.
    pub fn marker_column(&self) -> usize {
        (self.prediction.probability() * (self.width - 1) as f64).round() as usize
    }

    pub fn marker_color(&self) -> (u8, u8, u8) {
        color_at(self.prediction.probability())
    }

    /// Two lines: the percentage label centred over the marker, then the bar.
    pub fn render(&self, style: Style) -> String {
        self.styled(style).to_string()
    }
}

impl StyledDisplay for GradientBar {
    fn fmt_styled(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        let marker = self.marker_column();
        let label = self.prediction.to_string();
        let label_start = marker
            .saturating_sub(label.len() / 2)
            .min(self.width.saturating_sub(label.len()));

        writeln!(f, "{}{}", " ".repeat(label_start), label)?;

        let last = (self.width - 1) as f64;
        for cell in 0..self.width {
            match style {
                Style::Ansi => {
                    let glyph = if cell == marker { '┃' } else { '█' };
                    let (r, g, b) = color_at(cell as f64 / last);
                    write!(f, "\x1b[38;2;{};{};{}m{}", r, g, b, glyph)?;
                }
                Style::Plain => write!(f, "{}", if cell == marker { '|' } else { '=' })?,
            }
        }
        if style == Style::Ansi {
            f.write_str("\x1b[0m")?;
        }
        Ok(())
    }
}

impl fmt::Display for GradientBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_styled(f, Style::Plain)
    }
}
