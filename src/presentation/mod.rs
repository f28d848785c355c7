//! Terminal rendering of assessments: risk report, gradient indicator and weather panel.

pub mod gradient;
pub mod report;
pub mod weather_panel;

use crate::error::FloodSightError;
use std::fmt;

pub const WEATHER_NOT_FOUND_MESSAGE: &str = "❌ City not found in weather API.";
pub const STATIC_NOT_FOUND_MESSAGE: &str = "❌ City not found in static features CSV.";

/// Whether rendered output may contain ANSI color sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Ansi,
    Plain,
}

/// Output that renders differently per [`Style`].
pub trait StyledDisplay {
    fn fmt_styled(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result;

    fn styled(&self, style: Style) -> Styled<'_, Self>
    where
        Self: Sized,
    {
        Styled { value: self, style }
    }
}

/// Borrowed value paired with a [`Style`], displayable with `{}`.
pub struct Styled<'a, T> {
    value: &'a T,
    style: Style,
}

impl<T: StyledDisplay> fmt::Display for Styled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_styled(f, self.style)
    }
}

/// The user-facing message for a recoverable not-found error, `None` for anything else.
pub fn not_found_message(error: &FloodSightError) -> Option<&'static str> {
    match error {
        FloodSightError::CityNotFoundInWeather(_) => Some(WEATHER_NOT_FOUND_MESSAGE),
        FloodSightError::CityNotFoundInStaticData(_) => Some(STATIC_NOT_FOUND_MESSAGE),
        _ => None,
    }
}
