use std::fmt;

/// Where a [`RainfallObservation`] value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainfallSource {
    /// First entry of the provider's hourly precipitation series.
    Forecast,
    /// The provider could not be reached or answered without usable data.
    Unavailable,
}

/// Precipitation in millimetres expected over the next hour.
///
/// Missing rain data is not an error: [`RainfallObservation::unavailable`] yields the
/// neutral value `0.0` so an assessment can always continue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainfallObservation {
    pub millimetres: f64,
    pub source: RainfallSource,
}

impl RainfallObservation {
    pub fn forecast(millimetres: f64) -> Self {
        Self {
            millimetres,
            source: RainfallSource::Forecast,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            millimetres: 0.0,
            source: RainfallSource::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.source == RainfallSource::Forecast
    }
}

impl fmt::Display for RainfallObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.millimetres)
    }
}
