//! Defines the `WeatherObservation` produced by the weather provider for one request.

use crate::types::lat_lon::LatLon;
use chrono::{DateTime, Utc};

/// Current weather conditions for a city, as reported by the weather provider.
///
/// An observation lives for the duration of a single assessment. It is fetched once
/// and shared by the prediction path and the weather panel.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in metres per second.
    pub wind_speed: f64,
    /// Free-text description of the sky, e.g. "light rain".
    pub condition: String,
    /// Coordinates the provider resolved the city name to.
    pub location: LatLon,
    /// City name as known to the provider, if it reported one.
    pub resolved_name: Option<String>,
    /// Time of the measurement, if the provider reported one.
    pub observed_at: Option<DateTime<Utc>>,
}
