//! Response bodies of the weather (OpenWeather) and rainfall (Open-Meteo) providers.
//!
//! Every field is optional so that a well-formed but incomplete answer can be told
//! apart from a body that is not JSON at all.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

// ============================================================================
// OpenWeather current weather
// ============================================================================

/// The `cod` field, which OpenWeather sends as a number on success and as a string
/// (e.g. `"404"`) on failure. Only the number `200` is a success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Number(200))
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Number(code) => write!(f, "{}", code),
            ResponseCode::Text(code) => write!(f, "\"{}\"", code),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherResponse {
    pub cod: Option<ResponseCode>,
    pub message: Option<Value>,
    pub name: Option<String>,
    pub dt: Option<i64>,
    pub coord: Option<Coord>,
    pub main: Option<MainReadings>,
    pub wind: Option<Wind>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

impl OpenWeatherResponse {
    /// A missing `cod` counts as failure.
    pub fn is_success(&self) -> bool {
        self.cod.as_ref().is_some_and(ResponseCode::is_success)
    }
}

#[derive(Debug, Deserialize)]
pub struct Coord {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub description: Option<String>,
}

// ============================================================================
// Open-Meteo hourly forecast
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    pub hourly: Option<HourlyData>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyData {
    #[serde(default)]
    pub time: Vec<String>,
    /// Entries can be `null` for hours the model has no value for.
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
}

impl OpenMeteoResponse {
    /// First entry of the hourly precipitation series.
    pub fn current_precipitation(&self) -> Option<f64> {
        self.hourly
            .as_ref()
            .and_then(|hourly| hourly.precipitation.first().copied())
            .flatten()
    }
}
