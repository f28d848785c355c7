use crate::observations::error::ObservationError;
use crate::observations::models::OpenWeatherResponse;
use crate::types::lat_lon::LatLon;
use crate::types::weather_observation::WeatherObservation;
use chrono::DateTime;
use log::{info, warn};
use reqwest::Client;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Fetches current conditions for a city from the OpenWeather current-weather API.
///
/// Requests metric units. No caching and no retries: every call reaches the provider.
pub struct WeatherClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CURRENT_WEATHER_PATH),
            api_key: api_key.into(),
        }
    }

    /// Returns `Ok(None)` when the provider answers with a non-success `cod`, meaning
    /// it does not know the city. Transport failures and undecodable bodies are errors.
    pub async fn fetch(&self, city: &str) -> Result<Option<WeatherObservation>, ObservationError> {
        let city = city.trim();
        info!("Requesting current weather for '{}' from {}", city, self.endpoint);

        // `without_url` keeps the api key out of error messages.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| ObservationError::NetworkRequest(self.endpoint.clone(), e.without_url()))?;

        let body: OpenWeatherResponse = response
            .json()
            .await
            .map_err(|e| ObservationError::ResponseDecode(self.endpoint.clone(), e.without_url()))?;

        if !body.is_success() {
            warn!(
                "Weather provider has no data for '{}' (cod {}, message {:?})",
                city,
                body.cod.as_ref().map_or_else(|| "missing".to_string(), ToString::to_string),
                body.message
            );
            return Ok(None);
        }

        self.build_observation(body).map(Some)
    }

    fn build_observation(
        &self,
        body: OpenWeatherResponse,
    ) -> Result<WeatherObservation, ObservationError> {
        let missing = |field: &'static str| ObservationError::IncompleteResponse {
            url: self.endpoint.clone(),
            field,
        };

        let main = body.main.as_ref().ok_or_else(|| missing("main"))?;
        let coord = body.coord.as_ref().ok_or_else(|| missing("coord"))?;
        let wind_speed = body
            .wind
            .as_ref()
            .and_then(|wind| wind.speed)
            .ok_or_else(|| missing("wind.speed"))?;

        Ok(WeatherObservation {
            temperature: main.temp.ok_or_else(|| missing("main.temp"))?,
            humidity: main.humidity.ok_or_else(|| missing("main.humidity"))?,
            wind_speed,
            condition: body
                .weather
                .first()
                .and_then(|entry| entry.description.clone())
                .unwrap_or_else(|| "unknown".to_string()),
            location: LatLon(
                coord.lat.ok_or_else(|| missing("coord.lat"))?,
                coord.lon.ok_or_else(|| missing("coord.lon"))?,
            ),
            resolved_name: body.name.clone(),
            observed_at: body.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
