use crate::types::rainfall::RainfallObservation;
use crate::types::weather_observation::WeatherObservation;
use std::fmt;

/// Real-time conditions for the city, shown whether or not a prediction was made.
pub struct WeatherPanel<'a> {
    pub city: &'a str,
    pub weather: &'a WeatherObservation,
    pub rainfall: &'a RainfallObservation,
}

impl fmt::Display for WeatherPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📡 Real-Time Weather")?;
        match self.weather.resolved_name.as_deref() {
            Some(name) if !name.eq_ignore_ascii_case(self.city.trim()) => {
                writeln!(f, "City: {} ({})", self.city, name)?
            }
            _ => writeln!(f, "City: {}", self.city)?,
        }
        if let Some(observed_at) = self.weather.observed_at {
            writeln!(f, "🕒 Observed: {}", observed_at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(f, "🌡️ Temperature: {} °C", self.weather.temperature)?;
        writeln!(f, "💧 Humidity: {}%", self.weather.humidity)?;
        writeln!(f, "💨 Wind Speed: {} m/s", self.weather.wind_speed)?;
        writeln!(f, "🌧️ Rainfall: {}", self.rainfall)?;
        write!(f, "☁️ Condition: {}", self.weather.condition)
    }
}
