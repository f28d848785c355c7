pub mod lat_lon;
pub mod prediction;
pub mod rainfall;
pub mod risk_band;
pub mod weather_observation;
