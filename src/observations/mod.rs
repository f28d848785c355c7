pub mod error;
pub mod models;
pub mod rainfall_client;
pub mod weather_client;
