mod error;
mod features;
mod flood_sight;
mod model;
mod observations;
mod presentation;
mod static_features;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use error::FloodSightError;
pub use flood_sight::*;

pub use features::{
    assemble, DynamicFeatures, FeatureVector, DYNAMIC_FEATURE_COUNT, DYNAMIC_FEATURE_NAMES,
    PLACEHOLDER_FEATURE,
};

pub use model::linear_model::{LinearModel, ARTIFACT_FORMAT_VERSION};
pub use model::FloodModel;

pub use observations::rainfall_client::{
    RainfallClient, DEFAULT_RAINFALL_TIMEOUT, OPEN_METEO_BASE_URL,
};
pub use observations::weather_client::{WeatherClient, OPENWEATHER_BASE_URL};

pub use presentation::gradient::{color_at, GradientBar, DEFAULT_BAR_WIDTH};
pub use presentation::report::RiskReport;
pub use presentation::weather_panel::WeatherPanel;
pub use presentation::{
    not_found_message, Style, Styled, StyledDisplay, STATIC_NOT_FOUND_MESSAGE,
    WEATHER_NOT_FOUND_MESSAGE,
};

pub use static_features::store::{StaticFeatureRecord, StaticFeatureStore, CITY_COLUMN};

pub use types::lat_lon::LatLon;
pub use types::prediction::Prediction;
pub use types::rainfall::{RainfallObservation, RainfallSource};
pub use types::risk_band::{IndicatorColor, RiskBand, HIGH_THRESHOLD, MODERATE_THRESHOLD};
pub use types::weather_observation::WeatherObservation;

pub use model::error::ModelError;
pub use observations::error::ObservationError;
pub use static_features::error::StaticDataError;
pub use utils::{get_data_dir, MODEL_FILE_NAME, STATIC_FEATURES_FILE_NAME};
