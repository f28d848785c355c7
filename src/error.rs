use crate::model::error::ModelError;
use crate::observations::error::ObservationError;
use crate::static_features::error::StaticDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloodSightError {
    #[error(transparent)]
    StaticData(#[from] StaticDataError),

    #[error(transparent)]
    Observation(#[from] ObservationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("City '{0}' not found in weather API")]
    CityNotFoundInWeather(String),

    #[error("City '{0}' not found in static feature data")]
    CityNotFoundInStaticData(String),

    #[error("Model expects {expected} features, static data and live observations provide {found}")]
    FeatureDimensionMismatch { expected: usize, found: usize },

    #[error("Feature {position} is '{found}' but the model was trained on '{expected}'")]
    FeatureOrderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Failed to determine data directory")]
    DataDirResolution(#[source] std::io::Error),
}
