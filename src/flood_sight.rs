//! This module provides the main entry point for flood risk assessments.
//! It owns the static feature table and the model for the lifetime of the process,
//! and runs the observe → assemble → predict chain for one city at a time.

use crate::error::FloodSightError;
use crate::features::{assemble, DYNAMIC_FEATURE_COUNT, DYNAMIC_FEATURE_NAMES};
use crate::model::linear_model::LinearModel;
use crate::model::FloodModel;
use crate::observations::rainfall_client::{
    RainfallClient, DEFAULT_RAINFALL_TIMEOUT, OPEN_METEO_BASE_URL,
};
use crate::observations::weather_client::{WeatherClient, OPENWEATHER_BASE_URL};
use crate::presentation::report::RiskReport;
use crate::presentation::weather_panel::WeatherPanel;
use crate::static_features::store::StaticFeatureStore;
use crate::types::rainfall::RainfallObservation;
use crate::types::weather_observation::WeatherObservation;
use crate::utils::{get_data_dir, MODEL_FILE_NAME, STATIC_FEATURES_FILE_NAME};
use bon::bon;
use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Weather and rainfall fetched once for a city, shared by prediction and display.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveConditions {
    /// City name as entered, trimmed.
    pub city: String,
    pub weather: WeatherObservation,
    pub rainfall: RainfallObservation,
}

impl LiveConditions {
    pub fn panel(&self) -> WeatherPanel<'_> {
        WeatherPanel {
            city: &self.city,
            weather: &self.weather,
            rainfall: &self.rainfall,
        }
    }
}

/// Everything one user interaction produces once the weather provider knows the city.
///
/// `outcome` holds the prediction, or the reason there is none (typically
/// [`FloodSightError::CityNotFoundInStaticData`]); the live conditions are available
/// either way.
#[derive(Debug)]
pub struct Assessment {
    pub conditions: LiveConditions,
    pub outcome: Result<RiskReport, FloodSightError>,
}

/// The flood risk estimator.
///
/// Holds the static feature table and the prediction model, both loaded exactly once by
/// [`FloodSight::builder`] and read-only afterwards. If either fails to load, no
/// `FloodSight` is created.
///
/// # Examples
///
/// ```no_run
/// # use flood_sight::{FloodSight, FloodSightError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), FloodSightError> {
/// let sight = FloodSight::builder()
///     .weather_api_key("your-openweather-key")
///     .build()
///     .await?;
///
/// let assessment = sight.assess("Chennai").await?;
/// println!("{}", assessment.conditions.panel());
/// match assessment.outcome {
///     Ok(report) => println!("{}", report),
///     Err(e) => eprintln!("{}", e),
/// }
/// # Ok(())
/// # }
/// ```
pub struct FloodSight {
    static_features: StaticFeatureStore,
    model: Arc<dyn FloodModel>,
    weather: WeatherClient,
    rainfall: RainfallClient,
}

#[bon]
impl FloodSight {
    /// Loads the static table and the model and checks that they fit together.
    ///
    /// # Arguments
    ///
    /// * `.weather_api_key(String)`: **Required.** OpenWeather access credential.
    /// * `.data_dir(PathBuf)`: Optional. Folder holding `city_static_features.csv` and
    ///   `flood_model.bin`. Defaults to `flood_sight` in the system data directory.
    /// * `.static_features_path(PathBuf)`: Optional. Overrides the static table location.
    /// * `.model_path(PathBuf)`: Optional. Overrides the model artifact location.
    /// * `.model(Arc<dyn FloodModel>)`: Optional. Uses this model instead of loading one.
    /// * `.weather_base_url(String)` / `.rainfall_base_url(String)`: Optional provider roots.
    /// * `.rainfall_timeout(Duration)`: Optional. Bounded wait for rainfall, default 5 s.
    ///
    /// # Errors
    ///
    /// Any load failure is returned and is meant to stop the program:
    /// [`FloodSightError::StaticData`], [`FloodSightError::Model`],
    /// [`FloodSightError::DataDirResolution`], and
    /// [`FloodSightError::FeatureDimensionMismatch`] or
    /// [`FloodSightError::FeatureOrderMismatch`] when the table does not match the
    /// model's inputs.
    #[builder]
    pub async fn new(
        #[builder(into)] weather_api_key: String,
        data_dir: Option<PathBuf>,
        static_features_path: Option<PathBuf>,
        model_path: Option<PathBuf>,
        model: Option<Arc<dyn FloodModel>>,
        #[builder(into)] weather_base_url: Option<String>,
        #[builder(into)] rainfall_base_url: Option<String>,
        rainfall_timeout: Option<Duration>,
    ) -> Result<Self, FloodSightError> {
        let resolve = |file_name: &str| -> Result<PathBuf, FloodSightError> {
            match &data_dir {
                Some(dir) => Ok(dir.join(file_name)),
                None => get_data_dir()
                    .map(|dir| dir.join(file_name))
                    .map_err(FloodSightError::DataDirResolution),
            }
        };

        let static_features_path = match static_features_path {
            Some(path) => path,
            None => resolve(STATIC_FEATURES_FILE_NAME)?,
        };
        let static_features = StaticFeatureStore::load(&static_features_path).await?;

        let model: Arc<dyn FloodModel> = match model {
            Some(model) => model,
            None => {
                let model_path = match model_path {
                    Some(path) => path,
                    None => resolve(MODEL_FILE_NAME)?,
                };
                Arc::new(LinearModel::load(&model_path).await?)
            }
        };

        Self::check_model_inputs(&static_features, model.as_ref())?;

        let sight = Self {
            static_features,
            model,
            weather: WeatherClient::new(
                weather_base_url.as_deref().unwrap_or(OPENWEATHER_BASE_URL),
                weather_api_key,
            ),
            rainfall: RainfallClient::new(
                rainfall_base_url.as_deref().unwrap_or(OPEN_METEO_BASE_URL),
                rainfall_timeout.unwrap_or(DEFAULT_RAINFALL_TIMEOUT),
            ),
        };
        info!(
            "Flood sight ready: {} cities from {}, {} model inputs",
            sight.static_features.len(),
            sight.static_features.source().display(),
            sight.model.input_dim()
        );
        Ok(sight)
    }

    fn check_model_inputs(
        static_features: &StaticFeatureStore,
        model: &dyn FloodModel,
    ) -> Result<(), FloodSightError> {
        let found = static_features.attribute_count() + DYNAMIC_FEATURE_COUNT;
        if model.input_dim() != found {
            return Err(FloodSightError::FeatureDimensionMismatch {
                expected: model.input_dim(),
                found,
            });
        }

        let Some(trained_on) = model.feature_names() else {
            return Ok(());
        };
        let provided = static_features
            .attribute_names()
            .iter()
            .map(String::as_str)
            .chain(DYNAMIC_FEATURE_NAMES);
        for (position, (expected, found)) in trained_on.iter().zip(provided).enumerate() {
            if expected != found {
                return Err(FloodSightError::FeatureOrderMismatch {
                    position,
                    expected: expected.clone(),
                    found: found.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fetches current weather for `city`, then rainfall at the reported coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`FloodSightError::CityNotFoundInWeather`] when the weather provider does
    /// not know the city; rainfall is not requested in that case. Rainfall problems are
    /// never errors.
    pub async fn observe(&self, city: &str) -> Result<LiveConditions, FloodSightError> {
        let city = city.trim();
        let weather = self
            .weather
            .fetch(city)
            .await?
            .ok_or_else(|| FloodSightError::CityNotFoundInWeather(city.to_string()))?;
        let rainfall = self.rainfall.fetch(weather.location).await;

        Ok(LiveConditions {
            city: city.to_string(),
            weather,
            rainfall,
        })
    }

    /// Looks up the static attributes for the observed city, assembles the feature
    /// vector and runs the model.
    ///
    /// # Errors
    ///
    /// Returns [`FloodSightError::CityNotFoundInStaticData`] when the city is missing
    /// from the static table, or [`FloodSightError::Model`] if the model fails.
    pub fn predict(&self, conditions: &LiveConditions) -> Result<RiskReport, FloodSightError> {
        let record = self
            .static_features
            .lookup(&conditions.city)
            .ok_or_else(|| FloodSightError::CityNotFoundInStaticData(conditions.city.clone()))?;

        let features = assemble(record, &conditions.weather, &conditions.rainfall);
        debug!("Feature vector for '{}': {:?}", record.city, features.as_slice());

        let prediction = self.model.predict(&features)?;
        info!(
            "Flood probability for '{}': {} ({})",
            conditions.city,
            prediction,
            prediction.risk_band()
        );
        Ok(RiskReport::new(conditions.city.clone(), prediction, features))
    }

    /// One user interaction: a single [`FloodSight::observe`] followed by
    /// [`FloodSight::predict`] on the same conditions.
    ///
    /// # Errors
    ///
    /// Only failures of the observation step are returned here; prediction failures
    /// end up in [`Assessment::outcome`].
    pub async fn assess(&self, city: &str) -> Result<Assessment, FloodSightError> {
        let conditions = self.observe(city).await?;
        let outcome = self.predict(&conditions);
        Ok(Assessment {
            conditions,
            outcome,
        })
    }
}
