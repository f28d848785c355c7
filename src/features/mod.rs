//! Builds the fixed-order model input from static attributes and live observations.
//!
//! The vector is every static attribute in file order followed by five dynamic slots:
//!
//! | slot | value                | name                 |
//! |------|----------------------|----------------------|
//! | 0    | rainfall (mm)        | `MonsoonIntensity`   |
//! | 1    | wind speed / 10      | `RiverManagement`    |
//! | 2    | humidity / 100       | `DrainageSystems`    |
//! | 3    | temperature / 50     | `ClimateChange`      |
//! | 4    | 0.5                  | `InadequatePlanning` |
//!
//! The names are the training columns the slots stand in for. The order is part of the
//! contract with the model artifact and must not change.

use crate::static_features::store::StaticFeatureRecord;
use crate::types::rainfall::RainfallObservation;
use crate::types::weather_observation::WeatherObservation;

pub const DYNAMIC_FEATURE_COUNT: usize = 5;

pub const DYNAMIC_FEATURE_NAMES: [&str; DYNAMIC_FEATURE_COUNT] = [
    "MonsoonIntensity",
    "RiverManagement",
    "DrainageSystems",
    "ClimateChange",
    "InadequatePlanning",
];

/// Value of the last dynamic slot, a factor no live observation covers.
pub const PLACEHOLDER_FEATURE: f64 = 0.5;

/// The five per-request attributes derived from weather and rainfall.
///
/// Scaling is a fixed linear transform; out-of-range readings pass through unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicFeatures([f64; DYNAMIC_FEATURE_COUNT]);

impl DynamicFeatures {
    pub fn derive(weather: &WeatherObservation, rainfall: &RainfallObservation) -> Self {
        Self([
            rainfall.millimetres,
            weather.wind_speed / 10.0,
            weather.humidity / 100.0,
            weather.temperature / 50.0,
            PLACEHOLDER_FEATURE,
        ])
    }

    pub fn values(&self) -> &[f64; DYNAMIC_FEATURE_COUNT] {
        &self.0
    }
}

/// Ordered model input: static attributes, then [`DynamicFeatures`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trailing dynamic slots.
    pub fn dynamic(&self) -> &[f64] {
        &self.0[self.0.len().saturating_sub(DYNAMIC_FEATURE_COUNT)..]
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Concatenates the static record with the dynamic attributes derived from the
/// observations. The result always has `record.values.len() + 5` entries.
///
/// # Examples
///
/// ```
/// use flood_sight::{assemble, LatLon, RainfallObservation, StaticFeatureRecord, WeatherObservation};
///
/// let record = StaticFeatureRecord { city: "Chennai".into(), values: vec![7.0, 5.0] };
/// let weather = WeatherObservation {
///     temperature: 25.0,
///     humidity: 80.0,
///     wind_speed: 5.0,
///     condition: "light rain".into(),
///     location: LatLon(13.08, 80.27),
///     resolved_name: None,
///     observed_at: None,
/// };
/// let vector = assemble(&record, &weather, &RainfallObservation::forecast(2.0));
/// assert_eq!(vector.as_slice(), &[7.0, 5.0, 2.0, 0.5, 0.8, 0.5, 0.5]);
/// ```
pub fn assemble(
    record: &StaticFeatureRecord,
    weather: &WeatherObservation,
    rainfall: &RainfallObservation,
) -> FeatureVector {
    let dynamic = DynamicFeatures::derive(weather, rainfall);
    let mut values = Vec::with_capacity(record.values.len() + DYNAMIC_FEATURE_COUNT);
    values.extend_from_slice(&record.values);
    values.extend_from_slice(dynamic.values());
    FeatureVector(values)
}
