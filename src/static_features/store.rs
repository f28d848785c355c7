//! In-memory table of per-city static flood attributes, read once from a CSV file.

use crate::static_features::error::StaticDataError;
use log::{info, warn};
use polars::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::{fs, task};

/// Name of the identifying column in the static feature file.
pub const CITY_COLUMN: &str = "City";

/// Static attributes for one city, in the column order of the source file.
///
/// The city name itself is not part of [`StaticFeatureRecord::values`].
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFeatureRecord {
    /// City name exactly as it appears in the file.
    pub city: String,
    pub values: Vec<f64>,
}

/// Read-only lookup table of [`StaticFeatureRecord`]s keyed by lowercased city name.
///
/// Created once at startup with [`StaticFeatureStore::load`]; later edits to the file
/// are not picked up.
#[derive(Debug, Clone)]
pub struct StaticFeatureStore {
    source: PathBuf,
    attribute_names: Vec<String>,
    records: HashMap<String, StaticFeatureRecord>,
}

impl StaticFeatureStore {
    /// Loads the CSV at `path`. The first row is the header and must contain a
    /// `City` column; every other column must be numeric.
    ///
    /// # Errors
    ///
    /// Returns a [`StaticDataError`] if the file is missing or unreadable, lacks the
    /// `City` column or any attribute column, or holds non-numeric or empty attribute
    /// values.
    pub async fn load(path: &Path) -> Result<Self, StaticDataError> {
        if fs::metadata(path).await.is_err() {
            return Err(StaticDataError::FileMissing(path.to_path_buf()));
        }

        let load_start = std::time::Instant::now();
        let path_buf = path.to_path_buf();
        let df = task::spawn_blocking(move || Self::read_csv(&path_buf)).await??;
        let store = Self::from_dataframe(&df, path)?;
        info!(
            "Loaded static features for {} cities ({} attributes) from {} in {:?}",
            store.len(),
            store.attribute_names.len(),
            path.display(),
            load_start.elapsed()
        );
        Ok(store)
    }

    fn read_csv(path: &Path) -> Result<DataFrame, StaticDataError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| StaticDataError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })?
            .finish()
            .map_err(|e| StaticDataError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })
    }

    /// Builds the table from an already parsed frame. `source` is only used in errors.
    pub fn from_dataframe(df: &DataFrame, source: &Path) -> Result<Self, StaticDataError> {
        let missing_column = |column: &str| StaticDataError::MissingColumn {
            path: source.to_path_buf(),
            column: column.to_string(),
        };

        let cities = df
            .column(CITY_COLUMN)
            .map_err(|_| missing_column(CITY_COLUMN))?
            .as_materialized_series()
            .cast(&DataType::String)
            .map_err(|e| StaticDataError::CsvRead {
                path: source.to_path_buf(),
                source: e,
            })?;
        let cities = cities.str().map_err(|e| StaticDataError::CsvRead {
            path: source.to_path_buf(),
            source: e,
        })?;

        let attribute_names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != CITY_COLUMN)
            .map(|name| name.to_string())
            .collect();
        if attribute_names.is_empty() {
            return Err(StaticDataError::NoAttributes(source.to_path_buf()));
        }

        let mut columns = Vec::with_capacity(attribute_names.len());
        for name in &attribute_names {
            let column = df
                .column(name)
                .map_err(|_| missing_column(name))?
                .as_materialized_series()
                .strict_cast(&DataType::Float64)
                .map_err(|e| StaticDataError::NonNumericColumn {
                    path: source.to_path_buf(),
                    column: name.clone(),
                    source: e,
                })?;
            columns.push(column);
        }
        let columns = columns
            .iter()
            .zip(&attribute_names)
            .map(|(series, name)| {
                series.f64().map_err(|e| StaticDataError::NonNumericColumn {
                    path: source.to_path_buf(),
                    column: name.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = HashMap::with_capacity(df.height());
        for idx in 0..df.height() {
            let Some(city) = cities.get(idx) else {
                warn!("Skipping row {} of {}: empty city name", idx + 1, source.display());
                continue;
            };

            let mut values = Vec::with_capacity(columns.len());
            for (column, name) in columns.iter().zip(&attribute_names) {
                let value = column.get(idx).ok_or_else(|| StaticDataError::MissingValue {
                    path: source.to_path_buf(),
                    city: city.to_string(),
                    column: name.clone(),
                })?;
                values.push(value);
            }

            match records.entry(city.to_lowercase()) {
                Entry::Occupied(_) => {
                    // The first row for a city wins.
                    warn!(
                        "Duplicate static feature row for '{}' in {}, keeping the first",
                        city,
                        source.display()
                    );
                }
                Entry::Vacant(entry) => {
                    entry.insert(StaticFeatureRecord {
                        city: city.to_string(),
                        values,
                    });
                }
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            attribute_names,
            records,
        })
    }

    /// Finds the record for `city`, ignoring case and surrounding whitespace.
    pub fn lookup(&self, city: &str) -> Option<&StaticFeatureRecord> {
        self.records.get(&city.trim().to_lowercase())
    }

    /// Attribute column names in file order, `City` excluded.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
