//! A linear regression flood model stored as a versioned bincode artifact.

use crate::features::FeatureVector;
use crate::model::error::ModelError;
use crate::model::FloodModel;
use crate::types::prediction::Prediction;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;
const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

#[derive(Serialize, Deserialize)]
struct ArtifactHeader {
    format_version: u32,
}

#[derive(Serialize, Deserialize)]
struct Artifact {
    format_version: u32,
    model: LinearModel,
}

/// `intercept + Σ coefficient·feature`, clamped into `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
    feature_names: Option<Vec<String>>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, ModelError> {
        let model = Self {
            intercept,
            coefficients,
            feature_names: None,
        };
        model.validate()?;
        Ok(model)
    }

    /// Records the training column names, one per coefficient.
    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self, ModelError> {
        self.feature_names = Some(names);
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::InvalidArtifact(
                "model has no coefficients".to_string(),
            ));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.coefficients.len() {
                return Err(ModelError::InvalidArtifact(format!(
                    "{} feature names for {} coefficients",
                    names.len(),
                    self.coefficients.len()
                )));
            }
        }
        Ok(())
    }

    /// Reads and validates an artifact written by [`LinearModel::save`].
    pub async fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ModelError::ArtifactRead(path.to_path_buf(), e))?;
        let path_buf = path.to_path_buf();
        let model = tokio::task::spawn_blocking(move || Self::decode(&bytes, &path_buf)).await??;
        info!(
            "Loaded linear flood model with {} inputs from {}",
            model.coefficients.len(),
            path.display()
        );
        Ok(model)
    }

    fn decode(bytes: &[u8], path: &Path) -> Result<Self, ModelError> {
        let (header, _) =
            bincode::serde::decode_from_slice::<ArtifactHeader, _>(bytes, BINCODE_CONFIG)
                .map_err(|e| ModelError::ArtifactDecode(path.to_path_buf(), Box::new(e)))?;
        if header.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                path: path.to_path_buf(),
                expected: ARTIFACT_FORMAT_VERSION,
                found: header.format_version,
            });
        }

        let (artifact, _) = bincode::serde::decode_from_slice::<Artifact, _>(bytes, BINCODE_CONFIG)
            .map_err(|e| ModelError::ArtifactDecode(path.to_path_buf(), Box::new(e)))?;
        artifact.model.validate()?;
        Ok(artifact.model)
    }

    pub async fn save(&self, path: &Path) -> Result<(), ModelError> {
        let artifact = Artifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model: self.clone(),
        };
        let bytes = tokio::task::spawn_blocking(move || {
            bincode::serde::encode_to_vec(artifact, BINCODE_CONFIG)
                .map_err(|e| ModelError::ArtifactEncode(Box::new(e)))
        })
        .await??;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| ModelError::ArtifactWrite(path.to_path_buf(), e))
    }
}

impl FloodModel for LinearModel {
    fn input_dim(&self) -> usize {
        self.coefficients.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::InputDimension {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }
        let raw = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_slice())
                .map(|(c, x)| c * x)
                .sum::<f64>();
        Prediction::clamped(raw).ok_or(ModelError::NonFiniteOutput(raw))
    }
}
