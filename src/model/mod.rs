pub mod error;
pub mod linear_model;

use crate::features::FeatureVector;
use crate::model::error::ModelError;
use crate::types::prediction::Prediction;

/// A pre-trained flood model, seen only through its input contract and `predict`.
///
/// Implementations must be deterministic: the same vector always yields the same
/// prediction.
pub trait FloodModel: Send + Sync {
    /// Number of features the model was trained on.
    fn input_dim(&self) -> usize;

    /// Training column names in input order, when the artifact records them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError>;
}
