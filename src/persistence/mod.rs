mod json_model_store;
mod model_file;

pub use json_model_store::JsonModelStore;
pub use model_file::{MODEL_FORMAT_VERSION, ModelFile};

use crate::classifiers::NaiveBayes;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Capability to persist and restore trained models.
pub trait ModelStore {
    fn save(&self, model: &NaiveBayes, path: &Path) -> Result<()>;
    fn load(&self, path: &Path) -> Result<NaiveBayes>;
}

/// Model path stored next to a dataset: same stem, `.json` extension.
pub fn default_model_path(dataset_path: &Path) -> PathBuf {
    dataset_path.with_extension("json")
}
