pub mod arff;

use crate::core::Dataset;
use crate::error::Result;
use std::path::Path;

/// Capability to load a labeled dataset from somewhere addressed by a path.
pub trait DatasetSource {
    fn load(&self, path: &Path) -> Result<Dataset>;
}
