use crate::core::Dataset;
use crate::error::{BayesError, Result};
use crate::streams::DatasetSource;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Serves prepared datasets by path; unknown paths are not found.
#[derive(Default)]
pub struct InMemorySource {
    datasets: HashMap<PathBuf, Dataset>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        self.datasets.insert(path.into(), dataset);
        self
    }
}

impl DatasetSource for InMemorySource {
    fn load(&self, path: &Path) -> Result<Dataset> {
        self.datasets
            .get(path)
            .cloned()
            .ok_or_else(|| BayesError::SourceNotFound {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such dataset"),
            })
    }
}
