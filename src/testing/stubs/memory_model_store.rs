use crate::classifiers::NaiveBayes;
use crate::error::{BayesError, Result};
use crate::persistence::{ModelFile, ModelStore};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps saved models in memory, keyed by path.
#[derive(Default)]
pub struct MemoryModelStore {
    files: RefCell<HashMap<PathBuf, ModelFile>>,
}

impl MemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

impl ModelStore for MemoryModelStore {
    fn save(&self, model: &NaiveBayes, path: &Path) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), ModelFile::from_model(model));
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<NaiveBayes> {
        let file = self.files.borrow().get(path).cloned();
        match file {
            Some(f) => f.into_model(),
            None => Err(BayesError::SourceNotFound {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such model"),
            }),
        }
    }
}
