use crate::classifiers::NaiveBayes;
use crate::error::{BayesError, Result};
use crate::persistence::{ModelFile, ModelStore};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Stores models as pretty-printed [`ModelFile`] JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelStore;

impl ModelStore for JsonModelStore {
    fn save(&self, model: &NaiveBayes, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &ModelFile::from_model(model))?;
        writer.flush()?;

        info!(path = %path.display(), "saved classifier");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<NaiveBayes> {
        let file = File::open(path).map_err(|e| BayesError::from_io(path, e))?;
        let model_file: ModelFile =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| BayesError::Parse {
                path: path.to_path_buf(),
                line: Some(e.line()).filter(|l| *l > 0),
                reason: e.to_string(),
            })?;
        let model = model_file.into_model()?;

        info!(path = %path.display(), relation = %model.relation_name(), "loaded classifier");
        Ok(model)
    }
}
