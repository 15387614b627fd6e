use crate::core::Dataset;
use crate::error::Result;
use crate::streams::DatasetSource;
use crate::streams::arff::ArffFileStream;
use std::path::Path;
use tracing::info;

/// Loads a whole ARFF file into a [`Dataset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArffFileSource {
    /// 0-based class column. `None` selects the last attribute.
    pub class_index: Option<usize>,
}

impl ArffFileSource {
    pub fn new(class_index: Option<usize>) -> Self {
        ArffFileSource { class_index }
    }
}

impl DatasetSource for ArffFileSource {
    fn load(&self, path: &Path) -> Result<Dataset> {
        let mut stream = ArffFileStream::open(path, self.class_index)?;
        let header = stream.header().clone();
        let rows = stream.by_ref().collect::<Result<Vec<_>>>()?;
        let dataset = Dataset::from_header(&header, rows)?;

        info!(
            path = %path.display(),
            relation = %dataset.relation_name(),
            instances = dataset.len(),
            attributes = dataset.number_of_attributes(),
            lines = stream.line_number(),
            "loaded ARFF dataset"
        );
        Ok(dataset)
    }
}
