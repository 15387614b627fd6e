use crate::classifiers::{NaiveBayes, Prediction};
use crate::core::Dataset;
use crate::error::{BayesError, Result};
use crate::evaluation::ConfusionMatrix;
use crate::persistence::ModelStore;
use crate::streams::DatasetSource;
use crate::tasks::CaseRequest;
use std::path::Path;

/// Working state of one user session: at most one dataset and one
/// classifier. Operations that need either report `NothingLoaded`.
#[derive(Default)]
pub struct Session {
    dataset: Option<Dataset>,
    classifier: Option<NaiveBayes>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn classifier(&self) -> Option<&NaiveBayes> {
        self.classifier.as_ref()
    }

    /// Replaces the current dataset only if loading succeeds.
    pub fn load_dataset(&mut self, source: &dyn DatasetSource, path: &Path) -> Result<&Dataset> {
        let dataset = source.load(path)?;
        Ok(self.dataset.insert(dataset))
    }

    /// Trains a fresh classifier on the current dataset. On failure the
    /// previous classifier is kept.
    pub fn train(&mut self) -> Result<&NaiveBayes> {
        let dataset = self.dataset.as_ref().ok_or(BayesError::NothingLoaded("dataset"))?;
        let mut classifier = NaiveBayes::new();
        classifier.train(dataset)?;
        Ok(self.classifier.insert(classifier))
    }

    pub fn load_classifier(&mut self, store: &dyn ModelStore, path: &Path) -> Result<&NaiveBayes> {
        let classifier = store.load(path)?;
        Ok(self.classifier.insert(classifier))
    }

    pub fn save_classifier(&self, store: &dyn ModelStore, path: &Path) -> Result<()> {
        let classifier = self.require_classifier()?;
        store.save(classifier, path)
    }

    pub fn evaluate(&self) -> Result<ConfusionMatrix> {
        let classifier = self.require_classifier()?;
        let dataset = self.dataset.as_ref().ok_or(BayesError::NothingLoaded("dataset"))?;
        ConfusionMatrix::evaluate(dataset, classifier)
    }

    pub fn classify_case(&self, case: &CaseRequest) -> Result<Prediction> {
        case.classify(self.require_classifier()?)
    }

    fn require_classifier(&self) -> Result<&NaiveBayes> {
        self.classifier
            .as_ref()
            .ok_or(BayesError::NothingLoaded("classifier"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::Classifier;
    use crate::testing::fixtures::{nominal_dataset, strings};
    use crate::testing::stubs::{InMemorySource, MemoryModelStore};

    fn weather() -> Dataset {
        nominal_dataset(
            &["outlook"],
            "play",
            &[
                &["sunny", "play"],
                &["sunny", "play"],
                &["rainy", "no_play"],
                &["rainy", "no_play"],
            ],
        )
    }

    #[test]
    fn operations_without_state_report_nothing_loaded() {
        let mut s = Session::new();
        assert!(matches!(s.train(), Err(BayesError::NothingLoaded("dataset"))));
        assert!(matches!(
            s.evaluate(),
            Err(BayesError::NothingLoaded("classifier"))
        ));
        let case = CaseRequest::new(&[], Vec::new()).unwrap();
        assert!(matches!(
            s.classify_case(&case),
            Err(BayesError::NothingLoaded("classifier"))
        ));
        assert!(matches!(
            s.save_classifier(&MemoryModelStore::new(), Path::new("m.json")),
            Err(BayesError::NothingLoaded("classifier"))
        ));
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let source = InMemorySource::new().with("weather.arff", weather());
        let mut s = Session::new();
        s.load_dataset(&source, Path::new("weather.arff")).unwrap();

        let err = s.load_dataset(&source, Path::new("other.arff")).unwrap_err();
        assert!(matches!(err, BayesError::SourceNotFound { .. }));
        assert_eq!(s.dataset().map(|d| d.len()), Some(4));
    }

    #[test]
    fn train_evaluate_and_classify() {
        let source = InMemorySource::new().with("weather.arff", weather());
        let mut s = Session::new();
        s.load_dataset(&source, Path::new("weather.arff")).unwrap();
        s.train().unwrap();

        let cm = s.evaluate().unwrap();
        assert_eq!(cm.total(), 4);
        assert!((cm.accuracy() - 1.0).abs() < 1e-12);

        let model = s.classifier().unwrap();
        let case = CaseRequest::for_classifier(model, strings(&["sunny"])).unwrap();
        assert_eq!(s.classify_case(&case).unwrap().label(), Some("play"));
    }

    #[test]
    fn training_on_empty_dataset_keeps_previous_classifier() {
        let empty = nominal_dataset(&["outlook"], "play", &[]);
        let source = InMemorySource::new()
            .with("weather.arff", weather())
            .with("empty.arff", empty);
        let mut s = Session::new();
        s.load_dataset(&source, Path::new("weather.arff")).unwrap();
        s.train().unwrap();

        s.load_dataset(&source, Path::new("empty.arff")).unwrap();
        assert!(matches!(s.train(), Err(BayesError::EmptyDataset)));
        assert_eq!(
            s.classifier().map(|c| c.class_values()),
            Some(strings(&["no_play", "play"]))
        );
        assert!(matches!(s.evaluate(), Err(BayesError::EmptyDataset)));
    }

    #[test]
    fn saved_classifier_loads_into_new_session() {
        let source = InMemorySource::new().with("weather.arff", weather());
        let store = MemoryModelStore::new();
        let mut s = Session::new();
        s.load_dataset(&source, Path::new("weather.arff")).unwrap();
        s.train().unwrap();
        s.save_classifier(&store, Path::new("weather.json")).unwrap();

        let mut fresh = Session::new();
        fresh.load_classifier(&store, Path::new("weather.json")).unwrap();
        fresh.load_dataset(&source, Path::new("weather.arff")).unwrap();
        let cm = fresh.evaluate().unwrap();
        assert_eq!(cm.correct(), 4);
    }
}
