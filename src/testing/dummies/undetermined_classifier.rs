use crate::classifiers::Classifier;
use crate::error::Result;
use crate::testing::fixtures::strings;

/// Scores every class zero, so every prediction is undetermined.
pub struct UndeterminedClassifier {
    classes: Vec<String>,
    labels: Vec<String>,
}

impl UndeterminedClassifier {
    pub fn new(classes: &[&str], labels: &[&str]) -> Self {
        Self {
            classes: strings(classes),
            labels: strings(labels),
        }
    }
}

impl Classifier for UndeterminedClassifier {
    fn class_values(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn attribute_labels(&self) -> &[String] {
        &self.labels
    }

    fn get_votes_for_instance(&self, _values: &[String]) -> Result<Vec<(String, f64)>> {
        Ok(self.classes.iter().map(|c| (c.clone(), 0.0)).collect())
    }
}
