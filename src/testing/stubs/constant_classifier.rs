use crate::classifiers::{Classifier, Prediction};
use crate::error::Result;
use crate::testing::fixtures::strings;

/// Always predicts `label`, even when it is not one of `classes`.
pub struct ConstantClassifier {
    label: String,
    classes: Vec<String>,
    labels: Vec<String>,
}

impl ConstantClassifier {
    pub fn new(label: &str, classes: &[&str], labels: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            classes: strings(classes),
            labels: strings(labels),
        }
    }
}

impl Classifier for ConstantClassifier {
    fn class_values(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn attribute_labels(&self) -> &[String] {
        &self.labels
    }

    fn get_votes_for_instance(&self, _values: &[String]) -> Result<Vec<(String, f64)>> {
        Ok(self
            .classes
            .iter()
            .map(|c| (c.clone(), if *c == self.label { 1.0 } else { 0.0 }))
            .collect())
    }

    fn classify(&self, _values: &[String]) -> Result<Prediction> {
        Ok(Prediction::Class(self.label.clone()))
    }
}
