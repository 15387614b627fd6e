use crate::classifiers::{Classifier, NaiveBayes};
use crate::error::Result;
use std::cell::RefCell;

/// Wraps a trained model and records every instance it is asked to score.
pub struct ClassifySpyClassifier {
    inner: NaiveBayes,
    pub seen: RefCell<Vec<Vec<String>>>,
}

impl ClassifySpyClassifier {
    pub fn new(inner: NaiveBayes) -> Self {
        Self {
            inner,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Classifier for ClassifySpyClassifier {
    fn class_values(&self) -> Vec<String> {
        self.inner.class_values()
    }

    fn attribute_labels(&self) -> &[String] {
        self.inner.attribute_labels()
    }

    fn get_votes_for_instance(&self, values: &[String]) -> Result<Vec<(String, f64)>> {
        self.seen.borrow_mut().push(values.to_vec());
        self.inner.get_votes_for_instance(values)
    }
}
