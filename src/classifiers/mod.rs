pub mod attribute_class_observers;
pub mod bayes;
pub mod classifier;

pub use bayes::NaiveBayes;
pub use classifier::{Classifier, Prediction, best_vote};
