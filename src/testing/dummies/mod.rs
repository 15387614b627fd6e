mod undetermined_classifier;

pub use undetermined_classifier::UndeterminedClassifier;
