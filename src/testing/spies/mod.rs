mod classify_spy_classifier;

pub use classify_spy_classifier::ClassifySpyClassifier;
