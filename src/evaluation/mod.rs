mod confusion_matrix;

pub use confusion_matrix::ConfusionMatrix;
