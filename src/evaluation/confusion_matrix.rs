use crate::classifiers::{Classifier, Prediction};
use crate::core::Dataset;
use crate::error::{BayesError, Result};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::info;

/// Actual-vs-predicted counts of one evaluation run.
///
/// Rows the classifier could not decide are kept in a separate tally per
/// actual class. They count toward the total but not toward any cell.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    classes: Vec<String>,
    matrix: BTreeMap<String, BTreeMap<String, u64>>,
    undetermined: BTreeMap<String, u64>,
    total: u64,
    correct: u64,
}

impl ConfusionMatrix {
    pub fn evaluate(dataset: &Dataset, classifier: &dyn Classifier) -> Result<Self> {
        if dataset.is_empty() {
            return Err(BayesError::EmptyDataset);
        }

        let expected = classifier.attribute_labels().len();
        if dataset.number_of_attributes() != expected {
            return Err(BayesError::mismatch(format!(
                "dataset has {} attributes, classifier expects {expected}",
                dataset.number_of_attributes()
            )));
        }

        let classes = classifier.class_values();
        let mut cm = ConfusionMatrix {
            matrix: classes
                .iter()
                .map(|a| (a.clone(), classes.iter().map(|p| (p.clone(), 0)).collect()))
                .collect(),
            undetermined: classes.iter().map(|a| (a.clone(), 0)).collect(),
            classes,
            total: 0,
            correct: 0,
        };

        for (values, actual) in dataset.rows() {
            let predicted = classifier.classify(values)?;
            cm.record(actual, &predicted)?;
        }

        info!(
            total = cm.total,
            correct = cm.correct,
            accuracy = cm.accuracy(),
            "evaluated classifier"
        );
        Ok(cm)
    }

    fn record(&mut self, actual: &str, predicted: &Prediction) -> Result<()> {
        let Some(row) = self.matrix.get_mut(actual) else {
            return Err(BayesError::mismatch(format!(
                "actual class '{actual}' is unknown to the classifier"
            )));
        };

        match predicted {
            Prediction::Class(p) => {
                let Some(cell) = row.get_mut(p) else {
                    return Err(BayesError::mismatch(format!(
                        "predicted class '{p}' is not in the matrix"
                    )));
                };
                *cell += 1;
                if p == actual {
                    self.correct += 1;
                }
            }
            Prediction::Undetermined => {
                if let Some(n) = self.undetermined.get_mut(actual) {
                    *n += 1;
                }
            }
        }
        self.total += 1;
        Ok(())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn count(&self, actual: &str, predicted: &str) -> u64 {
        self.matrix
            .get(actual)
            .and_then(|row| row.get(predicted))
            .copied()
            .unwrap_or(0)
    }

    pub fn undetermined(&self, actual: &str) -> u64 {
        self.undetermined.get(actual).copied().unwrap_or(0)
    }

    pub fn total_undetermined(&self) -> u64 {
        self.undetermined.values().sum()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn off_diagonal(&self) -> u64 {
        self.matrix
            .iter()
            .flat_map(|(a, row)| row.iter().filter(move |(p, _)| *p != a))
            .map(|(_, n)| *n)
            .sum()
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl Display for ConfusionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let show_undetermined = self.total_undetermined() > 0;
        let width = self
            .classes
            .iter()
            .map(|c| c.chars().count())
            .chain(["actual\\pred".len()])
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$}", "actual\\pred")?;
        for c in &self.classes {
            write!(f, " {c:>width$}")?;
        }
        if show_undetermined {
            write!(f, " {:>width$}", "?")?;
        }
        writeln!(f)?;

        for actual in &self.classes {
            write!(f, "{actual:<width$}")?;
            for predicted in &self.classes {
                write!(f, " {:>width$}", self.count(actual, predicted))?;
            }
            if show_undetermined {
                write!(f, " {:>width$}", self.undetermined(actual))?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "accuracy: {:.4} ({}/{})",
            self.accuracy(),
            self.correct,
            self.total
        )
    }
}
