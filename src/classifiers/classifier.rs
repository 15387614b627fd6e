use crate::error::Result;
use std::fmt;

/// Outcome of classifying one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Class(String),
    /// Every class scored zero.
    Undetermined,
}

impl Prediction {
    pub fn label(&self) -> Option<&str> {
        match self {
            Prediction::Class(c) => Some(c),
            Prediction::Undetermined => None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Prediction::Undetermined)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Class(c) => write!(f, "{c}"),
            Prediction::Undetermined => write!(f, "<undetermined>"),
        }
    }
}

pub trait Classifier {
    /// Known class labels in sorted order.
    fn class_values(&self) -> Vec<String>;

    /// Attribute names an instance must supply, in order.
    fn attribute_labels(&self) -> &[String];

    /// Score per known class, in `class_values` order.
    fn get_votes_for_instance(&self, values: &[String]) -> Result<Vec<(String, f64)>>;

    fn classify(&self, values: &[String]) -> Result<Prediction> {
        let votes = self.get_votes_for_instance(values)?;
        Ok(best_vote(&votes))
    }
}

/// First class with the strictly greatest positive score.
pub fn best_vote(votes: &[(String, f64)]) -> Prediction {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0;
    for (class_val, score) in votes {
        if *score > best_score {
            best_score = *score;
            best = Some(class_val);
        }
    }
    match best {
        Some(c) => Prediction::Class(c.to_string()),
        None => Prediction::Undetermined,
    }
}
