use crate::classifiers::attribute_class_observers::{AttributeClassObserver, ConditionalTable};
use std::collections::{BTreeMap, BTreeSet};

/// Relative-frequency estimate of P(value | class) for a nominal column.
///
/// While training, the vocabulary is shared across classes, so a value seen
/// only under other classes gets an explicit zero for this one. Values
/// outside the vocabulary have no estimate at all. An observer restored from
/// stored tables answers only for the keys stored under each class.
#[derive(Debug, Default)]
pub struct NominalAttributeClassObserver {
    restored: bool,
    total_weight_observed: f64,
    weight_per_class: BTreeMap<String, f64>,
    attribute_value_distribution_per_class: BTreeMap<String, BTreeMap<String, f64>>,
    vocabulary: BTreeSet<String>,
}

impl NominalAttributeClassObserver {
    pub fn new() -> NominalAttributeClassObserver {
        NominalAttributeClassObserver::default()
    }

    /// Rebuilds an observer from persisted probability tables. Each class gets
    /// unit weight, so the stored probabilities are returned unchanged.
    pub fn from_tables<'a>(
        tables: impl IntoIterator<Item = (&'a String, &'a ConditionalTable)>,
    ) -> NominalAttributeClassObserver {
        let mut obs = NominalAttributeClassObserver {
            restored: true,
            ..NominalAttributeClassObserver::default()
        };
        for (class_val, table) in tables {
            obs.weight_per_class.insert(class_val.clone(), 1.0);
            obs.total_weight_observed += 1.0;
            let row = obs
                .attribute_value_distribution_per_class
                .entry(class_val.clone())
                .or_default();
            for (value, p) in table {
                row.insert(value.clone(), *p);
                obs.vocabulary.insert(value.clone());
            }
        }
        obs
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.total_weight_observed
    }
}

impl AttributeClassObserver for NominalAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: &str, class_val: &str, weight: f64) {
        *self
            .weight_per_class
            .entry(class_val.to_string())
            .or_insert(0.0) += weight;
        *self
            .attribute_value_distribution_per_class
            .entry(class_val.to_string())
            .or_default()
            .entry(att_val.to_string())
            .or_insert(0.0) += weight;
        if !self.vocabulary.contains(att_val) {
            self.vocabulary.insert(att_val.to_string());
        }
        self.total_weight_observed += weight;
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: &str,
        class_val: &str,
    ) -> Option<f64> {
        if !self.vocabulary.contains(att_val) {
            return None;
        }
        let class_weight = *self.weight_per_class.get(class_val)?;
        if class_weight <= 0.0 {
            return None;
        }
        let count = self
            .attribute_value_distribution_per_class
            .get(class_val)
            .and_then(|row| row.get(att_val))
            .copied();
        match count {
            Some(count) => Some(count / class_weight),
            None if self.restored => None,
            None => Some(0.0),
        }
    }

    fn conditional_table(&self, class_val: &str) -> ConditionalTable {
        self.vocabulary
            .iter()
            .filter_map(|v| {
                self.probability_of_attribute_value_given_class(v, class_val)
                    .map(|p| (v.clone(), p))
            })
            .collect()
    }

    fn vocabulary(&self) -> Vec<&str> {
        self.vocabulary.iter().map(String::as_str).collect()
    }
}
