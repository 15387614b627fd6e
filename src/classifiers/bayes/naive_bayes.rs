//! Frequency-count naive Bayes over nominal attributes.
//!
//! The posterior of a class is `P(c) * Π P(x_i | c)`, left unnormalized.
//! An attribute value absent from the trained tables contributes a factor of
//! `1` instead of `0`. This is a Laplace-free smoothing heuristic, not a
//! probability model: a class can keep its full prior while others are
//! penalized, and scores are only meaningful for ranking classes against
//! each other. Numeric attributes also contribute `1` until they gain a real
//! likelihood observer.

use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, ConditionalTable, NominalAttributeClassObserver,
    NullAttributeClassObserver, observer_for_kind,
};
use crate::classifiers::classifier::Classifier;
use crate::core::Dataset;
use crate::core::attributes::AttributeKind;
use crate::error::{BayesError, Result};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Neutral factor used when an observer has no estimate for a value.
const NEUTRAL_SCORE: f64 = 1.0;

#[derive(Default)]
pub struct NaiveBayes {
    relation_name: String,
    class_name: String,
    labels: Vec<String>,
    types: Vec<AttributeKind>,
    observed_class_distribution: BTreeMap<String, f64>,
    total_weight_observed: f64,
    attribute_observers: Vec<Box<dyn AttributeClassObserver>>,
}

impl fmt::Debug for NaiveBayes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayes")
            .field("relation_name", &self.relation_name)
            .field("class_name", &self.class_name)
            .field("labels", &self.labels)
            .field("types", &self.types)
            .field("observed_class_distribution", &self.observed_class_distribution)
            .field("total_weight_observed", &self.total_weight_observed)
            .field("n_attribute_observers", &self.attribute_observers.len())
            .finish()
    }
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a trained model from its probability tables.
    ///
    /// `inverse[c]` must hold one table per attribute. Tables of numeric
    /// attributes are ignored.
    pub fn from_tables(
        relation_name: String,
        class_name: String,
        labels: Vec<String>,
        types: Vec<AttributeKind>,
        prior: BTreeMap<String, f64>,
        inverse: BTreeMap<String, Vec<ConditionalTable>>,
    ) -> Result<Self> {
        if labels.len() != types.len() {
            return Err(BayesError::mismatch(format!(
                "{} attribute labels but {} attribute types",
                labels.len(),
                types.len()
            )));
        }
        if !prior.keys().eq(inverse.keys()) {
            return Err(BayesError::mismatch(
                "prior and conditional tables cover different classes",
            ));
        }
        if let Some((class_val, tables)) = inverse.iter().find(|(_, t)| t.len() != labels.len()) {
            return Err(BayesError::mismatch(format!(
                "class '{class_val}' has {} conditional tables, expected {}",
                tables.len(),
                labels.len()
            )));
        }

        let attribute_observers = types
            .iter()
            .enumerate()
            .map(|(i, kind)| -> Box<dyn AttributeClassObserver> {
                match kind {
                    AttributeKind::Nominal => Box::new(NominalAttributeClassObserver::from_tables(
                        inverse.iter().map(|(c, tables)| (c, &tables[i])),
                    )),
                    AttributeKind::Numeric => Box::new(NullAttributeClassObserver::new()),
                }
            })
            .collect();

        Ok(Self {
            relation_name,
            class_name,
            labels,
            types,
            observed_class_distribution: prior,
            total_weight_observed: 1.0,
            attribute_observers,
        })
    }

    /// Estimates priors and conditional tables from `dataset`, replacing any
    /// previous model.
    pub fn train(&mut self, dataset: &Dataset) -> Result<()> {
        if dataset.is_empty() {
            return Err(BayesError::EmptyDataset);
        }

        self.relation_name = dataset.relation_name().to_string();
        self.class_name = dataset.class_name().to_string();
        self.labels = dataset.attribute_names();
        self.types = dataset.attribute_types();
        self.observed_class_distribution.clear();
        self.total_weight_observed = 0.0;
        self.attribute_observers = self.types.iter().map(|k| observer_for_kind(*k)).collect();

        for (values, class_val) in dataset.rows() {
            *self
                .observed_class_distribution
                .entry(class_val.to_string())
                .or_insert(0.0) += 1.0;
            self.total_weight_observed += 1.0;

            for (obs, value) in self.attribute_observers.iter_mut().zip(values) {
                obs.observe_attribute_class(value, class_val, 1.0);
            }
        }

        info!(
            relation = %self.relation_name,
            instances = dataset.len(),
            attributes = self.labels.len(),
            classes = self.observed_class_distribution.len(),
            "trained naive bayes model"
        );
        Ok(())
    }

    pub fn is_trained(&self) -> bool {
        !self.observed_class_distribution.is_empty()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn attribute_types(&self) -> &[AttributeKind] {
        &self.types
    }

    pub fn prior_of(&self, class_val: &str) -> Option<f64> {
        if self.total_weight_observed <= 0.0 {
            return None;
        }
        self.observed_class_distribution
            .get(class_val)
            .map(|w| w / self.total_weight_observed)
    }

    pub fn prior(&self) -> BTreeMap<String, f64> {
        self.observed_class_distribution
            .keys()
            .filter_map(|c| self.prior_of(c).map(|p| (c.clone(), p)))
            .collect()
    }

    /// P(value | class) for attribute `att_index`, keyed by the attribute's
    /// vocabulary. Empty for numeric attributes.
    pub fn inverse_of(&self, class_val: &str, att_index: usize) -> ConditionalTable {
        self.attribute_observers
            .get(att_index)
            .map(|obs| obs.conditional_table(class_val))
            .unwrap_or_default()
    }

    pub fn inverse(&self) -> BTreeMap<String, Vec<ConditionalTable>> {
        self.observed_class_distribution
            .keys()
            .map(|c| {
                let tables = (0..self.attribute_observers.len())
                    .map(|i| self.inverse_of(c, i))
                    .collect();
                (c.clone(), tables)
            })
            .collect()
    }

    /// Values seen for attribute `att_index` during training.
    pub fn vocabulary(&self, att_index: usize) -> Vec<&str> {
        self.attribute_observers
            .get(att_index)
            .map(|obs| obs.vocabulary())
            .unwrap_or_default()
    }

    pub fn posterior(&self, values: &[String], class_val: &str) -> Result<f64> {
        self.check_arity(values)?;
        Ok(self.score(values, class_val))
    }

    fn check_arity(&self, values: &[String]) -> Result<()> {
        if values.len() != self.labels.len() {
            return Err(BayesError::mismatch(format!(
                "instance has {} values, model expects {}",
                values.len(),
                self.labels.len()
            )));
        }
        Ok(())
    }

    fn score(&self, values: &[String], class_val: &str) -> f64 {
        let Some(prior) = self.prior_of(class_val) else {
            return 0.0;
        };

        self.attribute_observers
            .iter()
            .zip(values)
            .fold(prior, |acc, (obs, value)| {
                let p = obs
                    .probability_of_attribute_value_given_class(value, class_val)
                    .unwrap_or(NEUTRAL_SCORE);
                acc * p
            })
    }
}

impl Classifier for NaiveBayes {
    fn class_values(&self) -> Vec<String> {
        self.observed_class_distribution.keys().cloned().collect()
    }

    fn attribute_labels(&self) -> &[String] {
        &self.labels
    }

    fn get_votes_for_instance(&self, values: &[String]) -> Result<Vec<(String, f64)>> {
        if !self.is_trained() {
            return Ok(Vec::new());
        }
        self.check_arity(values)?;

        let votes: Vec<(String, f64)> = self
            .observed_class_distribution
            .keys()
            .map(|c| (c.clone(), self.score(values, c)))
            .collect();
        debug!(?values, ?votes, "scored instance");
        Ok(votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::Prediction;
    use crate::testing::fixtures::{nominal_dataset, strings};

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn weather() -> Dataset {
        nominal_dataset(
            &["outlook"],
            "play",
            &[
                &["sunny", "play"],
                &["sunny", "play"],
                &["rainy", "no_play"],
                &["rainy", "no_play"],
            ],
        )
    }

    fn trained(ds: &Dataset) -> NaiveBayes {
        let mut nb = NaiveBayes::new();
        nb.train(ds).unwrap();
        nb
    }

    #[test]
    fn priors_and_tables_for_binary_attribute() {
        let nb = trained(&weather());

        assert!(approx(nb.prior_of("play").unwrap(), 0.5, EPS));
        let table = nb.inverse_of("play", 0);
        assert!(approx(table["sunny"], 1.0, EPS));
        assert!(approx(table["rainy"], 0.0, EPS));

        let p = nb.classify(&strings(&["sunny"])).unwrap();
        assert_eq!(p, Prediction::Class("play".into()));
    }

    #[test]
    fn unseen_value_scores_prior_and_ties_to_first_class() {
        let nb = trained(&weather());
        let cloudy = strings(&["cloudy"]);

        assert!(approx(nb.posterior(&cloudy, "play").unwrap(), 0.5, EPS));
        assert!(approx(nb.posterior(&cloudy, "no_play").unwrap(), 0.5, EPS));
        assert_eq!(
            nb.classify(&cloudy).unwrap(),
            Prediction::Class("no_play".into())
        );
    }

    #[test]
    fn priors_and_conditionals_sum_to_one() {
        let ds = nominal_dataset(
            &["outlook", "windy"],
            "play",
            &[
                &["sunny", "true", "no"],
                &["sunny", "false", "no"],
                &["overcast", "false", "yes"],
                &["rainy", "false", "yes"],
                &["rainy", "true", "no"],
                &["overcast", "true", "yes"],
                &["sunny", "false", "yes"],
            ],
        );
        let nb = trained(&ds);

        let prior_sum: f64 = nb.prior().values().sum();
        assert!(approx(prior_sum, 1.0, EPS));

        for (class_val, tables) in nb.inverse() {
            for (i, table) in tables.iter().enumerate() {
                assert_eq!(table.len(), ds.vocabulary(i).len());
                let sum: f64 = table.values().sum();
                assert!(approx(sum, 1.0, EPS), "class {class_val} attr {i}");
            }
        }
    }

    #[test]
    fn retraining_is_idempotent() {
        let ds = weather();
        let mut nb = NaiveBayes::new();
        nb.train(&ds).unwrap();
        let (prior, inverse) = (nb.prior(), nb.inverse());
        nb.train(&ds).unwrap();
        assert_eq!(nb.prior(), prior);
        assert_eq!(nb.inverse(), inverse);
    }

    #[test]
    fn classification_is_deterministic() {
        let nb = trained(&weather());
        let x = strings(&["rainy"]);
        let first = nb.classify(&x).unwrap();
        for _ in 0..5 {
            assert_eq!(nb.classify(&x).unwrap(), first);
        }
        assert_eq!(first.label(), Some("no_play"));
    }

    #[test]
    fn empty_dataset_is_reported() {
        let ds = nominal_dataset(&["outlook"], "play", &[]);
        let mut nb = NaiveBayes::new();
        assert!(matches!(nb.train(&ds), Err(BayesError::EmptyDataset)));
        assert!(!nb.is_trained());
    }

    #[test]
    fn untrained_model_is_undetermined() {
        let nb = NaiveBayes::new();
        assert!(nb.classify(&strings(&["sunny"])).unwrap().is_undetermined());
        assert!(nb.classify(&[]).unwrap().is_undetermined());
    }

    #[test]
    fn all_zero_posteriors_are_undetermined() {
        let ds = nominal_dataset(
            &["a", "b"],
            "c",
            &[&["x", "p", "one"], &["y", "q", "two"]],
        );
        let nb = trained(&ds);
        let p = nb.classify(&strings(&["x", "q"])).unwrap();
        assert!(p.is_undetermined());
    }

    #[test]
    fn wrong_arity_is_a_mismatch() {
        let nb = trained(&weather());
        let err = nb.classify(&strings(&["sunny", "hot"])).unwrap_err();
        assert!(matches!(err, BayesError::VocabularyMismatch(_)));
    }

    #[test]
    fn numeric_attributes_are_neutral() {
        use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
        use std::sync::Arc;

        let attrs: Vec<AttributeRef> = vec![
            Arc::new(NumericAttribute::new("temp".into())),
            Arc::new(NominalAttribute::with_values(
                "outlook".into(),
                strings(&["sunny", "rainy"]),
            )),
        ];
        let ds = Dataset::new(
            "w".into(),
            attrs,
            "play".into(),
            vec![
                strings(&["80", "sunny", "yes"]),
                strings(&["60", "rainy", "no"]),
                strings(&["65", "sunny", "yes"]),
            ],
        )
        .unwrap();
        let nb = trained(&ds);

        assert!(nb.inverse_of("yes", 0).is_empty());
        let post = nb.posterior(&strings(&["80", "sunny"]), "yes").unwrap();
        assert!(approx(post, 2.0 / 3.0, EPS));
        let post = nb.posterior(&strings(&["-5", "sunny"]), "yes").unwrap();
        assert!(approx(post, 2.0 / 3.0, EPS));
    }

    #[test]
    fn from_tables_round_trips_trained_model() {
        let nb = trained(&weather());
        let restored = NaiveBayes::from_tables(
            nb.relation_name().to_string(),
            nb.class_name().to_string(),
            nb.attribute_labels().to_vec(),
            nb.attribute_types().to_vec(),
            nb.prior(),
            nb.inverse(),
        )
        .unwrap();

        assert_eq!(restored.prior(), nb.prior());
        assert_eq!(restored.inverse(), nb.inverse());
        for x in ["sunny", "rainy", "cloudy"] {
            let x = strings(&[x]);
            assert_eq!(restored.classify(&x).unwrap(), nb.classify(&x).unwrap());
        }
    }

    #[test]
    fn restored_keys_missing_under_a_class_score_neutral() {
        let prior = BTreeMap::from([("no_play".to_string(), 0.5), ("play".to_string(), 0.5)]);
        let inverse = BTreeMap::from([
            (
                "no_play".to_string(),
                vec![ConditionalTable::from([("rainy".to_string(), 1.0)])],
            ),
            (
                "play".to_string(),
                vec![ConditionalTable::from([("sunny".to_string(), 1.0)])],
            ),
        ]);
        let nb = NaiveBayes::from_tables(
            "w".into(),
            "play".into(),
            strings(&["outlook"]),
            vec![AttributeKind::Nominal],
            prior,
            inverse.clone(),
        )
        .unwrap();

        let rainy = strings(&["rainy"]);
        assert!(approx(nb.posterior(&rainy, "play").unwrap(), 0.5, EPS));
        assert!(approx(nb.posterior(&rainy, "no_play").unwrap(), 0.5, EPS));
        assert_eq!(nb.inverse_of("play", 0), inverse["play"][0]);
        assert_eq!(nb.inverse(), inverse);
    }

    #[test]
    fn from_tables_rejects_inconsistent_shapes() {
        let nb = trained(&weather());
        let err = NaiveBayes::from_tables(
            "w".into(),
            "play".into(),
            strings(&["outlook", "windy"]),
            vec![AttributeKind::Nominal, AttributeKind::Nominal],
            nb.prior(),
            nb.inverse(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, BayesError::VocabularyMismatch(_)));

        let mut prior = nb.prior();
        prior.insert("maybe".into(), 0.0);
        let err = NaiveBayes::from_tables(
            "w".into(),
            "play".into(),
            strings(&["outlook"]),
            vec![AttributeKind::Nominal],
            prior,
            nb.inverse(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, BayesError::VocabularyMismatch(_)));
    }

    #[test]
    fn vocabulary_lists_training_values() {
        let nb = trained(&weather());
        assert_eq!(nb.vocabulary(0), vec!["rainy", "sunny"]);
        assert!(nb.vocabulary(3).is_empty());
    }
}
