use crate::classifiers::{Classifier, NaiveBayes, Prediction};
use crate::core::attributes::AttributeKind;
use crate::error::{BayesError, Result};
use crate::ui::cli::drivers::PromptDriver;

/// A single instance to classify, checked against the attribute list of
/// the classifier it is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRequest {
    values: Vec<String>,
}

impl CaseRequest {
    pub fn new(labels: &[String], values: Vec<String>) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(BayesError::MalformedCase {
                expected: labels.len(),
                got: values.len(),
            });
        }
        Ok(CaseRequest { values })
    }

    pub fn for_classifier(classifier: &dyn Classifier, values: Vec<String>) -> Result<Self> {
        CaseRequest::new(classifier.attribute_labels(), values)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn classify(&self, classifier: &dyn Classifier) -> Result<Prediction> {
        if self.values.len() != classifier.attribute_labels().len() {
            return Err(BayesError::MalformedCase {
                expected: classifier.attribute_labels().len(),
                got: self.values.len(),
            });
        }
        classifier.classify(&self.values)
    }
}

/// Asks for one value per model attribute, in order.
pub fn prompt_case<D: PromptDriver>(driver: &D, model: &NaiveBayes) -> anyhow::Result<CaseRequest> {
    let mut values = Vec::with_capacity(model.attribute_labels().len());

    for (i, label) in model.attribute_labels().iter().enumerate() {
        let help = match model.attribute_types().get(i) {
            Some(AttributeKind::Numeric) => "numeric, not used for scoring".to_string(),
            _ => {
                let known = model.vocabulary(i);
                if known.is_empty() {
                    String::new()
                } else {
                    format!("known values: {}", known.join(", "))
                }
            }
        };
        let answer = driver.ask_string(label, &help, "")?;
        values.push(answer.trim().to_string());
    }

    Ok(CaseRequest::for_classifier(model, values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{nominal_dataset, strings};
    use crate::testing::stubs::ScriptedDriver;

    fn model() -> NaiveBayes {
        let ds = nominal_dataset(
            &["outlook", "windy"],
            "play",
            &[
                &["sunny", "no", "yes"],
                &["rainy", "yes", "no"],
                &["sunny", "yes", "yes"],
            ],
        );
        let mut nb = NaiveBayes::new();
        nb.train(&ds).unwrap();
        nb
    }

    #[test]
    fn short_case_is_malformed() {
        let err = CaseRequest::for_classifier(&model(), strings(&["sunny"])).unwrap_err();
        match err {
            BayesError::MalformedCase { expected, got } => {
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected malformed case, got {other:?}"),
        }
    }

    #[test]
    fn long_case_is_malformed() {
        let labels = strings(&["a"]);
        let err = CaseRequest::new(&labels, strings(&["x", "y"])).unwrap_err();
        assert!(matches!(err, BayesError::MalformedCase { expected: 1, got: 2 }));
    }

    #[test]
    fn valid_case_classifies() {
        let nb = model();
        let case = CaseRequest::for_classifier(&nb, strings(&["rainy", "yes"])).unwrap();
        assert_eq!(case.classify(&nb).unwrap(), Prediction::Class("no".into()));
    }

    #[test]
    fn values_are_not_coerced() {
        let labels = strings(&["temperature"]);
        let case = CaseRequest::new(&labels, strings(&["  71 "])).unwrap();
        assert_eq!(case.values(), &["  71 ".to_string()]);
    }

    #[test]
    fn case_built_for_another_model_is_malformed_at_dispatch() {
        let labels = strings(&["a", "b", "c"]);
        let case = CaseRequest::new(&labels, strings(&["x", "y", "z"])).unwrap();
        assert!(matches!(
            case.classify(&model()),
            Err(BayesError::MalformedCase { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn prompt_case_asks_each_attribute_in_order() {
        let nb = model();
        let driver = ScriptedDriver::new().answer(" sunny ").answer("no");
        let case = prompt_case(&driver, &nb).unwrap();
        assert_eq!(case.values(), strings(&["sunny", "no"]).as_slice());

        let asked = driver.asked();
        assert_eq!(asked.len(), 2);
        assert_eq!(asked[0].0, "outlook");
        assert_eq!(asked[0].1, "known values: rainy, sunny");
        assert_eq!(asked[1].0, "windy");
    }
}
