use crate::classifiers::attribute_class_observers::{AttributeClassObserver, ConditionalTable};

/// Placeholder for numeric attributes: records nothing and abstains on
/// every query. Swap in a density estimator here to score numeric columns.
#[derive(Debug, Default)]
pub struct NullAttributeClassObserver {}

impl NullAttributeClassObserver {
    pub fn new() -> Self {
        NullAttributeClassObserver {}
    }
}

impl AttributeClassObserver for NullAttributeClassObserver {
    fn observe_attribute_class(&mut self, _att_val: &str, _class_val: &str, _weight: f64) {}

    fn probability_of_attribute_value_given_class(
        &self,
        _att_val: &str,
        _class_val: &str,
    ) -> Option<f64> {
        None
    }

    fn conditional_table(&self, _class_val: &str) -> ConditionalTable {
        ConditionalTable::new()
    }

    fn vocabulary(&self) -> Vec<&str> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstains_after_observations() {
        let mut obs = NullAttributeClassObserver::new();
        obs.observe_attribute_class("71.5", "yes", 1.0);
        assert!(
            obs.probability_of_attribute_value_given_class("71.5", "yes")
                .is_none()
        );
        assert!(obs.conditional_table("yes").is_empty());
        assert!(obs.vocabulary().is_empty());
    }
}
