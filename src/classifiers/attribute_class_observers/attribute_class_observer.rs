use std::collections::BTreeMap;

/// value -> P(value | class) for one (attribute, class) pair.
pub type ConditionalTable = BTreeMap<String, f64>;

pub trait AttributeClassObserver: Send + Sync {
    fn observe_attribute_class(&mut self, att_val: &str, class_val: &str, weight: f64);

    /// `None` when the observer holds no evidence about `att_val` for
    /// `class_val`; the caller scores that as a neutral factor.
    fn probability_of_attribute_value_given_class(
        &self,
        att_val: &str,
        class_val: &str,
    ) -> Option<f64>;

    fn conditional_table(&self, class_val: &str) -> ConditionalTable;

    fn vocabulary(&self) -> Vec<&str>;
}
