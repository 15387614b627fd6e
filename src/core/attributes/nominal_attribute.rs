use crate::core::attributes::{Attribute, AttributeKind};
use std::any::Any;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn contains(&self, v: &str) -> bool {
        self.label_to_index.contains_key(v)
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> AttributeKind {
        AttributeKind::Nominal
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_values_indexes_domain_in_order() {
        let attr = NominalAttribute::with_values(
            "outlook".into(),
            vec!["sunny".into(), "overcast".into(), "rainy".into()],
        );
        assert_eq!(attr.values, vec!["sunny", "overcast", "rainy"]);
        assert!(attr.contains("rainy"));
        assert!(!attr.contains("snowy"));
        assert_eq!(attr.kind(), AttributeKind::Nominal);
    }
}
