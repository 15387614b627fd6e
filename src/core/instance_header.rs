use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute};
use std::fmt;

/// Column layout of a source file, in file order, with the class column
/// identified by index.
pub struct InstanceHeader {
    relation_name: String,
    pub attributes: Vec<AttributeRef>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.attributes
            .get(self.class_index)
            .and_then(|a| a.as_any().downcast_ref::<NominalAttribute>())
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.attributes.get(index).map(|a| a.as_ref() as &dyn Attribute)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    /// Non-class attributes, in file order.
    pub fn input_attributes(&self) -> Vec<AttributeRef> {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.class_index)
            .map(|(_, a)| a.clone())
            .collect()
    }
}

impl fmt::Debug for InstanceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHeader")
            .field("relation_name", &self.relation_name)
            .field("class_index", &self.class_index)
            .field("n_attributes", &self.attributes.len())
            .finish()
    }
}
