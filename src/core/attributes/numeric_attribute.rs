use crate::core::attributes::{Attribute, AttributeKind};
use std::any::Any;

#[derive(Clone, Debug)]
pub struct NumericAttribute {
    pub name: String,
}

impl NumericAttribute {
    pub fn new(name: String) -> NumericAttribute {
        NumericAttribute { name }
    }
}

impl Attribute for NumericAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> AttributeKind {
        AttributeKind::Numeric
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
