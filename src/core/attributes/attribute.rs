use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use strum_macros::Display;

pub type AttributeRef = Arc<dyn Attribute + Send + Sync>;

/// Type tag of a column. Selects the likelihood strategy used in training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    Numeric,
    Nominal,
}

pub trait Attribute: Any + Send + Sync {
    fn name(&self) -> String;

    fn kind(&self) -> AttributeKind;

    fn as_any(&self) -> &dyn Any;
}
