mod attribute_class_observer;
mod nominal_attribute_class_observer;
mod null_attribute_class_observer;

pub use attribute_class_observer::{AttributeClassObserver, ConditionalTable};
pub use nominal_attribute_class_observer::NominalAttributeClassObserver;
pub use null_attribute_class_observer::NullAttributeClassObserver;

use crate::core::attributes::AttributeKind;

/// Likelihood strategy for a column of the given kind.
pub fn observer_for_kind(kind: AttributeKind) -> Box<dyn AttributeClassObserver> {
    match kind {
        AttributeKind::Nominal => Box::new(NominalAttributeClassObserver::new()),
        AttributeKind::Numeric => Box::new(NullAttributeClassObserver::new()),
    }
}
