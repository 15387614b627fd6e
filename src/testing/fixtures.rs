use crate::core::Dataset;
use crate::core::attributes::{AttributeRef, NominalAttribute};
use std::collections::BTreeSet;
use std::sync::Arc;

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Builds an all-nominal dataset whose domains are the distinct values seen
/// in each column. Every row ends with its class label.
pub fn nominal_dataset(attribute_names: &[&str], class_name: &str, rows: &[&[&str]]) -> Dataset {
    let attributes: Vec<AttributeRef> = attribute_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let domain: BTreeSet<String> = rows.iter().map(|r| r[i].to_string()).collect();
            Arc::new(NominalAttribute::with_values(
                name.to_string(),
                domain.into_iter().collect(),
            )) as AttributeRef
        })
        .collect();

    let instances = rows.iter().map(|r| strings(r)).collect();

    Dataset::new(
        "fixture".to_string(),
        attributes,
        class_name.to_string(),
        instances,
    )
    .expect("fixture rows must match the attribute list")
}
