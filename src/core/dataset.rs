use crate::core::attributes::{AttributeKind, AttributeRef};
use crate::core::instance_header::InstanceHeader;
use crate::error::{BayesError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// An in-memory labeled table. Every row holds one value per attribute
/// followed by the class label.
#[derive(Clone)]
pub struct Dataset {
    relation_name: String,
    attributes: Vec<AttributeRef>,
    class_name: String,
    instances: Vec<Vec<String>>,
    class_values: BTreeSet<String>,
}

impl Dataset {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_name: String,
        instances: Vec<Vec<String>>,
    ) -> Result<Dataset> {
        let width = attributes.len() + 1;
        if let Some((i, row)) = instances
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(BayesError::mismatch(format!(
                "row {i} has {} values, expected {width}",
                row.len()
            )));
        }

        let class_values = instances
            .iter()
            .filter_map(|row| row.last().cloned())
            .collect();

        Ok(Dataset {
            relation_name,
            attributes,
            class_name,
            instances,
            class_values,
        })
    }

    /// Builds a dataset from rows laid out as in `header`, moving the class
    /// column to the end of every row.
    pub fn from_header(header: &InstanceHeader, rows: Vec<Vec<String>>) -> Result<Dataset> {
        let class_index = header.class_index();
        let class_name = header
            .attribute_at_index(class_index)
            .map(|a| a.name())
            .ok_or_else(|| {
                BayesError::mismatch(format!(
                    "class index {class_index} out of range for {} attributes",
                    header.number_of_attributes()
                ))
            })?;

        let last = header.number_of_attributes() - 1;
        let instances = rows
            .into_iter()
            .map(|mut row| {
                if class_index != last && class_index < row.len() {
                    let label = row.remove(class_index);
                    row.push(label);
                }
                row
            })
            .collect();

        Dataset::new(
            header.relation_name().to_string(),
            header.input_attributes(),
            class_name,
            instances,
        )
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name()).collect()
    }

    pub fn attribute_types(&self) -> Vec<AttributeKind> {
        self.attributes.iter().map(|a| a.kind()).collect()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn class_values(&self) -> &BTreeSet<String> {
        &self.class_values
    }

    pub fn instances(&self) -> &[Vec<String>] {
        &self.instances
    }

    /// Rows split into (attribute values, class label).
    pub fn rows(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.instances.iter().filter_map(|row| {
            row.split_last()
                .map(|(label, values)| (values, label.as_str()))
        })
    }

    /// Distinct values seen in column `index` across all rows.
    pub fn vocabulary(&self, index: usize) -> BTreeSet<&str> {
        self.instances
            .iter()
            .filter_map(|row| row.get(index).map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("relation_name", &self.relation_name)
            .field("attributes", &self.attribute_names())
            .field("class_name", &self.class_name)
            .field("n_instances", &self.instances.len())
            .field("class_values", &self.class_values)
            .finish()
    }
}
