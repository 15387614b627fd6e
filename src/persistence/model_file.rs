use crate::classifiers::attribute_class_observers::ConditionalTable;
use crate::classifiers::{Classifier, NaiveBayes};
use crate::core::attributes::AttributeKind;
use crate::error::{BayesError, Result};
use chrono::{SecondsFormat, Utc};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MODEL_FORMAT_VERSION: u32 = 1;

/// On-disk shape of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelFile {
    #[schemars(title = "Format Version", description = "Layout version of this file")]
    pub format_version: u32,

    #[schemars(title = "Relation", description = "Relation name of the training dataset")]
    pub relation_name: String,

    #[schemars(title = "Class", description = "Name of the class attribute")]
    pub class_name: String,

    #[serde(default)]
    #[schemars(title = "Trained At", description = "RFC 3339 timestamp of when the file was written")]
    pub trained_at: Option<String>,

    #[schemars(title = "Labels", description = "Attribute names, in instance order")]
    pub labels: Vec<String>,

    #[schemars(title = "Types", description = "Attribute kinds, parallel to labels")]
    pub types: Vec<AttributeKind>,

    #[schemars(title = "Prior", description = "P(class) per class label")]
    pub prior: BTreeMap<String, f64>,

    #[schemars(
        title = "Inverse",
        description = "Per class, one table per attribute mapping value to P(value | class)"
    )]
    pub inverse: BTreeMap<String, Vec<ConditionalTable>>,
}

impl ModelFile {
    pub fn from_model(model: &NaiveBayes) -> Self {
        ModelFile {
            format_version: MODEL_FORMAT_VERSION,
            relation_name: model.relation_name().to_string(),
            class_name: model.class_name().to_string(),
            trained_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            labels: model.attribute_labels().to_vec(),
            types: model.attribute_types().to_vec(),
            prior: model.prior(),
            inverse: model.inverse(),
        }
    }

    pub fn into_model(self) -> Result<NaiveBayes> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(BayesError::mismatch(format!(
                "model format version {} is not supported (expected {MODEL_FORMAT_VERSION})",
                self.format_version
            )));
        }
        NaiveBayes::from_tables(
            self.relation_name,
            self.class_name,
            self.labels,
            self.types,
            self.prior,
            self.inverse,
        )
    }

    pub fn schema() -> Schema {
        schema_for!(ModelFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{nominal_dataset, strings};
    use serde_json::{Value, json};

    fn weather_model() -> NaiveBayes {
        let ds = nominal_dataset(
            &["outlook"],
            "play",
            &[&["sunny", "play"], &["rainy", "no_play"], &["sunny", "play"]],
        );
        let mut nb = NaiveBayes::new();
        nb.train(&ds).unwrap();
        nb
    }

    #[test]
    fn serializes_as_mapping_of_mappings() {
        let file = ModelFile::from_model(&weather_model());
        let v = serde_json::to_value(&file).unwrap();

        assert_eq!(v["format_version"], json!(1));
        assert_eq!(v["types"], json!(["nominal"]));
        assert_eq!(v["inverse"]["play"][0]["sunny"], json!(1.0));
        assert_eq!(v["inverse"]["play"][0]["rainy"], json!(0.0));
        assert!(v["trained_at"].is_string());
    }

    #[test]
    fn round_trips_through_json() {
        let nb = weather_model();
        let file = ModelFile::from_model(&nb);
        let text = serde_json::to_string(&file).unwrap();
        let back: ModelFile = serde_json::from_str(&text).unwrap();
        assert_eq!(back, file);

        let restored = back.into_model().unwrap();
        assert_eq!(restored.prior(), nb.prior());
        assert_eq!(restored.inverse(), nb.inverse());
        assert_eq!(
            restored.classify(&strings(&["rainy"])).unwrap(),
            nb.classify(&strings(&["rainy"])).unwrap()
        );
    }

    #[test]
    fn rejects_unknown_format_version() {
        let mut file = ModelFile::from_model(&weather_model());
        file.format_version = 99;
        assert!(matches!(
            file.into_model(),
            Err(BayesError::VocabularyMismatch(_))
        ));
    }

    #[test]
    fn trained_at_is_optional() {
        let v = json!({
            "format_version": 1,
            "relation_name": "r",
            "class_name": "c",
            "labels": [],
            "types": [],
            "prior": {"a": 1.0},
            "inverse": {"a": []}
        });
        let file: ModelFile = serde_json::from_value(v).unwrap();
        assert!(file.trained_at.is_none());
        let nb = file.into_model().unwrap();
        assert_eq!(nb.class_values(), vec!["a"]);
    }

    #[test]
    fn schema_describes_every_field() {
        let v: Value = serde_json::to_value(ModelFile::schema()).unwrap();
        let props = v["properties"].as_object().expect("properties");
        for key in [
            "format_version",
            "relation_name",
            "class_name",
            "trained_at",
            "labels",
            "types",
            "prior",
            "inverse",
        ] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }
}
