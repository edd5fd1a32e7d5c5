//! In-memory content source backed by a JSON fixture set.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{CmsError, ContentSource, ObjectPage, ObjectQuery};

/// Serves objects from memory, keyed by object type.
///
/// A type with no entry answers `NotFound`, the same way the CMS does for an
/// empty object type.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    objects: HashMap<String, Vec<Value>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the objects returned for `object_type`.
    pub fn with_objects(mut self, object_type: &str, objects: Vec<Value>) -> Self {
        self.objects.insert(object_type.to_string(), objects);
        self
    }

    /// Parse a `{ "<type>": [objects...] }` document.
    pub fn from_value(value: Value) -> Result<Self, CmsError> {
        let Value::Object(types) = value else {
            return Err(CmsError::Fixture(
                "fixture root must be an object keyed by type".to_string(),
            ));
        };

        let mut source = Self::new();
        for (object_type, objects) in types {
            let Value::Array(objects) = objects else {
                return Err(CmsError::Fixture(format!(
                    "fixture entry '{object_type}' must be an array"
                )));
            };
            source.objects.insert(object_type, objects);
        }
        Ok(source)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CmsError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CmsError::Fixture(format!("{}: {e}", path.display())))?;
        Self::from_value(serde_json::from_str(&raw)?)
    }
}

/// Keep only the requested top-level props of an object.
fn project(object: &Value, props: &[String]) -> Value {
    match object {
        Value::Object(fields) if !props.is_empty() => {
            let kept: Map<String, Value> = fields
                .iter()
                .filter(|(k, _)| props.iter().any(|p| p == *k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            Value::Object(kept)
        }
        other => other.clone(),
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn find_objects(&self, query: &ObjectQuery) -> Result<ObjectPage, CmsError> {
        let objects = self
            .objects
            .get(&query.object_type)
            .filter(|objects| !objects.is_empty())
            .ok_or_else(|| CmsError::NotFound {
                object_type: query.object_type.clone(),
            })?;

        let objects: Vec<Value> = objects.iter().map(|o| project(o, &query.props)).collect();
        let total = objects.len() as u64;

        Ok(ObjectPage {
            objects,
            total,
            limit: None,
            skip: Some(0),
        })
    }
}
