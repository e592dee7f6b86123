use std::collections::BTreeMap;

use serde_json::Value;

use super::error::SchemaError;
use super::schema::ResourceSchema;
use super::value::ConfigMap;

/// Schema 注册表
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, ResourceSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// 注册 schema，同名时覆盖并返回 false
    pub fn register(&mut self, name: impl Into<String>, schema: ResourceSchema) -> bool {
        self.schemas.insert(name.into(), schema).is_none()
    }

    pub fn snapshot(&self) -> Vec<(String, ResourceSchema)> {
        self.schemas
            .iter()
            .map(|(name, schema)| (name.clone(), schema.clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<&ResourceSchema, SchemaError> {
        self.schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotRegistered(name.to_string()))
    }

    pub fn decode(&self, name: &str, value: &Value) -> Result<ConfigMap, SchemaError> {
        let schema = self.get(name)?;
        schema.decode(value)
    }

    pub fn validate(&self, name: &str, value: &Value) -> Result<(), SchemaError> {
        self.decode(name, value).map(|_| ())
    }
}
