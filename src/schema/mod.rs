//! 通用配置 schema：字段描述、校验器、默认值与解码

pub mod error;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod set;
pub mod validation;
pub mod value;

use std::sync::{Mutex, OnceLock};

use serde_json::Value;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use schema::{FieldSchema, FieldType, ResourceSchema};
pub use set::{hash_string, StringSet};
pub use validation::{decode_config, Validator};
pub use value::{config_to_json, ConfigMap, ConfigValue};

static REGISTRY: OnceLock<Mutex<SchemaRegistry>> = OnceLock::new();

pub fn registry() -> &'static Mutex<SchemaRegistry> {
    REGISTRY.get_or_init(|| Mutex::new(SchemaRegistry::new()))
}

pub fn register_schema(name: impl Into<String>, schema: ResourceSchema) {
    if let Ok(mut guard) = registry().lock() {
        guard.register(name, schema);
    } else {
        tracing::warn!("failed to acquire schema registry lock");
    }
}

pub fn registered_schema(name: &str) -> Result<ResourceSchema, SchemaError> {
    let guard = registry().lock().map_err(|_| SchemaError::RegistryPoisoned)?;
    guard.get(name).cloned()
}

pub fn validate_schema(name: &str, value: &Value) -> Result<(), SchemaError> {
    if let Ok(guard) = registry().lock() {
        guard.validate(name, value)
    } else {
        Err(SchemaError::RegistryPoisoned)
    }
}

pub fn schemas_snapshot() -> Vec<(String, ResourceSchema)> {
    if let Ok(guard) = registry().lock() {
        guard.snapshot()
    } else {
        Vec::new()
    }
}
