use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SchemaError;
use super::validation::{decode_config, Validator};
use super::value::{ConfigMap, ConfigValue};

/// 字段类型枚举
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FieldType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "list")]
    List { elem: Box<FieldSchema> },
    #[serde(rename = "set")]
    Set { elem: Box<FieldSchema> },
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::String => "string",
            FieldType::List { .. } => "list",
            FieldType::Set { .. } => "set",
        }
    }
}

/// 单个字段的描述
///
/// 反序列化时按字段类型还原默认值：JSON 数组对 set 字段还原为 `ConfigValue::Set`。
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(from = "FieldSchemaRepr")]
pub struct FieldSchema {
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

#[derive(Deserialize)]
struct FieldSchemaRepr {
    #[serde(flatten)]
    field_type: FieldType,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    default: Option<ConfigValue>,
    #[serde(default)]
    min_items: Option<usize>,
    #[serde(default)]
    validator: Option<Validator>,
}

impl From<FieldSchemaRepr> for FieldSchema {
    fn from(repr: FieldSchemaRepr) -> Self {
        let default = repr.default.map(|value| match (&repr.field_type, value) {
            (FieldType::Set { .. }, ConfigValue::List(items))
                if items.iter().all(|item| item.as_str().is_some()) =>
            {
                let set = items
                    .into_iter()
                    .filter_map(|item| match item {
                        ConfigValue::String(text) => Some(text),
                        _ => None,
                    })
                    .collect();
                ConfigValue::Set(set)
            }
            (_, value) => value,
        });

        Self {
            field_type: repr.field_type,
            required: repr.required,
            optional: repr.optional,
            default,
            min_items: repr.min_items,
            validator: repr.validator,
        }
    }
}

impl FieldSchema {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            optional: false,
            default: None,
            min_items: None,
            validator: None,
        }
    }

    pub fn bool() -> Self {
        Self::new(FieldType::Bool)
    }

    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    pub fn list(elem: FieldSchema) -> Self {
        Self::new(FieldType::List {
            elem: Box::new(elem),
        })
    }

    pub fn set(elem: FieldSchema) -> Self {
        Self::new(FieldType::Set {
            elem: Box::new(elem),
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn with_default(mut self, default: impl Into<ConfigValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// 一个配置块的 schema 定义
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: BTreeMap<String, FieldSchema>,
}

impl ResourceSchema {
    pub fn new() -> Self {
        Self {
            name: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(name.into(), schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn decode(&self, value: &Value) -> Result<ConfigMap, SchemaError> {
        decode_config(self, value)
    }
}
