use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::set::StringSet;

/// 通用配置映射：字段名 -> 配置值
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// 经过 schema 解码后的配置值
///
/// 单独反序列化时 JSON 数组总是还原为 `List`；需要 `Set` 时由字段类型决定，
/// 见 `FieldSchema`。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<ConfigValue>),
    Set(StringSet),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&StringSet> {
        match self {
            ConfigValue::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ConfigValue::Bool(value) => json!(value),
            ConfigValue::Int(value) => json!(value),
            ConfigValue::String(value) => json!(value),
            ConfigValue::List(values) => Value::Array(values.iter().map(Self::to_json).collect()),
            ConfigValue::Set(set) => json!(set),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<StringSet> for ConfigValue {
    fn from(set: StringSet) -> Self {
        ConfigValue::Set(set)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(values: Vec<String>) -> Self {
        ConfigValue::List(values.into_iter().map(ConfigValue::String).collect())
    }
}

/// 把配置映射转换成 JSON 对象
pub fn config_to_json(config: &ConfigMap) -> Value {
    Value::Object(
        config
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}
