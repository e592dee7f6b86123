use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SchemaError;
use super::schema::{FieldSchema, FieldType, ResourceSchema};
use super::set::StringSet;
use super::value::{ConfigMap, ConfigValue};

/// 附加在字段上的取值校验
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    StringInSlice {
        values: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },
    StringIsNotWhiteSpace,
}

impl Validator {
    pub fn string_in_slice<I, S>(values: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::StringInSlice {
            values: values.into_iter().map(Into::into).collect(),
            ignore_case,
        }
    }

    pub fn string_is_not_white_space() -> Self {
        Validator::StringIsNotWhiteSpace
    }

    pub fn check(&self, value: &ConfigValue, path: &[String]) -> Result<(), SchemaError> {
        let key = path.join(".");
        let text = value
            .as_str()
            .ok_or_else(|| SchemaError::validation(format!("expected type of {key} to be string"), path))?;

        match self {
            Validator::StringInSlice {
                values,
                ignore_case,
            } => {
                let found = values.iter().any(|candidate| {
                    if *ignore_case {
                        candidate.eq_ignore_ascii_case(text)
                    } else {
                        candidate == text
                    }
                });
                if !found {
                    return Err(SchemaError::validation(
                        format!("expected {key} to be one of {values:?}, got {text}"),
                        path,
                    ));
                }
            }
            Validator::StringIsNotWhiteSpace => {
                if text.trim().is_empty() {
                    return Err(SchemaError::validation(
                        format!("expected {key:?} to not be an empty string or whitespace"),
                        path,
                    ));
                }
            }
        }

        Ok(())
    }
}

/// 按 schema 解码并校验一个原始配置对象
///
/// 未知字段、缺失的必填字段、类型不符、元素数量不足或校验失败都会返回
/// `SchemaError::Validation`，并附带出错字段的路径。可选字段缺失时填入默认值，
/// 没有默认值则保持缺失；`null` 视为缺失。
pub fn decode_config(schema: &ResourceSchema, value: &Value) -> Result<ConfigMap, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::validation("expected object", &[]))?;

    for key in object.keys() {
        if !schema.fields.contains_key(key) {
            return Err(SchemaError::validation(
                format!("unexpected property `{key}`"),
                &[key.clone()],
            ));
        }
    }

    let mut config = ConfigMap::new();
    let mut path = Vec::new();
    for (name, field) in &schema.fields {
        path.push(name.clone());
        match object.get(name).filter(|raw| !raw.is_null()) {
            Some(raw) => {
                let decoded = decode_value(field, raw, &mut path)?;
                config.insert(name.clone(), decoded);
            }
            None if field.required => {
                return Err(SchemaError::validation(
                    format!("missing required property `{name}`"),
                    &path,
                ));
            }
            None => {
                if let Some(default) = &field.default {
                    config.insert(name.clone(), default.clone());
                }
            }
        }
        path.pop();
    }

    Ok(config)
}

fn decode_value(
    field: &FieldSchema,
    raw: &Value,
    path: &mut Vec<String>,
) -> Result<ConfigValue, SchemaError> {
    let expected = || SchemaError::validation(format!("expected {}", field.field_type.name()), path);
    let value = match &field.field_type {
        FieldType::Bool => raw
            .as_bool()
            .map(ConfigValue::Bool)
            .ok_or_else(expected)?,
        FieldType::Int => raw
            .as_i64()
            .map(ConfigValue::Int)
            .ok_or_else(expected)?,
        FieldType::String => raw
            .as_str()
            .map(|text| ConfigValue::String(text.to_string()))
            .ok_or_else(expected)?,
        FieldType::List { elem } => {
            let array = raw
                .as_array()
                .ok_or_else(expected)?;
            check_min_items(field, array.len(), path)?;

            let mut items = Vec::with_capacity(array.len());
            for (idx, element) in array.iter().enumerate() {
                path.push(idx.to_string());
                items.push(decode_value(elem, element, path)?);
                path.pop();
            }
            ConfigValue::List(items)
        }
        FieldType::Set { elem } => {
            let array = raw
                .as_array()
                .ok_or_else(expected)?;

            let mut set = StringSet::new();
            for (idx, element) in array.iter().enumerate() {
                path.push(idx.to_string());
                match decode_value(elem, element, path)? {
                    ConfigValue::String(text) => {
                        set.insert(text);
                    }
                    other => {
                        return Err(SchemaError::validation(
                            format!("set elements must be strings, got {other:?}"),
                            path,
                        ));
                    }
                }
                path.pop();
            }
            check_min_items(field, set.len(), path)?;
            ConfigValue::Set(set)
        }
    };

    if let Some(validator) = &field.validator {
        validator.check(&value, path)?;
    }

    Ok(value)
}

fn check_min_items(field: &FieldSchema, len: usize, path: &[String]) -> Result<(), SchemaError> {
    match field.min_items {
        Some(min) if len < min => Err(SchemaError::validation(
            format!("attribute supports {min} item minimum, config has {len} declared"),
            path,
        )),
        _ => Ok(()),
    }
}
