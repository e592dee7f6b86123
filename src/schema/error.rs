use thiserror::Error;

/// Schema 错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema `{0}` not registered")]
    NotRegistered(String),
    #[error("schema validation failed at `{}`: {message}", path.join("."))]
    Validation { message: String, path: Vec<String> },
    #[error("field `{field}` is not a {expected}")]
    TypeMismatch { field: String, expected: &'static str },
    #[error("schema registry lock poisoned")]
    RegistryPoisoned,
}

impl SchemaError {
    pub(crate) fn validation(message: impl Into<String>, path: &[String]) -> Self {
        SchemaError::Validation {
            message: message.into(),
            path: path.to_vec(),
        }
    }

    pub(crate) fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        SchemaError::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// 出错字段的路径（仅 Validation 有）
    pub fn path(&self) -> Option<&[String]> {
        match self {
            SchemaError::Validation { path, .. } => Some(path),
            _ => None,
        }
    }
}
