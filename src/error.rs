use thiserror::Error;

use crate::schema::SchemaError;

pub type Result<T> = std::result::Result<T, CdnRuleError>;

#[derive(Debug, Error)]
pub enum CdnRuleError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("unknown delivery rule condition `{0}`")]
    UnknownCondition(String),
    #[error("unsupported document format `{0}`")]
    UnsupportedFormat(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for CdnRuleError {
    fn from(error: serde_json::Error) -> Self {
        CdnRuleError::Serialization(error.to_string())
    }
}

impl From<serde_yaml::Error> for CdnRuleError {
    fn from(error: serde_yaml::Error) -> Self {
        CdnRuleError::Serialization(error.to_string())
    }
}
