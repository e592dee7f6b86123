//! 交付规则条件：各条件块的 schema 以及展开/扁平化

pub mod url_path;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::cdn::DeliveryRuleCondition;
use crate::error::{CdnRuleError, Result};
use crate::schema::{register_schema, ConfigMap, ResourceSchema};

pub use url_path::{
    expand_url_path_condition, expand_url_path_condition_from_value, flatten_url_path_condition,
    url_path, UrlPathConditionConfig,
};

/// 交付规则支持的条件块
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    UrlPath,
}

impl ConditionKind {
    pub const ALL: &'static [ConditionKind] = &[ConditionKind::UrlPath];

    /// 配置中的块名
    pub fn block_name(self) -> &'static str {
        match self {
            ConditionKind::UrlPath => "url_path_condition",
        }
    }

    pub fn from_block_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.block_name() == name)
    }

    pub fn schema(self) -> ResourceSchema {
        match self {
            ConditionKind::UrlPath => url_path().with_name(self.block_name()),
        }
    }

    pub fn expand(self, value: &Value) -> Result<DeliveryRuleCondition> {
        match self {
            ConditionKind::UrlPath => expand_url_path_condition_from_value(value).map(Into::into),
        }
    }
}

/// 把所有条件块的 schema 注册到全局注册表
pub fn register_builtin_conditions() {
    for kind in ConditionKind::ALL {
        tracing::debug!(block = kind.block_name(), "registering delivery rule condition");
        register_schema(kind.block_name(), kind.schema());
    }
}

/// 展开一个条件文档
///
/// 文档是对象，键为块名，值为该类条件配置的数组（单个对象也接受）。
pub fn expand_delivery_rule_conditions(document: &Value) -> Result<Vec<DeliveryRuleCondition>> {
    let object = document.as_object().ok_or_else(|| {
        CdnRuleError::Serialization("delivery rule conditions must be an object".to_string())
    })?;

    let mut conditions = Vec::new();
    for (block, entries) in object {
        let kind = ConditionKind::from_block_name(block)
            .ok_or_else(|| CdnRuleError::UnknownCondition(block.clone()))?;

        let entries = match entries {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            Value::Null => Vec::new(),
            other => vec![other],
        };
        for entry in entries {
            conditions.push(kind.expand(entry)?);
        }
    }

    tracing::debug!(count = conditions.len(), "expanded delivery rule conditions");
    Ok(conditions)
}

pub fn flatten_delivery_rule_conditions(
    conditions: &[DeliveryRuleCondition],
) -> BTreeMap<String, Vec<ConfigMap>> {
    let mut blocks: BTreeMap<String, Vec<ConfigMap>> = BTreeMap::new();
    for condition in conditions {
        let (kind, config) = match condition {
            DeliveryRuleCondition::UrlPath(url_path) => {
                (ConditionKind::UrlPath, flatten_url_path_condition(url_path))
            }
        };
        blocks
            .entry(kind.block_name().to_string())
            .or_default()
            .push(config);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registered_schema;
    use serde_json::json;

    #[test]
    fn block_names_resolve() {
        assert_eq!(
            ConditionKind::from_block_name("url_path_condition"),
            Some(ConditionKind::UrlPath)
        );
        assert_eq!(ConditionKind::from_block_name("request_method_condition"), None);
    }

    #[test]
    fn builtin_conditions_are_registered() {
        register_builtin_conditions();
        let schema = registered_schema("url_path_condition").expect("registered");
        assert_eq!(schema.fields.len(), 4);
    }

    #[test]
    fn unknown_block_is_rejected() {
        let err = expand_delivery_rule_conditions(&json!({ "cookies_condition": [] })).unwrap_err();
        assert!(matches!(err, CdnRuleError::UnknownCondition(name) if name == "cookies_condition"));
    }

    #[test]
    fn single_object_block_is_accepted() {
        let conditions = expand_delivery_rule_conditions(&json!({
            "url_path_condition": { "operator": "Any", "match_values": ["*"] }
        }))
        .expect("valid document");
        assert_eq!(conditions.len(), 1);
    }
}
