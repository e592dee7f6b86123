use serde_json::Value;
use strum::IntoEnumIterator;

use crate::cdn::{
    DeliveryRuleUrlPathCondition, MatchConditionName, Transform, UrlPathMatchConditionParameters,
    UrlPathOperator,
};
use crate::error::Result;
use crate::schema::{
    decode_config, ConfigMap, ConfigValue, FieldSchema, ResourceSchema, SchemaError, StringSet,
    Validator,
};

pub const OPERATOR: &str = "operator";
pub const NEGATE_CONDITION: &str = "negate_condition";
pub const MATCH_VALUES: &str = "match_values";
pub const TRANSFORMS: &str = "transforms";

/// URL 路径条件的配置 schema
pub fn url_path() -> ResourceSchema {
    ResourceSchema::new()
        .field(
            OPERATOR,
            FieldSchema::string().required().with_validator(Validator::string_in_slice(
                UrlPathOperator::iter().map(|operator| operator.to_string()),
                false,
            )),
        )
        .field(
            NEGATE_CONDITION,
            FieldSchema::bool().optional().with_default(false),
        )
        .field(
            MATCH_VALUES,
            FieldSchema::set(
                FieldSchema::string().with_validator(Validator::string_is_not_white_space()),
            )
            .required()
            .with_min_items(1),
        )
        .field(
            TRANSFORMS,
            FieldSchema::list(FieldSchema::string().with_validator(Validator::string_in_slice(
                Transform::iter().map(|transform| transform.to_string()),
                false,
            )))
            .optional(),
        )
}

/// 已校验的 URL 路径条件配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlPathConditionConfig {
    pub operator: UrlPathOperator,
    pub negate_condition: bool,
    pub match_values: StringSet,
    pub transforms: Vec<Transform>,
}

impl UrlPathConditionConfig {
    pub fn new(operator: UrlPathOperator, match_values: impl IntoIterator<Item = String>) -> Self {
        Self {
            operator,
            negate_condition: false,
            match_values: match_values.into_iter().collect(),
            transforms: Vec::new(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.negate_condition = true;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// 从解码后的配置映射中读取
    ///
    /// 缺失的 `negate_condition` 视为 false，缺失的 `transforms` 视为空。
    pub fn from_config(config: &ConfigMap) -> std::result::Result<Self, SchemaError> {
        let operator = config
            .get(OPERATOR)
            .and_then(ConfigValue::as_str)
            .ok_or_else(|| SchemaError::type_mismatch(OPERATOR, "string"))?;
        let operator = operator
            .parse::<UrlPathOperator>()
            .map_err(|_| SchemaError::type_mismatch(OPERATOR, "url path operator"))?;

        let negate_condition = match config.get(NEGATE_CONDITION) {
            Some(value) => value
                .as_bool()
                .ok_or_else(|| SchemaError::type_mismatch(NEGATE_CONDITION, "bool"))?,
            None => false,
        };

        let match_values = config
            .get(MATCH_VALUES)
            .and_then(ConfigValue::as_set)
            .cloned()
            .ok_or_else(|| SchemaError::type_mismatch(MATCH_VALUES, "set"))?;

        let transforms = match config.get(TRANSFORMS) {
            Some(value) => value
                .as_list()
                .ok_or_else(|| SchemaError::type_mismatch(TRANSFORMS, "list"))?
                .iter()
                .map(|item| {
                    item.as_str()
                        .and_then(|text| text.parse::<Transform>().ok())
                        .ok_or_else(|| SchemaError::type_mismatch(TRANSFORMS, "list of transforms"))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            operator,
            negate_condition,
            match_values,
            transforms,
        })
    }
}

pub fn expand_url_path_condition(config: &UrlPathConditionConfig) -> DeliveryRuleUrlPathCondition {
    let mut parameters = UrlPathMatchConditionParameters::new(config.operator);
    parameters.negate_condition = Some(config.negate_condition);
    parameters.match_values = Some(config.match_values.to_vec());

    if !config.transforms.is_empty() {
        parameters.transforms = Some(config.transforms.clone());
    }

    tracing::debug!(
        operator = %config.operator,
        match_values = config.match_values.len(),
        transforms = config.transforms.len(),
        "expanded url path condition"
    );

    DeliveryRuleUrlPathCondition {
        name: MatchConditionName::UrlPath,
        parameters: Some(parameters),
    }
}

pub fn flatten_url_path_condition(condition: &DeliveryRuleUrlPathCondition) -> ConfigMap {
    let mut config = ConfigMap::new();

    let Some(parameters) = &condition.parameters else {
        tracing::debug!("url path condition has no parameters");
        return config;
    };

    config.insert(OPERATOR.to_string(), parameters.operator.to_string().into());

    if let Some(negate) = parameters.negate_condition {
        config.insert(NEGATE_CONDITION.to_string(), negate.into());
    }

    if let Some(match_values) = &parameters.match_values {
        let set: StringSet = match_values.iter().cloned().collect();
        config.insert(MATCH_VALUES.to_string(), set.into());
    }

    if let Some(transforms) = &parameters.transforms {
        let transforms: Vec<String> = transforms.iter().map(ToString::to_string).collect();
        config.insert(TRANSFORMS.to_string(), transforms.into());
    }

    config
}

/// 校验原始 JSON 配置并展开
pub fn expand_url_path_condition_from_value(value: &Value) -> Result<DeliveryRuleUrlPathCondition> {
    let config = decode_config(&url_path(), value)?;
    let config = UrlPathConditionConfig::from_config(&config)?;
    Ok(expand_url_path_condition(&config))
}
