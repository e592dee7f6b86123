use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// URL 路径条件参数的 `@odata.type` 取值
pub const URL_PATH_MATCH_CONDITION_ODATA_TYPE: &str =
    "Microsoft.Azure.Cdn.Models.DeliveryRuleUrlPathMatchConditionParameters";

/// 交付规则条件的判别名
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
    EnumString, VariantNames,
)]
pub enum MatchConditionName {
    UrlPath,
}

/// URL 路径匹配运算符
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
    EnumString, VariantNames,
)]
pub enum UrlPathOperator {
    Any,
    BeginsWith,
    Contains,
    EndsWith,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

/// 匹配前对请求值做的转换
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
    EnumString, VariantNames,
)]
pub enum Transform {
    Lowercase,
    Uppercase,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlPathMatchConditionParameters {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    pub operator: UrlPathOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate_condition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<Transform>>,
}

impl UrlPathMatchConditionParameters {
    pub fn new(operator: UrlPathOperator) -> Self {
        Self {
            odata_type: Some(URL_PATH_MATCH_CONDITION_ODATA_TYPE.to_string()),
            operator,
            negate_condition: None,
            match_values: None,
            transforms: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRuleUrlPathCondition {
    pub name: MatchConditionName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<UrlPathMatchConditionParameters>,
}

/// 按 `name` 判别的交付规则条件
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeliveryRuleCondition {
    UrlPath(DeliveryRuleUrlPathCondition),
}

impl DeliveryRuleCondition {
    pub fn name(&self) -> MatchConditionName {
        match self {
            DeliveryRuleCondition::UrlPath(condition) => condition.name,
        }
    }
}

impl From<DeliveryRuleUrlPathCondition> for DeliveryRuleCondition {
    fn from(condition: DeliveryRuleUrlPathCondition) -> Self {
        DeliveryRuleCondition::UrlPath(condition)
    }
}

impl<'de> Deserialize<'de> for DeliveryRuleCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("name"))?;

        match name.parse::<MatchConditionName>() {
            Ok(MatchConditionName::UrlPath) => serde_json::from_value(value)
                .map(DeliveryRuleCondition::UrlPath)
                .map_err(D::Error::custom),
            Err(_) => Err(D::Error::unknown_variant(name, MatchConditionName::VARIANTS)),
        }
    }
}
