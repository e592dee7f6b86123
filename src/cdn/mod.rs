//! CDN REST API 的交付规则条件模型

pub mod models;

pub use models::{
    DeliveryRuleCondition, DeliveryRuleUrlPathCondition, MatchConditionName, Transform,
    UrlPathMatchConditionParameters, UrlPathOperator, URL_PATH_MATCH_CONDITION_ODATA_TYPE,
};
